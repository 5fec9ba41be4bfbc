//! PostgreSQL-backed catalog over the `internships` table.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::catalog::{PostingCatalog, SuggestField};
use crate::errors::AppError;
use crate::models::lenient::parse_stipend;
use crate::models::posting::Posting;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS internships (
        id          UUID PRIMARY KEY,
        title       TEXT,
        company     TEXT,
        education   TEXT,
        department  TEXT,
        sector      TEXT,
        location    TEXT,
        skills      TEXT[] NOT NULL DEFAULT '{}',
        duration    TEXT,
        stipend     TEXT,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

/// Insertion sequence; rows written in one transaction share `created_at`.
const ADD_SEQUENCE: &str =
    "ALTER TABLE internships ADD COLUMN IF NOT EXISTS seq BIGSERIAL";

/// Catalog order. Distinct-value lookups report values in this order too.
const CATALOG_ORDER: &str = "seq, id";

/// First-seen distinct values of a field, in catalog order. Skill arrays are
/// unnested with their position so ties within a row keep array order.
fn distinct_values_sql(field: SuggestField) -> String {
    match field {
        SuggestField::Skills => format!(
            "SELECT value FROM ( \
                SELECT DISTINCT ON (u.value) u.value, i.seq, i.id, u.pos \
                FROM internships i, unnest(i.skills) WITH ORDINALITY AS u(value, pos) \
                ORDER BY u.value, i.seq, i.id, u.pos \
             ) first_seen ORDER BY {CATALOG_ORDER}, pos"
        ),
        other => format!(
            "SELECT value FROM ( \
                SELECT DISTINCT ON ({col}) {col} AS value, seq, id \
                FROM internships WHERE {col} IS NOT NULL \
                ORDER BY {col}, {CATALOG_ORDER} \
             ) first_seen ORDER BY {CATALOG_ORDER}",
            col = other.column()
        ),
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct InternshipRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub company: Option<String>,
    pub education: Option<String>,
    pub department: Option<String>,
    pub sector: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub duration: Option<String>,
    pub stipend: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<InternshipRow> for Posting {
    fn from(row: InternshipRow) -> Self {
        let mut details = Map::new();
        details.insert("id".to_string(), Value::String(row.id.to_string()));
        details.insert(
            "created_at".to_string(),
            Value::String(row.created_at.to_rfc3339()),
        );
        for (key, value) in [
            ("title", row.title),
            ("company", row.company),
            ("duration", row.duration),
        ] {
            if let Some(value) = value {
                details.insert(key.to_string(), Value::String(value));
            }
        }

        Posting {
            education: row.education,
            department: row.department,
            sector: row.sector,
            location: row.location,
            skills: row.skills,
            stipend: row.stipend.as_deref().map(parse_stipend).unwrap_or(0),
            details,
        }
    }
}

pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    /// Opens a connection pool to the catalog database.
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to PostgreSQL...");
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        info!("PostgreSQL connection pool established");
        Ok(Self { pool })
    }

    /// Creates the `internships` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(ADD_SEQUENCE).execute(&self.pool).await?;
        info!("internships table ready");
        Ok(())
    }

    /// Replaces the whole catalog in one transaction. Returns rows inserted.
    pub async fn replace_with(&self, postings: &[Posting]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let cleared = sqlx::query("DELETE FROM internships")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        info!("Cleared {cleared} existing internships");

        let mut inserted = 0;
        for posting in postings {
            sqlx::query(
                r#"
                INSERT INTO internships
                    (id, title, company, education, department, sector,
                     location, skills, duration, stipend)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(posting.detail_str("title"))
            .bind(posting.detail_str("company"))
            .bind(posting.education.as_deref())
            .bind(posting.department.as_deref())
            .bind(posting.sector.as_deref())
            .bind(posting.location.as_deref())
            .bind(&posting.skills)
            .bind(posting.detail_str("duration"))
            .bind(posting.stipend.to_string())
            .execute(&mut *tx)
            .await?;
            inserted += 1;
        }

        tx.commit().await?;
        info!("Seeded {inserted} internships");
        Ok(inserted)
    }
}

#[async_trait]
impl PostingCatalog for PgCatalog {
    async fn all_postings(&self) -> Result<Vec<Posting>, AppError> {
        let sql = format!("SELECT * FROM internships ORDER BY {CATALOG_ORDER}");
        let rows = sqlx::query_as::<_, InternshipRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Posting::from).collect())
    }

    async fn distinct_values(&self, field: SuggestField) -> Result<Vec<String>, AppError> {
        // Column names come from a closed enum, never from the request.
        let sql = distinct_values_sql(field);
        let values = sqlx::query_scalar::<_, String>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(values)
    }
}
