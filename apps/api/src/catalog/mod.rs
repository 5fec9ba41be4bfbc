//! Candidate supply — where the engine's postings come from.
//!
//! The engine never touches storage; handlers fetch the full catalog through
//! `PostingCatalog` and hand it over in memory. `AppState` holds an
//! `Arc<dyn PostingCatalog>`, chosen at startup from config.

pub mod handlers;
pub mod postgres;
pub mod sample;
pub mod suggest;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::posting::Posting;

/// Attributes that can be autocompleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestField {
    Skills,
    Sector,
    Location,
    Education,
    Department,
}

impl SuggestField {
    /// Maps a route segment to a field. Unknown names are `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "skills" => Some(Self::Skills),
            "sector" => Some(Self::Sector),
            "location" => Some(Self::Location),
            "education" => Some(Self::Education),
            "department" => Some(Self::Department),
            _ => None,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Sector => "sector",
            Self::Location => "location",
            Self::Education => "education",
            Self::Department => "department",
        }
    }

    /// Stored values of this field on one posting.
    fn values_of(self, posting: &Posting) -> Vec<&str> {
        match self {
            Self::Skills => posting.skills.iter().map(String::as_str).collect(),
            Self::Sector => single(&posting.sector),
            Self::Location => single(&posting.location),
            Self::Education => single(&posting.education),
            Self::Department => single(&posting.department),
        }
    }
}

fn single(value: &Option<String>) -> Vec<&str> {
    value.as_deref().into_iter().collect()
}

#[async_trait]
pub trait PostingCatalog: Send + Sync {
    /// Every posting in the active catalog, in a stable order.
    async fn all_postings(&self) -> Result<Vec<Posting>, AppError>;

    /// Distinct stored values for a field, skill arrays flattened.
    async fn distinct_values(&self, field: SuggestField) -> Result<Vec<String>, AppError>;
}

/// Fixed in-memory catalog. Serves the bundled sample data when no database is configured.
pub struct InMemoryCatalog {
    postings: Vec<Posting>,
}

impl InMemoryCatalog {
    pub fn new(postings: Vec<Posting>) -> Self {
        Self { postings }
    }
}

#[async_trait]
impl PostingCatalog for InMemoryCatalog {
    async fn all_postings(&self) -> Result<Vec<Posting>, AppError> {
        Ok(self.postings.clone())
    }

    async fn distinct_values(&self, field: SuggestField) -> Result<Vec<String>, AppError> {
        let mut values: Vec<String> = Vec::new();
        for value in self.postings.iter().flat_map(|p| field.values_of(p)) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        Ok(values)
    }
}
