use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::narrative::StipendTiers;

/// Application configuration loaded from environment variables.
/// Fails at startup if a present variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog database. Without it the bundled sample catalog is served from memory.
    pub database_url: Option<String>,
    /// Replace the database catalog with the sample postings on startup.
    pub seed_sample_data: bool,
    pub port: u16,
    pub rust_log: String,
    pub stipend_tiers: StipendTiers,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            seed_sample_data: false,
            port: 4000,
            rust_log: "info".to_string(),
            stipend_tiers: StipendTiers::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            seed_sample_data: parse_value(
                "SEED_SAMPLE_DATA",
                optional_env("SEED_SAMPLE_DATA"),
                defaults.seed_sample_data,
            )?,
            port: parse_value("PORT", optional_env("PORT"), defaults.port)?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            stipend_tiers: StipendTiers {
                high: parse_value(
                    "STIPEND_HIGH_TIER",
                    optional_env("STIPEND_HIGH_TIER"),
                    defaults.stipend_tiers.high,
                )?,
                mid: parse_value(
                    "STIPEND_MID_TIER",
                    optional_env("STIPEND_MID_TIER"),
                    defaults.stipend_tiers.mid,
                )?,
            },
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_uses_default() {
        assert_eq!(parse_value::<u16>("PORT", None, 4000).unwrap(), 4000);
    }

    #[test]
    fn test_value_is_trimmed_and_parsed() {
        assert_eq!(
            parse_value::<u64>("STIPEND_HIGH_TIER", Some(" 30000 ".to_string()), 25000).unwrap(),
            30000
        );
        assert!(parse_value::<bool>("SEED_SAMPLE_DATA", Some("true".to_string()), false).unwrap());
    }

    #[test]
    fn test_invalid_value_names_the_variable() {
        let err = parse_value::<u16>("PORT", Some("http".to_string()), 4000).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
