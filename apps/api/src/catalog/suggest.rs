//! Attribute autocomplete: substring lookup over stored distinct values.

use crate::catalog::{PostingCatalog, SuggestField};
use crate::errors::AppError;
use crate::matching::normalize::canonical;

pub const SUGGESTION_LIMIT: usize = 10;
pub const MIN_QUERY_LEN: usize = 1;

/// Up to [`SUGGESTION_LIMIT`] stored values of `field` containing `query`.
pub async fn suggest(
    catalog: &dyn PostingCatalog,
    field: SuggestField,
    query: &str,
) -> Result<Vec<String>, AppError> {
    if canonical(query).chars().count() < MIN_QUERY_LEN {
        return Ok(Vec::new());
    }
    let values = catalog.distinct_values(field).await?;
    Ok(filter_suggestions(values, query))
}

/// Keeps distinct values whose canonical form contains the canonical query.
pub fn filter_suggestions(values: Vec<String>, query: &str) -> Vec<String> {
    let needle = canonical(query);
    if needle.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut out: Vec<String> = Vec::new();
    for value in values {
        if out.len() == SUGGESTION_LIMIT {
            break;
        }
        if canonical(&value).contains(&needle) && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
