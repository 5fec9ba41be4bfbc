//! Axum route handlers for attribute autocomplete.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::catalog::suggest::suggest;
use crate::catalog::SuggestField;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /autocomplete/:field?q=
///
/// Unknown fields and catalog failures both answer with an empty list.
pub async fn handle_autocomplete(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Query(params): Query<SuggestQuery>,
) -> Json<Vec<String>> {
    let Some(field) = SuggestField::parse(&field) else {
        return Json(Vec::new());
    };

    match suggest(state.catalog.as_ref(), field, &params.q).await {
        Ok(values) => Json(values),
        Err(e) => {
            warn!("Autocomplete for {} failed: {e}", field.column());
            Json(Vec::new())
        }
    }
}
