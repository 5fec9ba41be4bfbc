//! Axum route handlers for the Recommendation API.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::matching::pipeline::{recommend, Recommendations};
use crate::models::profile::UserProfile;
use crate::state::AppState;

/// POST /recommend
///
/// Scores the whole catalog against the submitted profile and returns the
/// three capped tiers. A missing or unreadable body is an empty profile.
pub async fn handle_recommend(
    State(state): State<AppState>,
    body: Option<Json<UserProfile>>,
) -> Result<Json<Recommendations>, AppError> {
    let profile = body.map(|Json(p)| p).unwrap_or_default();
    let postings = state.catalog.all_postings().await?;
    let tiers = state.config.stipend_tiers;

    // CPU-bound parallel scoring stays off the async workers.
    let recommendations = tokio::task::spawn_blocking(move || recommend(&profile, postings, &tiers))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("recommendation task failed: {e}")))?;

    info!(
        "Recommended {} best fit, {} growth, {} alternative",
        recommendations.best_fit.len(),
        recommendations.growth.len(),
        recommendations.alternative.len()
    );

    Ok(Json(recommendations))
}
