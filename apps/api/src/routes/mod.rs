use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::catalog::handlers::handle_autocomplete;
use crate::matching::handlers::handle_recommend;
use crate::state::AppState;

/// GET /health
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "internship-recommender"
    }))
}

pub fn build_router(state: AppState) -> Router {
    // Versioned paths mirror the bare ones the existing frontend calls.
    let api = Router::new()
        .route("/recommend", post(handle_recommend))
        .route("/autocomplete/:field", get(handle_autocomplete));

    Router::new()
        .route("/health", get(health_handler))
        .merge(api.clone())
        .nest("/api/v1", api)
        .with_state(state)
}
