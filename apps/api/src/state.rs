use std::sync::Arc;

use crate::catalog::PostingCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable candidate supply. Postgres when configured, in-memory sample catalog otherwise.
    pub catalog: Arc<dyn PostingCatalog>,
    pub config: Config,
}
