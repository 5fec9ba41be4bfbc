mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::postgres::PgCatalog;
use crate::catalog::sample::sample_postings;
use crate::catalog::{InMemoryCatalog, PostingCatalog};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting internship recommender v{}", env!("CARGO_PKG_VERSION"));

    let catalog = build_catalog(&config).await?;

    info!(
        "Stipend tiers: high ≥ {}, mid ≥ {}",
        config.stipend_tiers.high, config.stipend_tiers.mid
    );

    let state = AppState {
        catalog,
        config: config.clone(),
    };

    // Permissive CORS: the form frontend is served from a separate origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the candidate supply: PostgreSQL when `DATABASE_URL` is set, the
/// bundled sample catalog otherwise.
async fn build_catalog(config: &Config) -> Result<Arc<dyn PostingCatalog>> {
    let Some(url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL not set; serving the bundled sample catalog from memory");
        return Ok(Arc::new(InMemoryCatalog::new(sample_postings())));
    };

    let catalog = PgCatalog::connect(url).await?;
    catalog.ensure_schema().await?;

    if config.seed_sample_data {
        catalog.replace_with(&sample_postings()).await?;
    }

    Ok(Arc::new(catalog))
}
