//! Application factory: configuration → registry → routes under `/api`.

use crate::config::{Config, StorageBackend};
use crate::error::AppError;
use crate::routes::{common_routes, registry_routes};
use crate::seed;
use crate::state::AppState;
use crate::store::{MemoryRegistry, PgRegistry, Registry};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Enforced by the body extractors, so overflow is a JSON 413.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Connect the configured registry and run the seed import if one is configured.
pub async fn build_state(config: Config) -> Result<AppState, AppError> {
    let registry: Arc<dyn Registry> = match config.storage {
        StorageBackend::Postgres => Arc::new(PgRegistry::connect(&config).await?),
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            Arc::new(MemoryRegistry::new())
        }
    };
    if let Some(path) = &config.seed_villages_path {
        seed::seed_from_file(registry.as_ref(), path).await?;
    }
    Ok(AppState::new(registry, config))
}

/// All routes nested under `/api`, with a body size limit and request tracing.
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(registry_routes(state));

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
