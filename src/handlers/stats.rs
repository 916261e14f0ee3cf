//! Registry counters for the dashboard.

use crate::error::AppResult;
use crate::models::RegistryStats;
use crate::state::AppState;
use axum::{extract::State, Json};

/// Village and claim counts for the dashboard.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    responses((status = 200, description = "Registry counters", body = RegistryStats))
)]
pub async fn registry_stats(State(state): State<AppState>) -> AppResult<Json<RegistryStats>> {
    Ok(Json(state.registry.stats().await?))
}
