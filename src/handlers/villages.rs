//! `GET /api/villages`.

use crate::error::{AppResult, ErrorBody};
use crate::models::Village;
use crate::state::AppState;
use axum::{extract::State, Json};

/// All villages, ordered by id. No pagination or filtering.
#[utoipa::path(
    get,
    path = "/api/villages",
    tag = "villages",
    responses(
        (status = 200, description = "Every village", body = Vec<Village>),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    )
)]
pub async fn list_villages(State(state): State<AppState>) -> AppResult<Json<Vec<Village>>> {
    let villages = state.registry.list_villages().await?;
    Ok(Json(villages))
}
