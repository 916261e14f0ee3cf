//! Claim submission and lookup.

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extractors::ApiJson;
use crate::models::{ClaimRequest, FraClaim};
use crate::response::{created, ok, ClaimCreated};
use crate::service::ClaimService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::collections::HashMap;

fn parse_id(field: &str, id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid {}", field)))
}

#[utoipa::path(
    post,
    path = "/api/claims",
    tag = "claims",
    request_body = ClaimRequest,
    responses(
        (status = 201, description = "Claim stored with status Pending", body = ClaimCreated),
        (status = 400, description = "Missing or malformed field", body = ErrorBody),
        (status = 404, description = "Village does not exist", body = ErrorBody)
    )
)]
pub async fn add_claim(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<ClaimRequest>,
) -> AppResult<impl IntoResponse> {
    let claim = ClaimService::submit(state.registry.as_ref(), body).await?;
    Ok(created(ClaimCreated::new(claim.id)))
}

#[utoipa::path(
    get,
    path = "/api/claims",
    tag = "claims",
    params(("village_id" = Option<i64>, Query, description = "Only claims for this village")),
    responses(
        (status = 200, description = "Claims ordered by id", body = Vec<FraClaim>),
        (status = 400, description = "Non-integer village_id", body = ErrorBody)
    )
)]
pub async fn list_claims(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<impl IntoResponse> {
    let village_id = params
        .get("village_id")
        .map(|v| parse_id("village_id", v))
        .transpose()?;
    let claims = state.registry.list_claims(village_id).await?;
    Ok(ok(claims))
}

#[utoipa::path(
    get,
    path = "/api/claims/{id}",
    tag = "claims",
    params(("id" = i64, Path, description = "Claim id")),
    responses(
        (status = 200, description = "The claim", body = FraClaim),
        (status = 400, description = "Non-integer id", body = ErrorBody),
        (status = 404, description = "No such claim", body = ErrorBody)
    )
)]
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id("id", &id_str)?;
    let claim = state
        .registry
        .get_claim(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("claim {}", id)))?;
    Ok(ok(claim))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_id("id", " 12 ").unwrap(), 12);
        let err = parse_id("village_id", "one").unwrap_err();
        assert_eq!(err.to_string(), "bad request: invalid village_id");
    }
}
