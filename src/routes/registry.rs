//! Village and claim routes.

use crate::handlers::{add_claim, get_claim, list_claims, list_villages, registry_stats};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn registry_routes(state: AppState) -> Router {
    Router::new()
        .route("/villages", get(list_villages))
        .route("/claims", get(list_claims).post(add_claim))
        .route("/claims/:id", get(get_claim))
        .route("/stats", get(registry_stats))
        .with_state(state)
}
