//! Response bodies and status helpers shared by the handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness payload: `{"status":"ok","message":"Backend running"}`.
#[derive(Serialize, ToSchema)]
pub struct HealthBody {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadyBody {
    pub status: &'static str,
    pub database: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct VersionBody {
    pub name: &'static str,
    pub version: &'static str,
}

/// Body of a successful `POST /api/claims`.
#[derive(Serialize, ToSchema)]
pub struct ClaimCreated {
    pub message: &'static str,
    pub id: i64,
}

impl ClaimCreated {
    pub fn new(id: i64) -> Self {
        Self {
            message: "Claim added",
            id,
        }
    }
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}
