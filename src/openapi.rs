//! OpenAPI document for every `/api` route.

use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers;
use crate::models::{ClaimRequest, FraClaim, RegistryStats, Village};
use crate::response::{ClaimCreated, HealthBody, ReadyBody, VersionBody};

#[derive(OpenApi)]
#[openapi(
    info(title = "FRA Registry API", version = "0.1.0"),
    paths(
        handlers::system::health,
        handlers::system::ready,
        handlers::system::version,
        handlers::villages::list_villages,
        handlers::claims::add_claim,
        handlers::claims::list_claims,
        handlers::claims::get_claim,
        handlers::stats::registry_stats,
    ),
    components(schemas(
        Village,
        FraClaim,
        ClaimRequest,
        ClaimCreated,
        RegistryStats,
        HealthBody,
        ReadyBody,
        VersionBody,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "system", description = "Liveness, readiness and version"),
        (name = "villages", description = "Village records"),
        (name = "claims", description = "Forest Rights Act claims"),
        (name = "stats", description = "Dashboard counters")
    )
)]
pub struct ApiDoc;
