//! Claim submission against a registry.

use crate::error::AppError;
use crate::models::{ClaimRequest, FraClaim};
use crate::service::ClaimValidator;
use crate::store::{missing_village, Registry};

pub struct ClaimService;

impl ClaimService {
    /// Validate, confirm the village exists, then insert with status `Pending`.
    pub async fn submit(registry: &dyn Registry, request: ClaimRequest) -> Result<FraClaim, AppError> {
        let claim = ClaimValidator::validate(request)?;
        if !registry.village_exists(claim.village_id).await? {
            return Err(missing_village(claim.village_id));
        }
        let stored = registry.insert_claim(&claim).await?;
        tracing::info!(
            claim_id = stored.id,
            village_id = stored.village_id,
            claim_type = %stored.claim_type,
            "claim submitted"
        );
        Ok(stored)
    }
}
