//! Village and FRA claim records plus the typed inputs that create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Status every claim is stored with at submission.
pub const PENDING_STATUS: &str = "Pending";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Village {
    pub id: i64,
    pub name: String,
    /// Administrative region (Indian state).
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewVillage {
    pub name: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct FraClaim {
    pub id: i64,
    pub claimant_name: String,
    /// Category of claim, e.g. `Individual` or `Community`.
    pub claim_type: String,
    pub status: String,
    pub village_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/claims`. Unknown keys, including `status`, are ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClaimRequest {
    pub claimant_name: String,
    pub claim_type: String,
    pub village_id: i64,
}

/// A validated claim ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaim {
    pub claimant_name: String,
    pub claim_type: String,
    pub status: String,
    pub village_id: i64,
}

impl NewClaim {
    pub fn pending(claimant_name: String, claim_type: String, village_id: i64) -> Self {
        Self {
            claimant_name,
            claim_type,
            status: PENDING_STATUS.to_string(),
            village_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RegistryStats {
    pub villages: i64,
    pub claims: i64,
    pub claims_by_status: BTreeMap<String, i64>,
}
