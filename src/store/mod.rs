//! Registry storage: the `Registry` trait handlers depend on, with PostgreSQL and in-memory backends.

mod memory;
mod postgres;

pub use memory::MemoryRegistry;
pub use postgres::{ensure_database_exists, ensure_schema, PgRegistry};

use crate::error::AppError;
use crate::models::{FraClaim, NewClaim, NewVillage, RegistryStats, Village};
use async_trait::async_trait;

/// Reads and writes of villages and claims. Implementations are shared across requests.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Round-trip to the backing store. Used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;

    /// All villages ordered by id.
    async fn list_villages(&self) -> Result<Vec<Village>, AppError>;

    async fn village_exists(&self, id: i64) -> Result<bool, AppError>;

    async fn insert_village(&self, village: &NewVillage) -> Result<Village, AppError>;

    /// Insert every village or none of them. Rows come back in input order.
    async fn insert_villages(&self, villages: &[NewVillage]) -> Result<Vec<Village>, AppError>;

    /// Insert a claim. A `village_id` with no matching village is `AppError::NotFound`.
    async fn insert_claim(&self, claim: &NewClaim) -> Result<FraClaim, AppError>;

    async fn get_claim(&self, id: i64) -> Result<Option<FraClaim>, AppError>;

    /// Claims ordered by id, optionally restricted to one village.
    async fn list_claims(&self, village_id: Option<i64>) -> Result<Vec<FraClaim>, AppError>;

    async fn stats(&self) -> Result<RegistryStats, AppError>;
}

pub(crate) fn missing_village(village_id: i64) -> AppError {
    AppError::NotFound(format!("village {}", village_id))
}

/// Both backends refuse blank names and states before writing anything.
pub(crate) fn check_new_village(village: &NewVillage) -> Result<(), AppError> {
    if village.name.trim().is_empty() || village.state.trim().is_empty() {
        return Err(AppError::Validation("village needs a non-empty name and state".into()));
    }
    Ok(())
}
