//! In-memory registry for local development and tests. Contents are lost on restart.

use super::{check_new_village, missing_village, Registry};
use crate::error::AppError;
use crate::models::{FraClaim, NewClaim, NewVillage, RegistryStats, Village};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Tables {
    villages: BTreeMap<i64, Village>,
    claims: BTreeMap<i64, FraClaim>,
    next_village_id: i64,
    next_claim_id: i64,
}

impl Tables {
    fn push_village(&mut self, village: &NewVillage) -> Village {
        self.next_village_id += 1;
        let row = Village {
            id: self.next_village_id,
            name: village.name.clone(),
            state: village.state.clone(),
        };
        self.villages.insert(row.id, row.clone());
        row
    }
}

/// Ids are assigned sequentially from 1, like a fresh `BIGSERIAL`.
#[derive(Default)]
pub struct MemoryRegistry {
    tables: RwLock<Tables>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Registry for MemoryRegistry {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_villages(&self) -> Result<Vec<Village>, AppError> {
        Ok(self.read().villages.values().cloned().collect())
    }

    async fn village_exists(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.read().villages.contains_key(&id))
    }

    async fn insert_village(&self, village: &NewVillage) -> Result<Village, AppError> {
        check_new_village(village)?;
        let mut tables = self.write();
        Ok(tables.push_village(village))
    }

    async fn insert_villages(&self, villages: &[NewVillage]) -> Result<Vec<Village>, AppError> {
        for village in villages {
            check_new_village(village)?;
        }
        let mut tables = self.write();
        Ok(villages.iter().map(|v| tables.push_village(v)).collect())
    }

    async fn insert_claim(&self, claim: &NewClaim) -> Result<FraClaim, AppError> {
        let mut tables = self.write();
        if !tables.villages.contains_key(&claim.village_id) {
            return Err(missing_village(claim.village_id));
        }
        tables.next_claim_id += 1;
        let row = FraClaim {
            id: tables.next_claim_id,
            claimant_name: claim.claimant_name.clone(),
            claim_type: claim.claim_type.clone(),
            status: claim.status.clone(),
            village_id: claim.village_id,
            created_at: Utc::now(),
        };
        tables.claims.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_claim(&self, id: i64) -> Result<Option<FraClaim>, AppError> {
        Ok(self.read().claims.get(&id).cloned())
    }

    async fn list_claims(&self, village_id: Option<i64>) -> Result<Vec<FraClaim>, AppError> {
        Ok(self
            .read()
            .claims
            .values()
            .filter(|c| village_id.map_or(true, |v| c.village_id == v))
            .cloned()
            .collect())
    }

    async fn stats(&self) -> Result<RegistryStats, AppError> {
        let tables = self.read();
        let mut claims_by_status = BTreeMap::new();
        for claim in tables.claims.values() {
            *claims_by_status.entry(claim.status.clone()).or_insert(0) += 1;
        }
        Ok(RegistryStats {
            villages: tables.villages.len() as i64,
            claims: tables.claims.len() as i64,
            claims_by_status,
        })
    }
}
