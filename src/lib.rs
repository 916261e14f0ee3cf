//! FRA registry: REST backend for villages and Forest Rights Act claims.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use app::{build_state, create_app};
pub use config::{Config, StorageBackend};
pub use error::{AppError, AppResult};
pub use models::{ClaimRequest, FraClaim, NewClaim, NewVillage, RegistryStats, Village, PENDING_STATUS};
pub use state::AppState;
pub use store::{MemoryRegistry, PgRegistry, Registry};
