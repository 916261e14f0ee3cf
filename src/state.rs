//! Shared application state for all routes. The registry is passed in explicitly rather than held globally.

use crate::config::Config;
use crate::store::Registry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn Registry>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(registry: Arc<dyn Registry>, config: Config) -> Self {
        Self {
            registry,
            config: Arc::new(config),
        }
    }
}
