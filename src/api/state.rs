//! Application state for shared services

use std::sync::Arc;

use crate::domain::RioClient;
use crate::infrastructure::services::RegistryService;

/// Application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<RegistryService>,
}

impl AppState {
    pub fn new(registry: RegistryService) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// State whose registry talks to the given client
    pub fn with_client(client: Arc<dyn RioClient>) -> Self {
        Self::new(RegistryService::new(client))
    }
}
