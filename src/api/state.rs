//! API shared state

use std::time::Instant;

use crate::actors::registry::RegistryHandle;

/// Shared state passed to all API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Handle to the registry actor owning the board document
    pub registry: RegistryHandle,

    /// When the API state was created, for the health endpoint
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(registry: RegistryHandle) -> Self {
        Self {
            registry,
            started_at: Instant::now(),
        }
    }
}
