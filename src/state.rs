//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;

/// Read-only state handed to every handler.
///
/// Nothing in here is mutated after startup, so concurrent requests never
/// observe each other.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
