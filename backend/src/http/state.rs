//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::ViewRegistry;
use crate::store::RecordStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ViewRegistry>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: RecordStore, config: AppConfig) -> Self {
        Self {
            registry: Arc::new(ViewRegistry::new(Arc::new(store))),
            config: Arc::new(config),
        }
    }
}
