use crate::config::{Config, DEFAULT_MAX_BODY_BYTES};
use crate::storage::HookHistoryStore;
use std::sync::Arc;

/// Shared handler state. The store lives exactly as long as the server built from it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HookHistoryStore>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<HookHistoryStore>, max_body_bytes: usize) -> Self {
        Self {
            store,
            max_body_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(HookHistoryStore::new(config.cache_width)),
            config.max_body_bytes,
        )
    }

    pub fn with_cache_width(cache_width: usize) -> Self {
        Self::new(
            Arc::new(HookHistoryStore::new(cache_width)),
            DEFAULT_MAX_BODY_BYTES,
        )
    }
}
