//! Application state containing shared resources.

use std::sync::Arc;

use crate::adapters::memory_store::MemoryStore;
use crate::config::settings::AppSettings;
use crate::repos::store::GameStore;

/// Shared resources handed to session construction: the persistence store
/// and the loaded settings.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
    pub settings: AppSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn GameStore>, settings: AppSettings) -> Self {
        Self { store, settings }
    }

    /// In-memory store with default settings (no environment reads).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), AppSettings::default())
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::in_memory()
    }
}
