//! Application state for the API server

use std::sync::Arc;
use std::time::Instant;

use lexis_core::storage::{MemoryStore, QueryStore};
use parking_lot::Mutex;

/// Store shared by every handler. Writes go through the mutex, so
/// insert-if-absent and delete are serialized.
pub type SharedStore = Arc<Mutex<Box<dyn QueryStore + Send>>>;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Record store
    pub store: SharedStore,
    /// Server start time for uptime calculation
    pub start_time: Instant,
}

impl AppState {
    /// Wrap any store backend.
    pub fn new(store: impl QueryStore + Send + 'static) -> Self {
        let store: Box<dyn QueryStore + Send> = Box::new(store);
        Self {
            store: Arc::new(Mutex::new(store)),
            start_time: Instant::now(),
        }
    }

    /// State backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
