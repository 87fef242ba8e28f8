use std::sync::Arc;

use haru_core::store::EventStore;
use tokio::sync::{Mutex, MutexGuard};

/// Shared application state.
///
/// The store re-reads the database file on each request so external edits
/// are picked up; the mutex serializes read-modify-write cycles so
/// concurrent mutations cannot drop each other's changes.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<EventStore>>,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        AppState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn store(&self) -> MutexGuard<'_, EventStore> {
        self.store.lock().await
    }
}
