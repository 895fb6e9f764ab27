use crate::core::store::DietStore;
use crate::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex};

/// Shared by every request: the single store handle plus read settings.
/// SQLite serializes writers; the mutex only makes the connection `Sync`.
pub struct AppState {
    store: Mutex<DietStore>,
    pub window_days: u32,
}

impl AppState {
    pub fn new(store: DietStore, window_days: u32) -> Arc<Self> {
        Arc::new(Self {
            store: Mutex::new(store),
            window_days,
        })
    }

    pub fn with_store<T>(&self, f: impl FnOnce(&mut DietStore) -> AppResult<T>) -> AppResult<T> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| AppError::Server("store lock poisoned".to_string()))?;
        f(&mut *store)
    }

    /// Run a store call on tokio's blocking pool. SQLite I/O and the wait
    /// for the mutex never occupy an async worker thread.
    pub async fn run<T, F>(self: &Arc<Self>, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut DietStore) -> AppResult<T> + Send + 'static,
    {
        let state = Arc::clone(self);
        tokio::task::spawn_blocking(move || state.with_store(f))
            .await
            .map_err(|e| AppError::Server(format!("store task failed: {}", e)))?
    }

    pub fn into_store(self) -> Option<DietStore> {
        self.store.into_inner().ok()
    }
}
