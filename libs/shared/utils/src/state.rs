use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use shared_config::AppConfig;
use shared_database::{JsonFileStore, RecordStore};

use crate::clock::{Clock, SystemClock};

/// Shared router state: configuration, the record store and the clock.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn RecordStore>,
    pub clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// File-backed store under `config.data_dir` with the system clock.
    pub fn from_config(config: AppConfig) -> Self {
        let store = Arc::new(JsonFileStore::new(&config));
        Self::new(config, store, Arc::new(SystemClock))
    }

    /// Held across a read-validate-write sequence so mutations inside this
    /// process never interleave.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
