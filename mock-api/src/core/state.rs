//! Shared application state

use super::config::Config;
use crate::auth::SessionStore;
use crate::db::KvStore;
use crate::utils::Clock;
use shared::AppResult;
use std::sync::Arc;

/// Everything the repositories and services share: the durable store, the
/// single ephemeral session slot, the injected clock and the config.
/// Cheap to clone; handles are constructed per call.
#[derive(Clone)]
pub struct AppState {
    pub store: KvStore,
    pub sessions: SessionStore,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let store = match &config.data_path {
            Some(path) => KvStore::open(path)?,
            None => KvStore::open_in_memory()?,
        };
        Ok(Self {
            store,
            sessions: SessionStore::default(),
            clock,
            config: Arc::new(config),
        })
    }

    /// Current time from the injected clock
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Artificial network latency applied at the top of every public
    /// operation. Has no ordering or correctness implication.
    pub async fn simulate_latency(&self) {
        let latency = self.config.simulated_latency;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}
