//! Public facade
//!
//! One handle exposing the whole simulated API surface:
//! `auth` (login/register/logout/current_user), the entity repositories,
//! reporting, seeding and `clear_all`.

use super::{AppState, Config};
use crate::auth::SessionManager;
use crate::repository::{HotelRepository, RoomRepository, UserRepository};
use crate::services::{ReportingService, Seeder};
use crate::utils::{Clock, SystemClock};
use shared::AppResult;
use std::sync::Arc;

pub struct Backend {
    state: AppState,
}

impl Backend {
    /// Open the backend with the wall clock
    pub fn open(config: Config) -> AppResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Open the backend with an injected clock (tests)
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> AppResult<Self> {
        Ok(Self {
            state: AppState::new(config, clock)?,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn auth(&self) -> SessionManager {
        SessionManager::new(self.state.clone())
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.state.clone())
    }

    pub fn hotels(&self) -> HotelRepository {
        HotelRepository::new(self.state.clone())
    }

    pub fn rooms(&self) -> RoomRepository {
        RoomRepository::new(self.state.clone())
    }

    pub fn reporting(&self) -> ReportingService {
        ReportingService::new(self.state.clone())
    }

    /// Ensure baseline data exists; idempotent
    pub async fn seed(&self) -> AppResult<()> {
        Seeder::new(self.state.clone()).run().await
    }

    /// Drop every collection and the active session
    pub async fn clear_all(&self) -> AppResult<()> {
        self.state.store.clear_all()?;
        self.state.sessions.clear();
        tracing::info!("All data cleared");
        Ok(())
    }
}
