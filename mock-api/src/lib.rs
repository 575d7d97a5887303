//! Vaova simulated backend
//!
//! A hotel-management demo backend that lives entirely in-process: a redb
//! key-value substrate plays the browser's durable storage, sessions hold
//! a single slot, and tokens are cosmetic. The crate enforces everything
//! the UI must not: validation, authorization, referential integrity
//! across linked entities and derived-score recomputation.
//!
//! # Module structure
//!
//! ```text
//! mock-api/src/
//! ├── core/          # config, shared state, the Backend facade
//! ├── auth/          # token issuing, session management
//! ├── db/            # redb key-value store adapter
//! ├── repository/    # users, hotels, rooms CRUD
//! ├── services/      # score engine, reporting, seeder
//! └── utils/         # clock, logger
//! ```

pub mod auth;
pub mod core;
pub mod db;
pub mod repository;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::auth::{SessionManager, SessionStore, TokenIssuer};
pub use crate::core::{AppState, Backend, Config};
pub use crate::db::{KvStore, StagedWrite, StoreError};
pub use crate::repository::{HotelRepository, RoomRepository, UserRepository};
pub use crate::services::{ReportingService, Seeder, compute_score};
pub use crate::utils::{Clock, ManualClock, SystemClock, init_logger};

// Re-export the unified error types from shared
pub use shared::{AppError, AppResult, ErrorCode};
