//! Shared types for the vaova simulated backend
//!
//! Data models, the unified error taxonomy, and small utilities used by
//! the `mock-api` crate and any future frontend bridge.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
