//! Unified error handling
//!
//! Every failure the simulated backend can surface is an [`AppError`]
//! carrying an [`ErrorCode`]; the HTTP status a real API would answer
//! with is derived from the code, never stored.

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::AppError;

/// Result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;
