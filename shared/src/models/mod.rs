//! Data models
//!
//! Shared between the simulated backend and the frontend. All structs
//! serialize with camelCase field names so the persisted JSON matches the
//! collection layout the UI expects (`users`, `hotels`, `rooms`).

pub mod hotel;
pub mod room;
pub mod session;
pub mod stats;
pub mod user;

// Re-exports
pub use hotel::*;
pub use room::*;
pub use session::*;
pub use stats::*;
pub use user::*;
