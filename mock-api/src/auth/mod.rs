//! Authentication
//!
//! A simulated auth boundary: cosmetic bearer tokens plus a single-slot
//! session with expiry. Nothing here is a security primitive.

mod session;
mod token;

pub use session::{SessionManager, SessionStore};
pub use token::TokenIssuer;
