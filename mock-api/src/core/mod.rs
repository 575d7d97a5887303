//! Configuration, shared state and the public facade

mod backend;
mod config;
mod state;

pub use backend::Backend;
pub use config::Config;
pub use state::AppState;
