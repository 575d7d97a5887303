//! Backend configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | VAOVA_DATA_PATH | (in-memory) | redb database file |
//! | VAOVA_LATENCY_MS | 500 | simulated network latency |
//! | VAOVA_SESSION_TTL_MS | 604800000 | session lifetime (7 days) |

use std::path::PathBuf;
use std::time::Duration;

/// Seven days, matching the token expiration claim
const DEFAULT_SESSION_TTL_MS: u64 = 7 * 24 * 60 * 60 * 1000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Database file; `None` keeps everything in memory
    pub data_path: Option<PathBuf>,
    /// Artificial latency inserted before every public operation.
    /// Purely cosmetic network emulation; zero disables it.
    pub simulated_latency: Duration,
    /// Session lifetime from login/register to expiry
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            simulated_latency: Duration::from_millis(500),
            session_ttl: Duration::from_millis(DEFAULT_SESSION_TTL_MS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_path: std::env::var("VAOVA_DATA_PATH").ok().map(PathBuf::from),
            simulated_latency: std::env::var("VAOVA_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.simulated_latency),
            session_ttl: std::env::var("VAOVA_SESSION_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.session_ttl),
        }
    }

    /// In-memory store, no latency — the configuration every test uses
    pub fn for_tests() -> Self {
        Self {
            data_path: None,
            simulated_latency: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn session_ttl_millis(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }
}
