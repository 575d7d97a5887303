//! Session model

use serde::{Deserialize, Serialize};

/// The single active session slot
///
/// Ephemeral: lives outside the durable collections and is cleared on
/// logout or the first expiry detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub token: String,
    /// Unix millis after which the session is rejected
    pub expires_at: i64,
}

impl Session {
    pub fn is_expired(&self, now_millis: i64) -> bool {
        now_millis > self.expires_at
    }
}
