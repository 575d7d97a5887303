//! Hotel model

use super::room::Room;
use serde::{Deserialize, Serialize};

/// Persisted hotel record
///
/// `score` is derived (see the score engine) and never trusted from input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub country: String,
    pub state: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Star rating, 1..=5
    pub stars: u8,
    /// Derived quality score, 0..=100
    pub score: u8,
    /// Gallery images as data URIs
    pub gallery: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create hotel payload (score is always computed server-side)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCreate {
    pub name: String,
    pub description: String,
    pub country: String,
    pub state: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub stars: u8,
}

/// Partial hotel update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub logo: Option<String>,
    pub stars: Option<u8>,
}

/// Create hotel together with its login account (admin flow)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelAccountCreate {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub description: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub stars: u8,
}

/// Credential patch applied to the linked account during a hotel update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelCredentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl HotelCredentials {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Hotel annotated with its total available rooms (listing view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSummary {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub total_rooms: u32,
}

/// Hotel with its rooms attached
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

/// Admin listing view: hotel joined with its account credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminHotelView {
    #[serde(flatten)]
    pub hotel: Hotel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
