//! Room model

use serde::{Deserialize, Serialize};

/// Room type; capacity is a fixed 1:1 mapping from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Twin,
    Queen,
}

impl RoomType {
    /// Derived sleeping capacity — never client-settable
    pub fn capacity(&self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Twin | Self::Queen => 2,
        }
    }
}

/// The fixed set of amenities a room may declare; anything else is
/// silently dropped on write.
pub const ROOM_AMENITIES: [&str; 12] = [
    "WiFi",
    "Air Conditioning",
    "Smart TV",
    "Heating",
    "Minibar",
    "Terrace",
    "Panoramic View",
    "Safe",
    "Room Service",
    "Desk",
    "Hair Dryer",
    "Smoke Detector",
];

/// Keep only trimmed entries that belong to [`ROOM_AMENITIES`]
pub fn sanitize_amenities(amenities: &[String]) -> Vec<String> {
    amenities
        .iter()
        .map(|a| a.trim())
        .filter(|a| ROOM_AMENITIES.contains(a))
        .map(str::to_string)
        .collect()
}

/// Persisted room record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Derived from `room_type`, re-derived whenever the type changes
    pub capacity: u32,
    pub price: f64,
    /// Number of units available, >= 1
    pub available: u32,
    pub description: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create room payload; capacity is intentionally absent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price: f64,
    pub available: u32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub amenities: Option<Vec<String>>,
}

/// Partial room update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    pub price: Option<f64>,
    pub available: Option<u32>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_follows_type() {
        assert_eq!(RoomType::Single.capacity(), 1);
        assert_eq!(RoomType::Twin.capacity(), 2);
        assert_eq!(RoomType::Queen.capacity(), 2);
    }

    #[test]
    fn unknown_amenities_are_dropped() {
        let input = vec![
            "WiFi".to_string(),
            " Minibar ".to_string(),
            "Helipad".to_string(),
        ];
        assert_eq!(sanitize_amenities(&input), vec!["WiFi", "Minibar"]);
    }

    #[test]
    fn room_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RoomType::Queen).unwrap(),
            "\"queen\""
        );
    }
}
