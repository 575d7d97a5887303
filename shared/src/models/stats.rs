//! Reporting payloads

use super::hotel::Hotel;
use serde::{Deserialize, Serialize};

/// Hotels bucketed by star rating (3/4/5 — lower ratings are not tracked)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBuckets {
    #[serde(rename = "3")]
    pub three: u32,
    #[serde(rename = "4")]
    pub four: u32,
    #[serde(rename = "5")]
    pub five: u32,
}

/// Admin statistics rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_hotels: u32,
    /// Sum of `available` across every room
    pub total_rooms: u32,
    /// Rounded mean of all hotel scores, 0 when there are no hotels
    pub average_score: u8,
    pub hotels_by_stars: StarBuckets,
}

/// One entry of the top-5-by-score ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHotel {
    pub rank: u32,
    pub hotel: Hotel,
    /// Score mapped to 0..=5, one decimal
    pub rating: f64,
    pub score_percentage: u8,
}

/// Per-country hotel distribution entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryShare {
    pub country: String,
    pub count: u32,
    /// `round(count / total * 100)`
    pub percentage: u32,
}

/// Dashboard aggregate composed over [`AdminStats`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_hotels: u32,
    /// Hotels with a computed score (score > 0)
    pub active_hotels: u32,
    pub total_rooms: u32,
    pub average_score: u8,
    pub top_hotels: Vec<TopHotel>,
    pub hotels_by_country: Vec<CountryShare>,
    pub hotels_by_stars: StarBuckets,
}
