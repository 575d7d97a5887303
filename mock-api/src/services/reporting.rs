//! Reporting rollups
//!
//! Read-only aggregates composed over the persisted collections. Both
//! entry points are admin-only.

use crate::auth::SessionManager;
use crate::core::AppState;
use crate::db::{HOTELS, ROOMS};
use shared::AppResult;
use shared::models::{
    AdminStats, CountryShare, DashboardData, Hotel, Room, StarBuckets, TopHotel,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct ReportingService {
    state: AppState,
}

impl ReportingService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// GET /api/admin/stats
    pub async fn stats(&self) -> AppResult<AdminStats> {
        self.state.simulate_latency().await;
        SessionManager::new(self.state.clone()).authorize_admin()?;
        Ok(self.build_stats())
    }

    /// GET /api/admin/dashboard — stats plus ranking and distribution
    pub async fn dashboard(&self) -> AppResult<DashboardData> {
        self.state.simulate_latency().await;
        SessionManager::new(self.state.clone()).authorize_admin()?;

        let stats = self.build_stats();
        let hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        let active_hotels = hotels.iter().filter(|h| h.score > 0).count() as u32;

        Ok(DashboardData {
            total_hotels: stats.total_hotels,
            active_hotels,
            total_rooms: stats.total_rooms,
            average_score: stats.average_score,
            top_hotels: top_hotels(&hotels),
            hotels_by_country: hotels_by_country(&hotels),
            hotels_by_stars: stats.hotels_by_stars,
        })
    }

    fn build_stats(&self) -> AdminStats {
        let hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        let rooms: Vec<Room> = self.state.store.read(ROOMS);

        let total_rooms = rooms.iter().map(|r| r.available).sum();
        let average_score = if hotels.is_empty() {
            0
        } else {
            let sum: u32 = hotels.iter().map(|h| h.score as u32).sum();
            (sum as f64 / hotels.len() as f64).round() as u8
        };

        let mut hotels_by_stars = StarBuckets::default();
        for hotel in &hotels {
            match hotel.stars {
                3 => hotels_by_stars.three += 1,
                4 => hotels_by_stars.four += 1,
                5 => hotels_by_stars.five += 1,
                _ => {}
            }
        }

        AdminStats {
            total_hotels: hotels.len() as u32,
            total_rooms,
            average_score,
            hotels_by_stars,
        }
    }
}

/// Top five hotels by score, rating mapped 0..=100 -> 0..=5 (one decimal)
fn top_hotels(hotels: &[Hotel]) -> Vec<TopHotel> {
    let mut sorted: Vec<&Hotel> = hotels.iter().collect();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));

    sorted
        .into_iter()
        .take(5)
        .enumerate()
        .map(|(i, hotel)| TopHotel {
            rank: i as u32 + 1,
            rating: (hotel.score as f64 / 20.0 * 10.0).round() / 10.0,
            score_percentage: hotel.score,
            hotel: hotel.clone(),
        })
        .collect()
}

/// Hotels per country, sorted descending by count
fn hotels_by_country(hotels: &[Hotel]) -> Vec<CountryShare> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for hotel in hotels {
        *counts.entry(hotel.country.as_str()).or_default() += 1;
    }

    let total = hotels.len() as f64;
    let mut shares: Vec<CountryShare> = counts
        .into_iter()
        .map(|(country, count)| CountryShare {
            country: country.to_string(),
            count,
            percentage: (count as f64 / total * 100.0).round() as u32,
        })
        .collect();
    // Ties break alphabetically for a stable display order
    shares.sort_by(|a, b| b.count.cmp(&a.count).then(a.country.cmp(&b.country)));
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::util::now_millis;

    fn hotel(country: &str, score: u8) -> Hotel {
        Hotel {
            id: shared::util::entity_id("hotel"),
            name: "H".to_string(),
            description: String::new(),
            country: country.to_string(),
            state: String::new(),
            city: String::new(),
            logo: None,
            stars: 3,
            score,
            gallery: vec![],
            created_at: now_millis(),
            updated_at: now_millis(),
        }
    }

    #[test]
    fn top_hotels_ranks_by_score_and_caps_at_five() {
        let hotels: Vec<Hotel> = [10, 90, 50, 70, 30, 60].iter().map(|&s| hotel("CO", s)).collect();
        let top = top_hotels(&hotels);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].score_percentage, 90);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[0].rating, 4.5);
        assert_eq!(top[4].score_percentage, 30);
    }

    #[test]
    fn country_shares_sum_and_sort() {
        let hotels = vec![hotel("CO", 1), hotel("CO", 1), hotel("AR", 1)];
        let shares = hotels_by_country(&hotels);
        assert_eq!(
            shares,
            vec![
                CountryShare { country: "CO".into(), count: 2, percentage: 67 },
                CountryShare { country: "AR".into(), count: 1, percentage: 33 },
            ]
        );
    }
}
