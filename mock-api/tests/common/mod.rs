#![allow(dead_code)]

use mock_api::{Backend, Config, ManualClock};
use shared::models::{HotelAccountCreate, HotelCreate, RoomCreate, RoomType};
use std::sync::Arc;

/// Fixed test epoch: 2025-06-15T00:00:00Z-ish, well past the id epoch
pub const TEST_EPOCH_MS: i64 = 1_750_000_000_000;

/// In-memory backend with zero latency and a manual clock
pub fn backend() -> (Backend, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(TEST_EPOCH_MS));
    let backend = Backend::with_clock(Config::for_tests(), clock.clone()).unwrap();
    (backend, clock)
}

/// Seed baseline data and open an admin session
pub async fn login_admin(backend: &Backend) {
    backend.seed().await.unwrap();
    backend
        .auth()
        .login("admin@vaova.com", "admin123")
        .await
        .unwrap();
}

/// Seed baseline data and open a non-admin (hotel) session
pub async fn login_hotel_user(backend: &Backend) {
    backend.seed().await.unwrap();
    backend
        .auth()
        .login("hotel@vaova.com", "hotel123")
        .await
        .unwrap();
}

pub fn hotel_create(name: &str, stars: u8) -> HotelCreate {
    HotelCreate {
        name: name.to_string(),
        description: "A test hotel".to_string(),
        country: "Colombia".to_string(),
        state: "Atlántico".to_string(),
        city: "Barranquilla".to_string(),
        logo: None,
        stars,
    }
}

pub fn hotel_account_create(name: &str, email: &str, stars: u8) -> HotelAccountCreate {
    HotelAccountCreate {
        email: email.to_string(),
        password: "secret123".to_string(),
        name: name.to_string(),
        avatar: None,
        description: "A test hotel".to_string(),
        country: "Colombia".to_string(),
        state: "Atlántico".to_string(),
        city: "Barranquilla".to_string(),
        stars,
    }
}

pub fn room_create(name: &str, available: u32, amenities: &[&str]) -> RoomCreate {
    RoomCreate {
        name: name.to_string(),
        room_type: RoomType::Twin,
        price: 100.0,
        available,
        description: None,
        images: None,
        amenities: Some(amenities.iter().map(|a| a.to_string()).collect()),
    }
}
