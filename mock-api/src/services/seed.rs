//! Bootstrap seeding
//!
//! Guarantees a usable first run: one admin account, one hotel account
//! with a linked demo hotel, and at least one room for that hotel.
//! Idempotent — running it again creates nothing new.

use crate::core::AppState;
use crate::db::{HOTELS, ROOMS, StagedWrite, USERS};
use crate::services::scoring::score_for;
use shared::models::{Hotel, Room, RoomType, User, UserRole, sanitize_amenities};
use shared::util::entity_id;
use shared::AppResult;

pub struct Seeder {
    state: AppState,
}

impl Seeder {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Ensure baseline data exists. No simulated latency: this is the
    /// startup path, not a user-facing endpoint.
    pub async fn run(&self) -> AppResult<()> {
        let mut users: Vec<User> = self.state.store.read(USERS);
        let mut hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        let mut rooms: Vec<Room> = self.state.store.read(ROOMS);
        let now = self.state.now_millis();

        if !users.iter().any(|u| u.role == UserRole::Admin) {
            users.push(User {
                id: entity_id("user"),
                name: "Vaova Admin".to_string(),
                email: "admin@vaova.com".to_string(),
                password: "admin123".to_string(),
                role: UserRole::Admin,
                modules: vec![],
                avatar: None,
                hotel_id: None,
                created_at: now,
            });
            tracing::info!("Seeded admin user admin@vaova.com");
        }

        let target_hotel_id = match hotels.first() {
            Some(hotel) => hotel.id.clone(),
            None => {
                let hotel = Hotel {
                    id: entity_id("hotel"),
                    name: "Demo Hotel".to_string(),
                    description: "Demo hotel created on first run".to_string(),
                    country: "Colombia".to_string(),
                    state: "Atlántico".to_string(),
                    city: "Barranquilla".to_string(),
                    logo: None,
                    stars: 4,
                    score: 0,
                    gallery: vec![],
                    created_at: now,
                    updated_at: now,
                };
                let id = hotel.id.clone();
                hotels.push(hotel);
                tracing::info!("Seeded demo hotel {}", id);
                id
            }
        };

        if !users.iter().any(|u| u.role == UserRole::Hotel) {
            users.push(User {
                id: entity_id("user"),
                name: "Demo Hotel Owner".to_string(),
                email: "hotel@vaova.com".to_string(),
                password: "hotel123".to_string(),
                role: UserRole::Hotel,
                modules: vec![],
                avatar: None,
                hotel_id: Some(target_hotel_id.clone()),
                created_at: now,
            });
            tracing::info!("Seeded hotel user hotel@vaova.com");
        }

        if !rooms.iter().any(|r| r.hotel_id == target_hotel_id) {
            let room_type = RoomType::Twin;
            rooms.push(Room {
                id: entity_id("room"),
                hotel_id: target_hotel_id.clone(),
                name: "Standard Room".to_string(),
                room_type,
                capacity: room_type.capacity(),
                price: 120.0,
                available: 5,
                description: "Demo room created on first run".to_string(),
                images: vec![],
                amenities: sanitize_amenities(&[
                    "WiFi".to_string(),
                    "Air Conditioning".to_string(),
                ]),
                created_at: now,
                updated_at: now,
            });
            tracing::info!("Seeded demo room for hotel {}", target_hotel_id);
        }

        // The target hotel's score always reflects the current room set,
        // whether anything above was created or not
        if let Some(hotel) = hotels.iter_mut().find(|h| h.id == target_hotel_id) {
            hotel.score = score_for(&target_hotel_id, hotel.stars, &rooms);
        }

        let mut staged = StagedWrite::new();
        staged.set(USERS, &users)?;
        staged.set(HOTELS, &hotels)?;
        staged.set(ROOMS, &rooms)?;
        self.state.store.commit(staged)?;

        tracing::info!("Seed complete: baseline data guaranteed");
        Ok(())
    }
}
