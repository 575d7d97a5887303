//! Room repository
//!
//! Rooms always belong to an existing hotel. Capacity is derived from the
//! room type and never accepted from the caller; every mutation commits
//! the owning hotel's recomputed score in the same transaction.

use crate::auth::SessionManager;
use crate::core::AppState;
use crate::db::{HOTELS, ROOMS, StagedWrite};
use crate::services::scoring::score_for;
use shared::models::{Hotel, Room, RoomCreate, RoomUpdate, sanitize_amenities};
use shared::util::entity_id;
use shared::{AppError, AppResult};

#[derive(Clone)]
pub struct RoomRepository {
    state: AppState,
}

impl RoomRepository {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn sessions(&self) -> SessionManager {
        SessionManager::new(self.state.clone())
    }

    fn validate_name(name: &str) -> AppResult<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Room name is required"));
        }
        Ok(())
    }

    fn validate_available(available: u32) -> AppResult<()> {
        if available < 1 {
            return Err(AppError::out_of_range("Available must be at least 1"));
        }
        Ok(())
    }

    fn validate_price(price: f64) -> AppResult<()> {
        if price.is_nan() || price <= 0.0 {
            return Err(AppError::out_of_range("Price must be greater than 0"));
        }
        Ok(())
    }

    /// GET /api/hotels/:hotelId/rooms — public
    pub async fn list_by_hotel(&self, hotel_id: &str) -> AppResult<Vec<Room>> {
        self.state.simulate_latency().await;

        let rooms: Vec<Room> = self.state.store.read(ROOMS);
        Ok(rooms.into_iter().filter(|r| r.hotel_id == hotel_id).collect())
    }

    /// GET /api/rooms/:id
    pub async fn get(&self, id: &str) -> AppResult<Room> {
        self.state.simulate_latency().await;

        let rooms: Vec<Room> = self.state.store.read(ROOMS);
        rooms
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::room_not_found(id))
    }

    /// POST /api/hotels/:hotelId/rooms
    pub async fn create(&self, hotel_id: &str, data: RoomCreate) -> AppResult<Room> {
        self.state.simulate_latency().await;
        self.sessions().authorize()?;

        let mut hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        let hotel_index = hotels
            .iter()
            .position(|h| h.id == hotel_id)
            .ok_or_else(|| AppError::hotel_not_found(hotel_id))?;

        Self::validate_name(&data.name)?;
        Self::validate_available(data.available)?;
        Self::validate_price(data.price)?;

        let now = self.state.now_millis();
        let room = Room {
            id: entity_id("room"),
            hotel_id: hotel_id.to_string(),
            name: data.name,
            room_type: data.room_type,
            capacity: data.room_type.capacity(),
            price: data.price,
            available: data.available,
            description: data.description.unwrap_or_default(),
            images: data.images.unwrap_or_default(),
            amenities: sanitize_amenities(&data.amenities.unwrap_or_default()),
            created_at: now,
            updated_at: now,
        };

        let mut rooms: Vec<Room> = self.state.store.read(ROOMS);
        rooms.push(room.clone());

        hotels[hotel_index].score = score_for(hotel_id, hotels[hotel_index].stars, &rooms);

        let mut staged = StagedWrite::new();
        staged.set(ROOMS, &rooms)?;
        staged.set(HOTELS, &hotels)?;
        self.state.store.commit(staged)?;

        Ok(room)
    }

    /// PUT /api/rooms/:id — validation applies only to provided fields
    pub async fn update(&self, id: &str, partial: RoomUpdate) -> AppResult<Room> {
        self.state.simulate_latency().await;
        self.sessions().authorize()?;

        if let Some(name) = &partial.name {
            Self::validate_name(name)?;
        }
        if let Some(available) = partial.available {
            Self::validate_available(available)?;
        }
        if let Some(price) = partial.price {
            Self::validate_price(price)?;
        }

        let mut rooms: Vec<Room> = self.state.store.read(ROOMS);
        let index = rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::room_not_found(id))?;

        let room = &mut rooms[index];
        if let Some(name) = partial.name {
            room.name = name;
        }
        if let Some(room_type) = partial.room_type {
            room.room_type = room_type;
            // Capacity follows the type, whatever it was before
            room.capacity = room_type.capacity();
        }
        if let Some(price) = partial.price {
            room.price = price;
        }
        if let Some(available) = partial.available {
            room.available = available;
        }
        if let Some(description) = partial.description {
            room.description = description;
        }
        if let Some(images) = partial.images {
            room.images = images;
        }
        if let Some(amenities) = partial.amenities {
            room.amenities = sanitize_amenities(&amenities);
        }
        room.updated_at = self.state.now_millis();

        let updated = room.clone();
        self.commit_with_score(rooms, &updated.hotel_id)?;
        Ok(updated)
    }

    /// DELETE /api/rooms/:id
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.state.simulate_latency().await;
        self.sessions().authorize()?;

        let mut rooms: Vec<Room> = self.state.store.read(ROOMS);
        let room = rooms
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::room_not_found(id))?;

        rooms.retain(|r| r.id != id);
        self.commit_with_score(rooms, &room.hotel_id)?;
        Ok(())
    }

    /// Commit the room collection together with the owning hotel's
    /// recomputed score. A vanished hotel is tolerated: the rooms write
    /// still lands.
    fn commit_with_score(&self, rooms: Vec<Room>, hotel_id: &str) -> AppResult<()> {
        let mut staged = StagedWrite::new();
        staged.set(ROOMS, &rooms)?;

        let mut hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        if let Some(hotel) = hotels.iter_mut().find(|h| h.id == hotel_id) {
            hotel.score = score_for(hotel_id, hotel.stars, &rooms);
            staged.set(HOTELS, &hotels)?;
        }

        self.state.store.commit(staged)?;
        Ok(())
    }
}
