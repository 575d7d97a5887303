//! Hotel repository
//!
//! Owns the hotel collection plus the referential rules around it: the
//! linked login account (explicit `hotel_id` on the user) and the cascade
//! to rooms on delete. Score recomputation rides in the same commit as
//! any stars change.

use crate::auth::SessionManager;
use crate::core::AppState;
use crate::db::{HOTELS, ROOMS, StagedWrite, USERS};
use crate::repository::UserRepository;
use crate::services::scoring::score_for;
use shared::models::{
    AdminHotelView, Hotel, HotelAccountCreate, HotelCreate, HotelCredentials, HotelSummary,
    HotelUpdate, HotelWithRooms, Room, User, UserProfile, UserRole,
};
use shared::util::entity_id;
use shared::{AppError, AppResult};

#[derive(Clone)]
pub struct HotelRepository {
    state: AppState,
}

impl HotelRepository {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn sessions(&self) -> SessionManager {
        SessionManager::new(self.state.clone())
    }

    fn validate_stars(stars: u8) -> AppResult<()> {
        if !(1..=5).contains(&stars) {
            return Err(AppError::out_of_range("Stars must be between 1 and 5"));
        }
        Ok(())
    }

    /// GET /api/hotels — public listing, annotated with total available rooms
    pub async fn list(&self) -> AppResult<Vec<HotelSummary>> {
        self.state.simulate_latency().await;

        let hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        let rooms: Vec<Room> = self.state.store.read(ROOMS);

        Ok(hotels
            .into_iter()
            .map(|hotel| {
                let total_rooms = rooms
                    .iter()
                    .filter(|r| r.hotel_id == hotel.id)
                    .map(|r| r.available)
                    .sum();
                HotelSummary { hotel, total_rooms }
            })
            .collect())
    }

    /// GET /api/hotels/:id
    pub async fn get(&self, id: &str) -> AppResult<Hotel> {
        self.state.simulate_latency().await;
        self.find(id)
    }

    /// GET /api/hotels/:id/full — hotel with its rooms
    pub async fn get_with_rooms(&self, id: &str) -> AppResult<HotelWithRooms> {
        self.state.simulate_latency().await;

        let hotel = self.find(id)?;
        let rooms: Vec<Room> = self.state.store.read(ROOMS);
        let rooms = rooms.into_iter().filter(|r| r.hotel_id == id).collect();
        Ok(HotelWithRooms { hotel, rooms })
    }

    /// GET /api/hotels/:id/gallery
    pub async fn gallery(&self, id: &str) -> AppResult<Vec<String>> {
        self.state.simulate_latency().await;
        Ok(self.find(id)?.gallery)
    }

    /// POST /api/hotels — admin-authenticated; score starts at 0
    pub async fn create(&self, data: HotelCreate) -> AppResult<Hotel> {
        self.state.simulate_latency().await;
        self.sessions().authorize_admin()?;

        if data.name.trim().is_empty() {
            return Err(AppError::required_field("name"));
        }
        Self::validate_stars(data.stars)?;

        let now = self.state.now_millis();
        let hotel = Hotel {
            id: entity_id("hotel"),
            name: data.name,
            description: data.description,
            country: data.country,
            state: data.state,
            city: data.city,
            logo: data.logo,
            stars: data.stars,
            // No rooms yet; recomputed as soon as the first room lands
            score: 0,
            gallery: vec![],
            created_at: now,
            updated_at: now,
        };

        let mut hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        hotels.push(hotel.clone());
        self.state.store.write(HOTELS, &hotels)?;

        Ok(hotel)
    }

    /// POST /api/admin/hotels — hotel plus its login account in one commit
    pub async fn create_with_account(
        &self,
        data: HotelAccountCreate,
    ) -> AppResult<(UserProfile, Hotel)> {
        self.state.simulate_latency().await;
        self.sessions().authorize_admin()?;

        if data.name.trim().is_empty() {
            return Err(AppError::required_field("name"));
        }
        Self::validate_stars(data.stars)?;

        let users_repo = UserRepository::new(self.state.clone());
        if users_repo.find_by_email(&data.email).is_some() {
            return Err(AppError::email_already_registered(&data.email));
        }

        let now = self.state.now_millis();
        let hotel = Hotel {
            id: entity_id("hotel"),
            name: data.name.clone(),
            description: data.description,
            country: data.country,
            state: data.state,
            city: data.city,
            logo: data.avatar.clone(),
            stars: data.stars,
            score: 0,
            gallery: vec![],
            created_at: now,
            updated_at: now,
        };
        let user = User {
            id: entity_id("user"),
            name: data.name,
            email: data.email,
            password: data.password,
            role: UserRole::Hotel,
            modules: vec![],
            avatar: data.avatar,
            hotel_id: Some(hotel.id.clone()),
            created_at: now,
        };

        let mut users: Vec<User> = self.state.store.read(USERS);
        let mut hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        users.push(user.clone());
        hotels.push(hotel.clone());

        let mut staged = StagedWrite::new();
        staged.set(USERS, &users)?;
        staged.set(HOTELS, &hotels)?;
        self.state.store.commit(staged)?;

        Ok((user.to_profile(), hotel))
    }

    /// PUT /api/hotels/:id
    ///
    /// Recomputes the score against `partial.stars` (or the existing
    /// stars) before returning. When `credentials` is given and the
    /// caller is admin, the linked account's email/password change too; a
    /// hotel with no linked account logs a warning and skips only that
    /// part.
    pub async fn update(
        &self,
        id: &str,
        partial: HotelUpdate,
        credentials: Option<HotelCredentials>,
    ) -> AppResult<Hotel> {
        self.state.simulate_latency().await;
        let caller = self.sessions().authorize()?;

        if let Some(stars) = partial.stars {
            Self::validate_stars(stars)?;
        }

        let mut hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        let index = hotels
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| AppError::hotel_not_found(id))?;

        let rooms: Vec<Room> = self.state.store.read(ROOMS);
        let hotel = &mut hotels[index];

        if let Some(name) = partial.name {
            hotel.name = name;
        }
        if let Some(description) = partial.description {
            hotel.description = description;
        }
        if let Some(country) = partial.country {
            hotel.country = country;
        }
        if let Some(state) = partial.state {
            hotel.state = state;
        }
        if let Some(city) = partial.city {
            hotel.city = city;
        }
        if let Some(logo) = partial.logo {
            hotel.logo = Some(logo);
        }
        if let Some(stars) = partial.stars {
            hotel.stars = stars;
        }
        hotel.score = score_for(id, hotel.stars, &rooms);
        hotel.updated_at = self.state.now_millis();
        let updated = hotel.clone();

        let mut staged = StagedWrite::new();
        staged.set(HOTELS, &hotels)?;

        if let Some(creds) = credentials.filter(|c| !c.is_empty())
            && caller.is_admin()
        {
            let mut users: Vec<User> = self.state.store.read(USERS);
            match users
                .iter_mut()
                .find(|u| u.role == UserRole::Hotel && u.hotel_id.as_deref() == Some(id))
            {
                Some(user) => {
                    if let Some(email) = creds.email {
                        user.email = email;
                    }
                    if let Some(password) = creds.password {
                        user.password = password;
                    }
                    staged.set(USERS, &users)?;
                }
                None => {
                    // Lenient: the hotel update itself still goes through
                    tracing::warn!(
                        "No linked account for hotel id={}; credentials not updated",
                        id
                    );
                }
            }
        }

        self.state.store.commit(staged)?;
        Ok(updated)
    }

    /// GET /api/admin/hotels — hotels joined with their account credentials
    pub async fn list_for_admin(&self) -> AppResult<Vec<AdminHotelView>> {
        self.state.simulate_latency().await;
        self.sessions().authorize_admin()?;

        let hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        let users: Vec<User> = self.state.store.read(USERS);

        Ok(hotels
            .into_iter()
            .map(|hotel| {
                let account = users.iter().find(|u| {
                    u.role == UserRole::Hotel && u.hotel_id.as_deref() == Some(hotel.id.as_str())
                });
                AdminHotelView {
                    email: account.map(|u| u.email.clone()),
                    password: account.map(|u| u.password.clone()),
                    user_id: account.map(|u| u.id.clone()),
                    hotel,
                }
            })
            .collect())
    }

    /// DELETE /api/hotels/:id — cascades to the linked account and rooms
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.state.simulate_latency().await;
        self.sessions().authorize()?;

        let mut hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        let before = hotels.len();
        hotels.retain(|h| h.id != id);
        if hotels.len() == before {
            return Err(AppError::hotel_not_found(id));
        }

        let mut users: Vec<User> = self.state.store.read(USERS);
        let users_before = users.len();
        users.retain(|u| !(u.role == UserRole::Hotel && u.hotel_id.as_deref() == Some(id)));
        if users.len() == users_before {
            tracing::warn!("No linked account found for deleted hotel id={}", id);
        }

        let mut rooms: Vec<Room> = self.state.store.read(ROOMS);
        rooms.retain(|r| r.hotel_id != id);

        let mut staged = StagedWrite::new();
        staged.set(HOTELS, &hotels)?;
        staged.set(USERS, &users)?;
        staged.set(ROOMS, &rooms)?;
        self.state.store.commit(staged)?;

        tracing::info!("Hotel {} deleted with its account and rooms", id);
        Ok(())
    }

    /// PUT /api/hotels/:id/gallery
    ///
    /// Requires a session (any role). Entries arrive as raw JSON values;
    /// only non-blank strings survive, trimmed.
    pub async fn update_gallery(
        &self,
        id: &str,
        entries: Vec<serde_json::Value>,
    ) -> AppResult<Hotel> {
        self.state.simulate_latency().await;
        self.sessions().authorize()?;

        let mut hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        let hotel = hotels
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| AppError::hotel_not_found(id))?;

        hotel.gallery = entries
            .iter()
            .filter_map(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        hotel.updated_at = self.state.now_millis();
        let updated = hotel.clone();

        self.state.store.write(HOTELS, &hotels)?;
        Ok(updated)
    }

    fn find(&self, id: &str) -> AppResult<Hotel> {
        let hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        hotels
            .into_iter()
            .find(|h| h.id == id)
            .ok_or_else(|| AppError::hotel_not_found(id))
    }
}
