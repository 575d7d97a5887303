//! Session management
//!
//! State machine: `NoSession → Active → (Expired | LoggedOut) → NoSession`.
//! A single session slot exists per backend instance (single-tenant client
//! simulation); opening a new session replaces the previous one.

use crate::auth::TokenIssuer;
use crate::core::AppState;
use crate::db::{HOTELS, StagedWrite, USERS};
use parking_lot::RwLock;
use shared::models::{
    Hotel, LoginResponse, RegisterRequest, Session, User, UserProfile, UserRole,
};
use shared::util::entity_id;
use shared::{AppError, AppResult};
use std::sync::Arc;

/// The single ephemeral session slot
///
/// An explicit handle rather than ambient global state; cleared on logout
/// or on the first expiry detection. Never persisted to the store.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Replace whatever session is active
    pub fn open(&self, session: Session) {
        *self.inner.write() = Some(session);
    }

    /// Drop the active session; idempotent
    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }
}

pub struct SessionManager {
    state: AppState,
    tokens: TokenIssuer,
}

impl SessionManager {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tokens: TokenIssuer::new(),
        }
    }

    /// POST /api/auth/login
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        self.state.simulate_latency().await;

        let users: Vec<User> = self.state.store.read(USERS);
        let user = users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or_else(AppError::invalid_credentials)?;

        Ok(self.open_session(user, "Login successful"))
    }

    /// POST /api/auth/register
    ///
    /// Self-service registration always creates a `hotel` account plus its
    /// companion hotel (name mirrored, 3 stars, score 0) in one commit.
    pub async fn register(&self, input: RegisterRequest) -> AppResult<LoginResponse> {
        self.state.simulate_latency().await;

        for (field, value) in [
            ("name", &input.name),
            ("email", &input.email),
            ("password", &input.password),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::required_field(field));
            }
        }

        let mut users: Vec<User> = self.state.store.read(USERS);
        if users.iter().any(|u| u.email == input.email) {
            return Err(AppError::email_already_registered(&input.email));
        }

        let now = self.state.now_millis();
        let hotel_id = entity_id("hotel");

        let user = User {
            id: entity_id("user"),
            name: input.name.clone(),
            email: input.email,
            password: input.password,
            role: UserRole::Hotel,
            modules: vec![],
            avatar: input.avatar.clone(),
            hotel_id: Some(hotel_id.clone()),
            created_at: now,
        };

        let hotel = Hotel {
            id: hotel_id,
            name: input.name,
            description: String::new(),
            country: String::new(),
            state: String::new(),
            city: String::new(),
            logo: input.avatar,
            stars: 3,
            score: 0,
            gallery: vec![],
            created_at: now,
            updated_at: now,
        };

        users.push(user.clone());
        let mut hotels: Vec<Hotel> = self.state.store.read(HOTELS);
        hotels.push(hotel);

        let mut staged = StagedWrite::new();
        staged.set(USERS, &users)?;
        staged.set(HOTELS, &hotels)?;
        self.state.store.commit(staged)?;

        tracing::info!("Registered hotel account {}", user.email);
        Ok(self.open_session(&user, "User registered successfully"))
    }

    /// POST /api/auth/logout — clears the slot unconditionally
    pub async fn logout(&self) {
        self.state.simulate_latency().await;
        self.state.sessions.clear();
    }

    /// GET /api/auth/me
    pub async fn current_user(&self) -> AppResult<UserProfile> {
        self.state.simulate_latency().await;
        self.authorize()
    }

    /// Resolve the active session to a user without simulated latency.
    /// Used by the repositories as their auth check.
    pub(crate) fn authorize(&self) -> AppResult<UserProfile> {
        let session = self
            .state
            .sessions
            .current()
            .ok_or_else(AppError::no_active_session)?;

        if session.is_expired(self.state.now_millis()) {
            // Expiry is detected lazily; the slot clears so the next call
            // reports NoActiveSession instead
            self.state.sessions.clear();
            return Err(AppError::session_expired());
        }

        let users: Vec<User> = self.state.store.read(USERS);
        users
            .iter()
            .find(|u| u.id == session.user_id)
            .map(User::to_profile)
            .ok_or_else(|| AppError::user_not_found(&session.user_id))
    }

    /// Like [`authorize`], but the resolved user must be an admin
    pub(crate) fn authorize_admin(&self) -> AppResult<UserProfile> {
        let user = self.authorize()?;
        if !user.is_admin() {
            return Err(AppError::admin_required());
        }
        Ok(user)
    }

    fn open_session(&self, user: &User, message: &str) -> LoginResponse {
        let now = self.state.now_millis();
        let ttl = self.state.config.session_ttl_millis();
        let token = self
            .tokens
            .issue_access_token(&user.id, &user.email, now, ttl);
        let refresh_token = self.tokens.issue_refresh_token(now);

        self.state.sessions.open(Session {
            user_id: user.id.clone(),
            email: user.email.clone(),
            token: token.clone(),
            expires_at: now + ttl,
        });

        LoginResponse {
            message: message.to_string(),
            token,
            user: user.to_profile(),
            refresh_token,
            expires_in: ttl,
        }
    }
}
