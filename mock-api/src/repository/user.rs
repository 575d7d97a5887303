//! User repository
//!
//! Users are created through `register` and `create_with_account`; this
//! repository only reads them and resolves hotel linkage.

use crate::auth::SessionManager;
use crate::core::AppState;
use crate::db::USERS;
use shared::AppResult;
use shared::models::{User, UserProfile};

#[derive(Clone)]
pub struct UserRepository {
    state: AppState,
}

impl UserRepository {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// All accounts, password-stripped; admin-only
    pub async fn list(&self) -> AppResult<Vec<UserProfile>> {
        self.state.simulate_latency().await;
        SessionManager::new(self.state.clone()).authorize_admin()?;

        let users: Vec<User> = self.state.store.read(USERS);
        Ok(users.iter().map(User::to_profile).collect())
    }

    pub(crate) fn find_by_email(&self, email: &str) -> Option<User> {
        let users: Vec<User> = self.state.store.read(USERS);
        users.into_iter().find(|u| u.email == email)
    }
}
