//! In-Memory Credential Store
//!
//! A process-local store for tests and local development. Mirrors the
//! PostgreSQL store's semantics, including duplicate-email rejection.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserStore;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a user, returning whether one was present. Test helper
    /// for exercising deleted-account paths.
    pub fn remove(&self, id: Uuid) -> AuthResult<bool> {
        Ok(self.lock()?.remove(&id).is_some())
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, HashMap<Uuid, User>>> {
        self.users
            .lock()
            .map_err(|_| AuthError::Internal("user store lock poisoned".into()))
    }
}

impl UserStore for InMemoryUserStore {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.lock()?;

        // Uniqueness is checked under the same lock as the insert, so
        // two racing registrations cannot both succeed.
        if users.values().any(|u| u.email.as_str() == user.email.as_str()) {
            return Err(AuthError::EmailTaken);
        }

        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let users = self.lock()?;
        Ok(users.values().find(|u| u.email.as_str() == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AuthResult<Option<User>> {
        Ok(self.lock()?.get(&id).cloned())
    }

    async fn email_exists(&self, email: &str) -> AuthResult<bool> {
        let users = self.lock()?;
        Ok(users.values().any(|u| u.email.as_str() == email))
    }

    async fn find_all(&self) -> AuthResult<Vec<User>> {
        let mut users: Vec<User> = self.lock()?.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }
}
