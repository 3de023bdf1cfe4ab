//! Profile Use Case
//!
//! Returns the public projection of an authenticated user.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::user::PublicUser;
use crate::domain::repository::UserStore;
use crate::error::{AuthError, AuthResult};

/// Get profile use case
pub struct GetProfileUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
}

impl<S> GetProfileUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, user_id: Uuid) -> AuthResult<PublicUser> {
        // This path is only reachable through a verified access token, so
        // a missing row means the authenticated account vanished: an
        // authentication failure, not a generic not-found.
        let user = self
            .store
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(PublicUser::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::InMemoryUserStore;
    use crate::token::TokenEngine;

    #[tokio::test]
    async fn test_profile_returns_public_projection() {
        let store = Arc::new(InMemoryUserStore::new());
        let tokens = Arc::new(TokenEngine::new(&AuthConfig::development()).unwrap());
        let registered = RegisterUseCase::new(store.clone(), tokens)
            .execute(RegisterInput {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "Valid123pass".to_string(),
            })
            .await
            .unwrap();

        let profile = GetProfileUseCase::new(store)
            .execute(registered.user.id)
            .await
            .unwrap();

        assert_eq!(profile, registered.user);
    }

    #[tokio::test]
    async fn test_profile_vanished_user_is_authentication_error() {
        let store = Arc::new(InMemoryUserStore::new());
        let err = GetProfileUseCase::new(store)
            .execute(Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::UserNotFound));
        assert_eq!(err.status_code(), 401);
    }
}
