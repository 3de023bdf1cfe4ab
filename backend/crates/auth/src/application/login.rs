//! Login Use Case
//!
//! Authenticates credentials and issues a fresh token pair.

use std::sync::Arc;

use platform::password::RawPassword;

use crate::domain::entity::user::PublicUser;
use crate::domain::repository::UserStore;
use crate::error::{AuthError, AuthResult};
use crate::token::{TokenEngine, TokenPayload};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: PublicUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    tokens: Arc<TokenEngine>,
}

impl<S> LoginUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, tokens: Arc<TokenEngine>) -> Self {
        Self { store, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Unknown email and wrong password produce the identical error so
        // the response never reveals which half failed.
        let user = self
            .store
            .find_by_email(input.email.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw = RawPassword::new(input.password);
        if !user.password_hash.verify(&raw) {
            return Err(AuthError::InvalidCredentials);
        }

        let payload = TokenPayload {
            user_id: user.id,
            email: user.email.as_str().to_string(),
            role: user.role,
        };
        let access_token = self.tokens.issue_access(&payload)?;
        let refresh_token = self.tokens.issue_refresh(&payload)?;

        tracing::info!(
            user_id = %user.id,
            "User logged in"
        );

        Ok(LoginOutput {
            user: PublicUser::from(user),
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::infra::memory::InMemoryUserStore;

    async fn seeded_store() -> Arc<InMemoryUserStore> {
        let store = Arc::new(InMemoryUserStore::new());
        let tokens = Arc::new(TokenEngine::new(&AuthConfig::development()).unwrap());
        RegisterUseCase::new(store.clone(), tokens)
            .execute(RegisterInput {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password: "Valid123pass".to_string(),
            })
            .await
            .unwrap();
        store
    }

    fn use_case(store: Arc<InMemoryUserStore>) -> LoginUseCase<InMemoryUserStore> {
        let tokens = Arc::new(TokenEngine::new(&AuthConfig::development()).unwrap());
        LoginUseCase::new(store, tokens)
    }

    #[tokio::test]
    async fn test_login_success() {
        let store = seeded_store().await;
        let output = use_case(store)
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "Valid123pass".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user.email.as_str(), "alice@example.com");
        assert!(!output.access_token.is_empty());
        assert!(!output.refresh_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_message_is_uniform() {
        let store = seeded_store().await;
        let use_case = use_case(store);

        // Wrong password for an existing account
        let wrong_password = use_case
            .execute(LoginInput {
                email: "alice@example.com".to_string(),
                password: "WrongPass123".to_string(),
            })
            .await
            .unwrap_err();

        // Nonexistent account
        let unknown_email = use_case
            .execute(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "Valid123pass".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid email or password");
        assert_eq!(wrong_password.status_code(), 401);
        assert_eq!(unknown_email.status_code(), 401);
    }
}
