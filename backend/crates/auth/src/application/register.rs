//! Register Use Case
//!
//! Creates a new user account and issues its first token pair.

use std::sync::Arc;

use platform::password::{RawPassword, check_strength};

use crate::domain::entity::user::{PublicUser, User};
use crate::domain::repository::UserStore;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};
use crate::token::{TokenEngine, TokenPayload};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user: PublicUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    tokens: Arc<TokenEngine>,
}

impl<S> RegisterUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, tokens: Arc<TokenEngine>) -> Self {
        Self { store, tokens }
    }

    /// Linear pipeline, early exit on the first failing precondition.
    /// No side effect happens before its preconditions pass.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Syntactic validation
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AuthError::Validation("Name is required".to_string()));
        }
        let email = Email::new(input.email)?;

        // Strength policy, first violated rule wins
        check_strength(&input.password)?;

        // Uniqueness pre-check: a courtesy for a clean conflict message.
        // The store's unique constraint remains the race arbiter.
        if self.store.email_exists(email.as_str()).await? {
            return Err(AuthError::EmailTaken);
        }

        // Hash and persist; role is always `user` at registration
        let password_hash = RawPassword::new(input.password).hash()?;
        let user = User::new(name, email, password_hash);
        self.store.create(&user).await?;

        // First token pair
        let payload = TokenPayload {
            user_id: user.id,
            email: user.email.as_str().to_string(),
            role: user.role,
        };
        let access_token = self.tokens.issue_access(&payload)?;
        let refresh_token = self.tokens.issue_refresh(&payload)?;

        tracing::info!(
            user_id = %user.id,
            "User registered"
        );

        Ok(RegisterOutput {
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
    use crate::infra::memory::InMemoryUserStore;

    fn use_case(store: Arc<InMemoryUserStore>) -> RegisterUseCase<InMemoryUserStore> {
        let tokens = Arc::new(TokenEngine::new(&AuthConfig::development()).unwrap());
        RegisterUseCase::new(store, tokens)
    }

    fn input(email: &str) -> RegisterInput {
        RegisterInput {
            name: "Alice".to_string(),
            email: email.to_string(),
            password: "Valid123pass".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let store = Arc::new(InMemoryUserStore::new());
        let output = use_case(store.clone())
            .execute(input("alice@example.com"))
            .await
            .unwrap();

        assert_eq!(output.user.email.as_str(), "alice@example.com");
        assert_eq!(output.user.role.code(), "user");
        assert!(!output.access_token.is_empty());
        assert!(!output.refresh_token.is_empty());
        assert!(store.email_exists("alice@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_register_weak_password_reports_first_rule() {
        let store = Arc::new(InMemoryUserStore::new());
        let err = use_case(store.clone())
            .execute(RegisterInput {
                password: "alllowercase1".to_string(),
                ..input("alice@example.com")
            })
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Password must contain at least one uppercase letter"
        );
        // Early exit: nothing was written
        assert!(!store.email_exists("alice@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflict() {
        let store = Arc::new(InMemoryUserStore::new());
        let use_case = use_case(store.clone());

        use_case.execute(input("alice@example.com")).await.unwrap();
        let err = use_case
            .execute(RegisterInput {
                name: "Other".to_string(),
                ..input("alice@example.com")
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let store = Arc::new(InMemoryUserStore::new());
        let err = use_case(store)
            .execute(input("not-an-email"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_concurrent_registration_single_winner() {
        let store = Arc::new(InMemoryUserStore::new());
        let a = use_case(store.clone());
        let b = use_case(store.clone());

        let (ra, rb) = tokio::join!(
            a.execute(input("race@example.com")),
            b.execute(input("race@example.com"))
        );

        // Exactly one succeeds, the other gets the conflict, never a 500
        let results = [ra, rb];
        let ok = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(AuthError::EmailTaken)))
            .count();
        assert_eq!(ok, 1);
        assert_eq!(conflicts, 1);
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }
}
