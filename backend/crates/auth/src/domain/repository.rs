//! Repository Traits
//!
//! Interface to the credential store. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::user::User;
use crate::error::AuthResult;
use uuid::Uuid;

/// Credential store trait.
///
/// The store is the true arbiter of email uniqueness: `create` must reject
/// a duplicate email with [`crate::error::AuthError::EmailTaken`] even when
/// the caller's `email_exists` pre-check passed (concurrent registration).
#[trait_variant::make(UserStore: Send)]
pub trait LocalUserStore {
    /// Persist a new user. Rejects duplicate emails.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find a user by exact email
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> AuthResult<Option<User>>;

    /// Check whether an email is already registered
    async fn email_exists(&self, email: &str) -> AuthResult<bool>;

    /// List all users, newest first (admin listing)
    async fn find_all(&self) -> AuthResult<Vec<User>>;
}
