//! User Entity
//!
//! The credential-store user record and its public projection.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use uuid::Uuid;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// User entity as persisted by the credential store.
///
/// Carries the password hash; never serialized outward. The outward view
/// is [`PublicUser`].
#[derive(Debug, Clone)]
pub struct User {
    /// Stable unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique email, case-sensitive as stored
    pub email: Email,
    /// Argon2id PHC hash
    pub password_hash: HashedPassword,
    /// Role (user or admin)
    pub role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp, set on first mutation
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user at registration.
    ///
    /// Role is always `user`; it is never client-settable here.
    pub fn new(name: String, email: Email, password_hash: HashedPassword) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Public, read-only projection of a user.
///
/// Derived from [`User`] with the password hash stripped. This is the only
/// user shape that leaves the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::RawPassword;

    fn test_user() -> User {
        let hash = RawPassword::new("Valid123pass".to_string()).hash().unwrap();
        User::new(
            "Alice".to_string(),
            Email::new("alice@example.com").unwrap(),
            hash,
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = test_user();
        assert_eq!(user.role, UserRole::User);
        assert!(user.updated_at.is_none());
    }

    #[test]
    fn test_public_projection_fields() {
        let user = test_user();
        let public = PublicUser::from(&user);
        assert_eq!(public.id, user.id);
        assert_eq!(public.name, "Alice");
        assert_eq!(public.email.as_str(), "alice@example.com");
        assert_eq!(public.role, UserRole::User);
        assert_eq!(public.created_at, user.created_at);
    }

    #[test]
    fn test_hash_redacted_in_debug() {
        let user = test_user();
        let debug_output = format!("{:?}", user);
        assert!(!debug_output.contains("argon2id"));
    }
}
