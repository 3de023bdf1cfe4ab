//! Domain Layer
//!
//! Contains entities, value objects, and the credential store trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::user::{PublicUser, User};
pub use repository::UserStore;
pub use value_object::{email::Email, user_role::UserRole};
