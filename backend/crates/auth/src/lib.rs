//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, store traits
//! - `application/` - Use cases and application services
//! - `infra/` - Credential store implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration/login with email + password
//! - Stateless dual-token auth (short-lived access, long-lived refresh)
//! - Role-based access (User, Admin)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (OWASP parameters)
//! - Access and refresh tokens signed under independent secrets
//! - Uniform "invalid email or password" responses on login failure

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;
pub mod token;

// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserStore;
pub use infra::postgres::PgUserStore;
pub use presentation::router::{auth_router, auth_router_generic};
pub use token::{TokenEngine, TokenPayload};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::domain::repository::UserStore;
    pub use crate::infra::memory::InMemoryUserStore;
    pub use crate::infra::postgres::PgUserStore;
}
