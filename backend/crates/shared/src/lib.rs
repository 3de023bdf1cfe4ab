//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - The error taxonomy (kind, status code, machine code)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

pub use error::app_error::{AppError, AppResult, OptionExt, ResultExt};
pub use error::kind::ErrorKind;
