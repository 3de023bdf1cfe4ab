//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing and verification (Argon2id)
//! - Password strength policy

pub mod password;

pub use password::{
    HashedPassword, PasswordHashError, PasswordPolicyError, RawPassword, check_strength,
};
