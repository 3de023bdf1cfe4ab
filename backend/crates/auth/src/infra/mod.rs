//! Infrastructure Layer
//!
//! Credential store implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;
