//! User Role Value Object
//!
//! Two-level role model used by the admin route gate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// User role.
///
/// `user` is the only role assignable at registration; `admin` is granted
/// out of band and gates the admin-only routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Parse a stored role code. An unknown code means corrupted data.
    pub fn from_code(code: &str) -> AuthResult<Self> {
        match code {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(AuthError::Internal(format!("invalid role code: {other}"))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
