//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request data failed validation (message is field-specific)
    #[error("{0}")]
    Validation(String),

    /// Wrong email or wrong password. One shared message so callers
    /// cannot tell which half failed.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authorization header absent or not a Bearer scheme
    #[error("Token is required")]
    TokenRequired,

    /// Bearer scheme present but the token part is missing
    #[error("Invalid token format")]
    InvalidTokenFormat,

    /// Token failed verification (signature, expiry, issuer or audience).
    /// Sub-cases are logged internally, never surfaced to the client.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// A protected route was reached without an authenticated principal
    #[error("Authentication required")]
    AuthenticationRequired,

    /// The account referenced by a verified token no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Email already registered
    #[error("Email already exists")]
    EmailTaken,

    /// Admin role gate failed
    #[error("Admin access required")]
    AdminRequired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::Validation,
            AuthError::InvalidCredentials
            | AuthError::TokenRequired
            | AuthError::InvalidTokenFormat
            | AuthError::InvalidToken
            | AuthError::AuthenticationRequired
            | AuthError::UserNotFound => ErrorKind::Authentication,
            AuthError::AdminRequired => ErrorKind::Authorization,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Token verification failed");
            }
            AuthError::AdminRequired => {
                tracing::warn!("Admin gate rejected non-admin principal");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Validation => AuthError::Validation(err.message().to_string()),
            ErrorKind::Conflict => AuthError::EmailTaken,
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        // Hashing failures and corrupted stored hashes are data-integrity
        // conditions, not user mistakes.
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            AuthError::Validation("weak".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(AuthError::InvalidCredentials.kind(), ErrorKind::Authentication);
        assert_eq!(AuthError::TokenRequired.kind(), ErrorKind::Authentication);
        assert_eq!(AuthError::InvalidTokenFormat.kind(), ErrorKind::Authentication);
        assert_eq!(AuthError::InvalidToken.kind(), ErrorKind::Authentication);
        assert_eq!(AuthError::UserNotFound.kind(), ErrorKind::Authentication);
        assert_eq!(AuthError::AdminRequired.kind(), ErrorKind::Authorization);
        assert_eq!(AuthError::EmailTaken.kind(), ErrorKind::Conflict);
        assert_eq!(AuthError::Internal("x".into()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::Validation("weak".into()).status_code(), 400);
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::AdminRequired.status_code(), 403);
        assert_eq!(AuthError::EmailTaken.status_code(), 409);
        assert_eq!(AuthError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_credential_failures_share_message() {
        // Must not leak whether the email or the password was wrong
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }

    #[test]
    fn test_policy_error_conversion() {
        let err: AuthError = platform::password::PasswordPolicyError::TooShort.into();
        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_conflict_message() {
        assert_eq!(AuthError::EmailTaken.to_string(), "Email already exists");
        assert_eq!(AuthError::EmailTaken.to_app_error().code(), "CONFLICT_ERROR");
    }
}
