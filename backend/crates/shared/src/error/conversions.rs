//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`],
//! plus the axum response rendering for the whole error taxonomy.

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::validation(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        // Class 23 — Integrity Constraint Violation
                        "23505" => AppError::conflict("Duplicate key value"),
                        "23503" => AppError::conflict("Foreign key violation"),
                        "23502" => AppError::validation("Required field is null"),
                        "23514" => AppError::validation("Check constraint violation"),
                        _ => AppError::internal("Database error"),
                    }
                } else {
                    AppError::internal("Database error")
                };
                app_err.with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

/// Whether a sqlx error is a unique-constraint violation.
///
/// The storage layer is the true arbiter of uniqueness races; callers use
/// this to translate the backstop rejection into a domain conflict.
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().is_some_and(|code| code.as_ref() == "23505")
        }
        _ => false,
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        // 4xx at warn, 5xx at error, with full server-side context
        if self.is_server_error() {
            tracing::error!(
                status = self.status_code(),
                code = self.code(),
                error = %self,
                source = ?std::error::Error::source(&self),
                "Server error"
            );
        } else {
            tracing::warn!(
                status = self.status_code(),
                code = self.code(),
                error = %self,
                "Client error"
            );
        }

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Operational errors show their real message even in production.
        // Non-operational errors are masked outside debug builds.
        let masked = !self.is_operational() && !cfg!(debug_assertions);

        let body = if masked {
            serde_json::json!({
                "success": false,
                "error": "Something went wrong!",
            })
        } else {
            serde_json::json!({
                "success": false,
                "error": self.message(),
                "code": self.code(),
                "details": self.details(),
            })
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::Validation);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_conversion() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_is_unique_violation_non_database() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
