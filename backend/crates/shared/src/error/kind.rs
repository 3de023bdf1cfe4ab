//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes and
//! machine-readable error codes.

use serde::Serialize;

/// Closed set of error classifications.
///
/// Every anticipated failure in the application is classified into one of
/// these kinds. Each kind carries a fixed HTTP status code and a stable
/// machine-readable code that the HTTP boundary renders without
/// reinterpretation.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.code(), "NOT_FOUND");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// 400 - request data failed validation
    Validation,
    /// 401 - authentication missing or failed
    Authentication,
    /// 403 - authenticated but not permitted
    Authorization,
    /// 404 - resource does not exist
    NotFound,
    /// 409 - conflicts with current state (e.g. duplicate email)
    Conflict,
    /// 500 - unexpected failure, detail must not leak to clients
    Internal,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Authentication => 401,
            ErrorKind::Authorization => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }

    /// Stable machine-readable code rendered to clients.
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Authentication => "AUTHENTICATION_ERROR",
            ErrorKind::Authorization => "AUTHORIZATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT_ERROR",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }

    /// Standard HTTP reason phrase.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "Bad Request",
            ErrorKind::Authentication => "Unauthorized",
            ErrorKind::Authorization => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Internal => "Internal Server Error",
        }
    }

    /// Whether this is an anticipated, classified failure whose message is
    /// safe to show to clients even in production.
    ///
    /// Only `Internal` is non-operational: its message is masked to a
    /// generic string in release builds.
    #[inline]
    pub const fn is_operational(&self) -> bool {
        !matches!(self, ErrorKind::Internal)
    }

    /// 5xx errors. These are logged at error level.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx errors. These are logged at warning level.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
