//! Auth Middleware
//!
//! Bearer-token gate for protected routes and the admin role check.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::error::AuthError;
use crate::token::{TokenEngine, TokenPayload};

/// Verified caller identity, inserted into request extensions by
/// `authenticate` and read by handlers and `require_admin`.
#[derive(Clone)]
pub struct CurrentUser(pub TokenPayload);

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenEngine>,
}

/// Middleware that requires a valid access token.
///
/// On success the verified claims are attached as a [`CurrentUser`]
/// extension; handlers never re-verify the token themselves.
pub async fn authenticate(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = bearer_token(header)?;
    let payload = state.tokens.verify_access(token)?;

    req.extensions_mut().insert(CurrentUser(payload));

    Ok(next.run(req).await)
}

/// Middleware that requires the authenticated caller to be an admin.
/// Must run after [`authenticate`] on the same route.
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, AuthError> {
    let current = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AuthError::AuthenticationRequired)?;

    if !current.0.role.is_admin() {
        return Err(AuthError::AdminRequired);
    }

    Ok(next.run(req).await)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// A missing header or a non-Bearer scheme and an empty Bearer value
/// are reported as distinct errors so clients can tell the cases apart.
fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::TokenRequired)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::TokenRequired)?;

    if token.is_empty() {
        return Err(AuthError::InvalidTokenFormat);
    }

    Ok(token)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_valid() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert!(matches!(bearer_token(None), Err(AuthError::TokenRequired)));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        assert!(matches!(
            bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::TokenRequired)
        ));
    }

    #[test]
    fn test_bearer_token_empty_value() {
        assert!(matches!(
            bearer_token(Some("Bearer ")),
            Err(AuthError::InvalidTokenFormat)
        ));
    }

    #[test]
    fn test_bearer_token_no_space() {
        // "Bearer" alone has no separating space, so no scheme match
        assert!(matches!(
            bearer_token(Some("Bearer")),
            Err(AuthError::TokenRequired)
        ));
    }
}
