//! Refresh Use Case
//!
//! Exchanges a valid refresh token for a brand-new access+refresh pair.
//!
//! Rotation is one-way: there is no server-side token state, so the prior
//! refresh token stays formally valid until its own expiry. Early
//! revocation would require a server-side token-id list.

use std::sync::Arc;

use crate::domain::repository::UserStore;
use crate::error::{AuthError, AuthResult};
use crate::token::{TokenEngine, TokenPayload};

/// Refresh output: tokens only, no user projection
#[derive(Debug)]
pub struct RefreshOutput {
    pub access_token: String,
    pub refresh_token: String,
}

/// Refresh use case
pub struct RefreshUseCase<S>
where
    S: UserStore,
{
    store: Arc<S>,
    tokens: Arc<TokenEngine>,
}

impl<S> RefreshUseCase<S>
where
    S: UserStore,
{
    pub fn new(store: Arc<S>, tokens: Arc<TokenEngine>) -> Self {
        Self { store, tokens }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<RefreshOutput> {
        if refresh_token.trim().is_empty() {
            return Err(AuthError::Validation(
                "Refresh token is required".to_string(),
            ));
        }

        let payload = self.tokens.verify_refresh(refresh_token)?;

        // The token is self-contained, but the account behind it may have
        // been deleted since issuance.
        let user = self
            .store
            .find_by_id(payload.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Re-derive the payload from the current row so role or email
        // changes propagate into the new pair.
        let payload = TokenPayload {
            user_id: user.id,
            email: user.email.as_str().to_string(),
            role: user.role,
        };
        let access_token = self.tokens.issue_access(&payload)?;
        let refresh_token = self.tokens.issue_refresh(&payload)?;

        tracing::debug!(user_id = %user.id, "Token pair rotated");

        Ok(RefreshOutput {
            access_token,
            refresh_token,
        })
    }
}
