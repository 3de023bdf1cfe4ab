//! Token Engine
//!
//! Issues and verifies the two classes of signed bearer tokens:
//!
//! | kind    | lifetime | secret          |
//! |---------|----------|-----------------|
//! | access  | 15 min   | access secret   |
//! | refresh | 7 days   | refresh secret  |
//!
//! The two signing domains are independent: an access token never verifies
//! against the refresh secret and vice versa. Tokens are self-contained
//! (HS256 JWT with issuer, audience, expiry and a random `jti`); verification
//! is pure computation and never consults the credential store.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::{AuthConfig, ConfigError};
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AuthError, AuthResult};

/// The claim set embedded in every issued token.
///
/// Immutable once signed; reconstructed from the envelope on verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// Wire-format JWT claims.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    email: String,
    role: UserRole,
    iss: String,
    aud: String,
    /// Random per-token id; guarantees every issued token is distinct
    jti: Uuid,
    iat: i64,
    exp: i64,
}

/// One signing domain: paired keys plus a lifetime.
struct SigningDomain {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl SigningDomain {
    fn new(secret: &str, ttl_secs: i64, missing: &'static str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret(missing));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        })
    }
}

/// Stateless dual-domain token engine.
///
/// Built once at startup from [`AuthConfig`]; a missing secret is a
/// configuration error there, never a per-request failure.
pub struct TokenEngine {
    access: SigningDomain,
    refresh: SigningDomain,
    issuer: String,
    audience: String,
}

impl TokenEngine {
    /// Build the engine, failing fast on absent secrets.
    pub fn new(config: &AuthConfig) -> Result<Self, ConfigError> {
        let access = SigningDomain::new(
            &config.access_secret,
            config.access_ttl.as_secs() as i64,
            "JWT_SECRET",
        )?;
        let refresh = SigningDomain::new(
            &config.refresh_secret,
            config.refresh_ttl.as_secs() as i64,
            "JWT_REFRESH_SECRET",
        )?;

        Ok(Self {
            access,
            refresh,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        })
    }

    /// Issue a short-lived access token.
    pub fn issue_access(&self, payload: &TokenPayload) -> AuthResult<String> {
        self.issue(&self.access, payload)
    }

    /// Issue a long-lived refresh token.
    pub fn issue_refresh(&self, payload: &TokenPayload) -> AuthResult<String> {
        self.issue(&self.refresh, payload)
    }

    /// Verify an access token and recover its payload.
    pub fn verify_access(&self, token: &str) -> AuthResult<TokenPayload> {
        self.verify(&self.access, token)
    }

    /// Verify a refresh token and recover its payload.
    pub fn verify_refresh(&self, token: &str) -> AuthResult<TokenPayload> {
        self.verify(&self.refresh, token)
    }

    fn issue(&self, domain: &SigningDomain, payload: &TokenPayload) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: payload.user_id,
            email: payload.email.clone(),
            role: payload.role,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            jti: Uuid::new_v4(),
            iat: now,
            exp: now + domain.ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &domain.encoding)
            .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))
    }

    /// All verification failures collapse to [`AuthError::InvalidToken`];
    /// the sub-case (malformed, bad signature, expired, wrong issuer or
    /// audience) is logged but never surfaced to the caller.
    fn verify(&self, domain: &SigningDomain, token: &str) -> AuthResult<TokenPayload> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let data = decode::<Claims>(token, &domain.decoding, &validation).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::InvalidToken
        })?;

        Ok(TokenPayload {
            user_id: data.claims.sub,
            email: data.claims.email,
            role: data.claims.role,
        })
    }
}
