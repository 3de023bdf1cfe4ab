//! Application Configuration
//!
//! Configuration for the Auth application layer. Loaded once at process
//! start into an immutable struct and passed explicitly into the token
//! engine; never read from the environment per request.

use std::time::Duration;

use thiserror::Error;

/// Default access token lifetime (15 minutes)
pub const DEFAULT_ACCESS_TTL: Duration = Duration::from_secs(15 * 60);

/// Default refresh token lifetime (7 days)
pub const DEFAULT_REFRESH_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Issuer claim embedded in every token
pub const TOKEN_ISSUER: &str = "shopverse-api";

/// Audience claim embedded in every token
pub const TOKEN_AUDIENCE: &str = "shopverse-users";

/// Configuration load errors. These are startup failures, not request
/// errors: the process refuses to boot rather than failing at first use.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in environment")]
    MissingSecret(&'static str),

    #[error("{0} must be a number of seconds")]
    InvalidTtl(&'static str),
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signing secret for access tokens
    pub access_secret: String,
    /// Signing secret for refresh tokens (independent domain)
    pub refresh_secret: String,
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_ttl: Duration,
    /// Issuer claim
    pub issuer: String,
    /// Audience claim
    pub audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: String::new(),
            refresh_secret: String::new(),
            access_ttl: DEFAULT_ACCESS_TTL,
            refresh_ttl: DEFAULT_REFRESH_TTL,
            issuer: TOKEN_ISSUER.to_string(),
            audience: TOKEN_AUDIENCE.to_string(),
        }
    }
}

impl AuthConfig {
    /// Load from the environment. Both secrets are required.
    ///
    /// Optional overrides: `JWT_ACCESS_TTL_SECS`, `JWT_REFRESH_TTL_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingSecret("JWT_SECRET"))?;
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .map_err(|_| ConfigError::MissingSecret("JWT_REFRESH_SECRET"))?;

        let access_ttl = ttl_from_env("JWT_ACCESS_TTL_SECS", DEFAULT_ACCESS_TTL)?;
        let refresh_ttl = ttl_from_env("JWT_REFRESH_TTL_SECS", DEFAULT_REFRESH_TTL)?;

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl,
            refresh_ttl,
            ..Default::default()
        })
    }

    /// Config for development builds with well-known fallback secrets.
    pub fn development() -> Self {
        Self {
            access_secret: "fallback-dev-jwt-secret-change-in-production".to_string(),
            refresh_secret: "fallback-dev-refresh-secret-change-in-production".to_string(),
            ..Default::default()
        }
    }
}

fn ttl_from_env(var: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidTtl(var)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = AuthConfig::development();
        assert_eq!(config.access_ttl, Duration::from_secs(900));
        assert_eq!(config.refresh_ttl, Duration::from_secs(604_800));
        assert_eq!(config.issuer, "shopverse-api");
        assert_eq!(config.audience, "shopverse-users");
    }

    #[test]
    fn test_development_secrets_differ_per_domain() {
        let config = AuthConfig::development();
        assert_ne!(config.access_secret, config.refresh_secret);
    }
}
