//! Configuration for the token service

use std::fmt;

use chrono::Duration;
use ga_shared::config::{auth::DEFAULT_JWT_SECRET, JwtConfig};

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// HMAC signing key
    pub sign_key: String,
    /// Access token lifetime
    pub access_expiration: Duration,
    /// Refresh token lifetime
    pub refresh_expiration: Duration,
    /// `sub` claim of access tokens
    pub access_subject: String,
    /// `sub` claim of refresh tokens
    pub refresh_subject: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            sign_key: DEFAULT_JWT_SECRET.to_string(),
            access_expiration: Duration::hours(24),
            refresh_expiration: Duration::days(7),
            access_subject: "at".to_string(),
            refresh_subject: "rt".to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Default lifetimes and subjects with the given signing key
    pub fn with_sign_key(sign_key: impl Into<String>) -> Self {
        Self {
            sign_key: sign_key.into(),
            ..Default::default()
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            sign_key: jwt.secret.clone(),
            access_expiration: Duration::seconds(jwt.access_token_expiry),
            refresh_expiration: Duration::seconds(jwt.refresh_token_expiry),
            access_subject: jwt.access_subject.clone(),
            refresh_subject: jwt.refresh_subject.clone(),
        }
    }
}

impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("sign_key", &"<redacted>")
            .field("access_expiration", &self.access_expiration)
            .field("refresh_expiration", &self.refresh_expiration)
            .field("access_subject", &self.access_subject)
            .field("refresh_subject", &self.refresh_subject)
            .finish()
    }
}
