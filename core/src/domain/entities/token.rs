//! Claims carried by the signed tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Payload of an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Account the token was issued for
    pub user_id: UserId,

    /// Token kind discriminator (access subject)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl AccessTokenClaims {
    pub fn new(user_id: UserId, subject: &str, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            user_id,
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}

/// Payload of a refresh token
///
/// Refresh tokens carry no identity; they only prove that a login happened
/// with this signing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// Token kind discriminator (refresh subject)
    pub sub: String,

    pub iat: i64,

    pub nbf: i64,

    pub exp: i64,
}

impl RefreshTokenClaims {
    pub fn new(subject: &str, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            nbf: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}
