//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::domain::entities::token::{AccessTokenClaims, RefreshTokenClaims};
use crate::domain::entities::user::UserId;
use crate::errors::DomainError;
use crate::services::user::AuthTokenService;

use super::config::TokenServiceConfig;

/// Scheme prefix accepted in front of inbound tokens
pub const BEARER_PREFIX: &str = "Bearer ";

/// Issues and verifies HS256 access and refresh tokens
///
/// Access and refresh tokens share the signing key and are told apart by
/// their `sub` claim, so one kind is never accepted in place of the other.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_validation: Validation,
    refresh_validation: Validation,
}

impl TokenService {
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.sign_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.sign_key.as_bytes());
        let access_validation = validation_for(&config.access_subject);
        let refresh_validation = validation_for(&config.refresh_subject);

        Self {
            config,
            encoding_key,
            decoding_key,
            access_validation,
            refresh_validation,
        }
    }

    /// Signs an access token for `user_id`, valid from now
    pub fn create_access_token(&self, user_id: UserId) -> Result<String, DomainError> {
        self.create_access_token_at(user_id, Utc::now())
    }

    /// Signs an access token whose validity window starts at `issued_at`
    pub fn create_access_token_at(
        &self,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = AccessTokenClaims::new(
            user_id,
            &self.config.access_subject,
            issued_at,
            self.config.access_expiration,
        );
        self.sign("token_service::create_access_token", &claims)
    }

    /// Signs a refresh token, valid from now
    pub fn create_refresh_token(&self) -> Result<String, DomainError> {
        self.create_refresh_token_at(Utc::now())
    }

    pub fn create_refresh_token_at(&self, issued_at: DateTime<Utc>) -> Result<String, DomainError> {
        let claims = RefreshTokenClaims::new(
            &self.config.refresh_subject,
            issued_at,
            self.config.refresh_expiration,
        );
        self.sign("token_service::create_refresh_token", &claims)
    }

    /// Verifies an access token, with or without the `Bearer ` prefix
    pub fn parse_access_token(&self, bearer_token: &str) -> Result<AccessTokenClaims, DomainError> {
        self.verify(
            "token_service::parse_access_token",
            bearer_token,
            &self.access_validation,
        )
    }

    /// Verifies a refresh token, with or without the `Bearer ` prefix
    pub fn parse_refresh_token(&self, bearer_token: &str) -> Result<RefreshTokenClaims, DomainError> {
        self.verify(
            "token_service::parse_refresh_token",
            bearer_token,
            &self.refresh_validation,
        )
    }

    fn sign<T: Serialize>(&self, op: &'static str, claims: &T) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(op).with_source(e))
    }

    fn verify<T: DeserializeOwned>(
        &self,
        op: &'static str,
        bearer_token: &str,
        validation: &Validation,
    ) -> Result<T, DomainError> {
        let token = strip_bearer(bearer_token);

        decode::<T>(token, &self.decoding_key, validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = ?e.kind(), "rejected token");
                DomainError::invalid_token(op).with_source(e)
            })
    }
}

impl AuthTokenService for TokenService {
    fn create_access_token(&self, user_id: UserId) -> Result<String, DomainError> {
        TokenService::create_access_token(self, user_id)
    }

    fn create_refresh_token(&self) -> Result<String, DomainError> {
        TokenService::create_refresh_token(self)
    }

    fn parse_access_token(&self, bearer_token: &str) -> Result<AccessTokenClaims, DomainError> {
        TokenService::parse_access_token(self, bearer_token)
    }
}

fn strip_bearer(token: &str) -> &str {
    token.strip_prefix(BEARER_PREFIX).unwrap_or(token).trim()
}

fn validation_for(subject: &str) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.validate_nbf = true;
    validation.set_required_spec_claims(&["exp", "nbf", "sub"]);
    validation.sub = Some(subject.to_string());
    validation
}
