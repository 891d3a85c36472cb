//! Collaborator traits consumed by the user service

use crate::domain::entities::token::AccessTokenClaims;
use crate::domain::entities::user::UserId;
use crate::errors::DomainError;

/// Token issuing and verification as seen by the user workflows
pub trait AuthTokenService: Send + Sync {
    fn create_access_token(&self, user_id: UserId) -> Result<String, DomainError>;

    fn create_refresh_token(&self) -> Result<String, DomainError>;

    /// Verifies a token taken from an `Authorization` header
    fn parse_access_token(&self, bearer_token: &str) -> Result<AccessTokenClaims, DomainError>;
}
