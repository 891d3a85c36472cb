//! User repository trait defining the interface for account persistence.
//!
//! Implementations report failures through [`DomainError`] kinds:
//! a lookup that finds nothing is `NotFound`, a registration that collides
//! with an existing phone number is `InvalidInput`, and any backend failure
//! is `Storage`.

use async_trait::async_trait;

use crate::domain::entities::user::{User, UserId};
use crate::errors::DomainError;

/// Repository trait for user persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use ga_core::domain::entities::user::{User, UserId};
/// use ga_core::errors::DomainError;
/// use ga_core::repositories::UserRepository;
///
/// struct RemoteUserRepository;
///
/// #[async_trait]
/// impl UserRepository for RemoteUserRepository {
///     async fn is_phone_number_unique(&self, _phone_number: &str) -> Result<bool, DomainError> {
///         Ok(true)
///     }
///
///     async fn register(&self, user: User) -> Result<User, DomainError> {
///         Ok(user.with_id(1))
///     }
///
///     async fn get_user_by_phone_number(&self, _phone_number: &str) -> Result<User, DomainError> {
///         Err(DomainError::not_found("remote::get_user_by_phone_number"))
///     }
///
///     async fn get_user_by_id(&self, _id: UserId) -> Result<User, DomainError> {
///         Err(DomainError::not_found("remote::get_user_by_id"))
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether no stored user has this phone number
    async fn is_phone_number_unique(&self, phone_number: &str) -> Result<bool, DomainError>;

    /// Persist a new user and return it with its assigned id
    ///
    /// The store is the final authority on phone number uniqueness: a
    /// collision detected here fails with `InvalidInput` even when an earlier
    /// uniqueness check passed.
    async fn register(&self, user: User) -> Result<User, DomainError>;

    /// Fetch the user owning `phone_number`
    async fn get_user_by_phone_number(&self, phone_number: &str) -> Result<User, DomainError>;

    /// Fetch a user by id
    async fn get_user_by_id(&self, id: UserId) -> Result<User, DomainError>;
}
