//! Registration input validation

use std::sync::Arc;
use std::time::Duration;

use ga_shared::phone::is_valid_phone_number;
use ga_shared::validation::length_between;

use crate::domain::value_objects::RegisterRequest;
use crate::errors::{messages, DomainError};
use crate::repositories::UserRepository;
use crate::services::password::MAX_PASSWORD_BYTES;

use super::deadline::with_deadline;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 20;

/// Validates registration requests
///
/// Rules are checked in a fixed order and the first failure is returned:
/// phone number format, phone number uniqueness, name length, password length.
pub struct UserValidator<R: UserRepository> {
    repository: Arc<R>,
    storage_timeout: Duration,
}

impl<R: UserRepository> UserValidator<R> {
    pub fn new(repository: Arc<R>, storage_timeout: Duration) -> Self {
        Self {
            repository,
            storage_timeout,
        }
    }

    pub async fn validate_register_request(&self, request: &RegisterRequest) -> Result<(), DomainError> {
        const OP: &str = "user_validator::validate_register_request";

        if !is_valid_phone_number(&request.phone_number) {
            return Err(DomainError::invalid_input(
                OP,
                "phone_number",
                messages::PHONE_NUMBER_NOT_VALID,
            ));
        }

        let unique = with_deadline(
            self.storage_timeout,
            OP,
            self.repository.is_phone_number_unique(&request.phone_number),
        )
        .await
        .map_err(|e| e.wrap(OP))?;
        if !unique {
            return Err(DomainError::invalid_input(
                OP,
                "phone_number",
                messages::PHONE_NUMBER_NOT_UNIQUE,
            ));
        }

        if !length_between(&request.name, NAME_MIN_LEN, NAME_MAX_LEN) {
            return Err(DomainError::invalid_input(OP, "name", messages::NAME_LENGTH));
        }

        // A 20 character password can still exceed bcrypt's byte limit with multi-byte characters.
        if !length_between(&request.password, PASSWORD_MIN_LEN, PASSWORD_MAX_LEN)
            || request.password.len() > MAX_PASSWORD_BYTES
        {
            return Err(DomainError::invalid_input(
                OP,
                "password",
                messages::PASSWORD_LENGTH,
            ));
        }

        Ok(())
    }
}
