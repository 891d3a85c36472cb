//! Unit tests for the registration validator

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::user::User;
use crate::domain::value_objects::RegisterRequest;
use crate::errors::{messages, ErrorKind};
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::user::UserValidator;

fn validator(repository: InMemoryUserRepository) -> UserValidator<InMemoryUserRepository> {
    UserValidator::new(Arc::new(repository), Duration::from_secs(1))
}

#[tokio::test]
async fn test_valid_request_passes() {
    let validator = validator(InMemoryUserRepository::new());
    let request = RegisterRequest::new("09123456789", "Ali", "Passw0rd!");
    assert!(validator.validate_register_request(&request).await.is_ok());
}

#[tokio::test]
async fn test_taken_phone_number() {
    let repository = InMemoryUserRepository::new();
    repository
        .register(User::new("Taken".into(), "09123456789".into(), "hash".into()))
        .await
        .unwrap();
    let validator = validator(repository);

    let err = validator
        .validate_register_request(&RegisterRequest::new("09123456789", "Ali", "Passw0rd!"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.message(), messages::PHONE_NUMBER_NOT_UNIQUE);
}

#[tokio::test]
async fn test_password_length_counts_characters() {
    let validator = validator(InMemoryUserRepository::new());

    // 8 characters, 16 bytes
    let request = RegisterRequest::new("09123456789", "Ali", "пароль12");
    assert!(validator.validate_register_request(&request).await.is_ok());

    // 20 characters of 4 bytes each exceed the bcrypt input limit
    let request = RegisterRequest::new("09123456789", "Ali", "😀".repeat(20));
    let err = validator.validate_register_request(&request).await.unwrap_err();
    assert_eq!(err.field(), Some("password"));
}
