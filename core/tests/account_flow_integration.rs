//! End-to-end account flow against the in-memory store

use std::sync::Arc;

use ga_core::{
    BcryptPasswordHasher, ErrorKind, InMemoryUserRepository, LoginRequest, PasswordHasher,
    RegisterRequest, TokenService, TokenServiceConfig, UserRepository, UserService,
    UserServiceConfig,
};
use ga_shared::{AuthConfig, JwtConfig};

fn build() -> (
    UserService<InMemoryUserRepository, BcryptPasswordHasher, TokenService>,
    Arc<InMemoryUserRepository>,
) {
    let auth = AuthConfig {
        jwt: JwtConfig::new("integration-secret"),
        bcrypt_cost: 4,
        storage_timeout_ms: 2_000,
    };
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = UserService::new(
        Arc::clone(&repository),
        Arc::new(BcryptPasswordHasher::new(auth.bcrypt_cost)),
        Arc::new(TokenService::new(TokenServiceConfig::from(&auth.jwt))),
        UserServiceConfig::from(&auth),
    );
    (service, repository)
}

#[tokio::test]
async fn test_register_login_profile() {
    let (service, repository) = build();

    let registered = service
        .register(RegisterRequest::new("09123456789", "Ali", "Passw0rd!"))
        .await
        .unwrap();
    assert_ne!(registered.user.id, 0);
    assert_eq!(registered.user.name, "Ali");

    let stored = repository
        .get_user_by_phone_number("09123456789")
        .await
        .unwrap();
    assert_ne!(stored.password_hash, "Passw0rd!");
    assert!(BcryptPasswordHasher::new(4).verify("Passw0rd!", &stored.password_hash));

    let login = service
        .login(LoginRequest::new("09123456789", "Passw0rd!"))
        .await
        .unwrap();
    assert_eq!(login.user.id, registered.user.id);
    assert!(!login.tokens.access_token.is_empty());
    assert!(!login.tokens.refresh_token.is_empty());
    assert_eq!(login.tokens.access_token.split('.').count(), 3);

    let header = format!("Bearer {}", login.tokens.access_token);
    let profile = service.profile(&header).await.unwrap();
    assert_eq!(profile.name, "Ali");
}

#[tokio::test]
async fn test_duplicate_registration_creates_no_second_row() {
    let (service, repository) = build();
    let request = RegisterRequest::new("09123456789", "Ali", "Passw0rd!");

    service.register(request.clone()).await.unwrap();
    let err = service.register(request).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_concurrent_registrations_of_distinct_numbers() {
    let (service, repository) = build();
    let service = Arc::new(service);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .register(RegisterRequest::new(
                        format!("0912345670{}", i),
                        format!("player-{}", i),
                        "Passw0rd!",
                    ))
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(repository.len().await, 8);
}

#[tokio::test]
async fn test_tokens_from_another_deployment_are_rejected() {
    let (service, _) = build();
    service
        .register(RegisterRequest::new("09123456789", "Ali", "Passw0rd!"))
        .await
        .unwrap();

    let foreign = TokenService::new(TokenServiceConfig::with_sign_key("someone-else"));
    let token = foreign.create_access_token(1).unwrap();

    let err = service.profile(&token).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}
