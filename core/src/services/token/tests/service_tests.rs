//! Unit tests for the token service

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::domain::entities::token::AccessTokenClaims;
use crate::errors::ErrorKind;
use crate::services::token::{TokenService, TokenServiceConfig};

const SECRET: &str = "unit-test-signing-key";

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::with_sign_key(SECRET))
}

#[test]
fn test_access_token_round_trip() {
    let service = service();
    let token = service.create_access_token(42).unwrap();

    let claims = service.parse_access_token(&token).unwrap();
    assert_eq!(claims.user_id, 42);
    assert_eq!(claims.sub, "at");
    assert_eq!(claims.exp - claims.iat, 86_400);
    assert!(claims.iat <= claims.nbf && claims.nbf < claims.exp);
}

#[test]
fn test_bearer_prefix_is_optional() {
    let service = service();
    let token = service.create_access_token(7).unwrap();

    let bare = service.parse_access_token(&token).unwrap();
    let prefixed = service.parse_access_token(&format!("Bearer {}", token)).unwrap();
    assert_eq!(bare, prefixed);
}

#[test]
fn test_refresh_token_round_trip() {
    let service = service();
    let token = service.create_refresh_token().unwrap();

    let claims = service.parse_refresh_token(&token).unwrap();
    assert_eq!(claims.sub, "rt");
    assert_eq!(claims.exp - claims.iat, 604_800);
}

#[test]
fn test_token_kinds_are_not_interchangeable() {
    let service = service();
    let access = service.create_access_token(1).unwrap();
    let refresh = service.create_refresh_token().unwrap();

    let err = service.parse_access_token(&refresh).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);

    let err = service.parse_refresh_token(&access).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[test]
fn test_expired_token_is_rejected() {
    let service = service();
    let token = service
        .create_access_token_at(1, Utc::now() - Duration::hours(25))
        .unwrap();

    let err = service.parse_access_token(&token).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[test]
fn test_token_not_yet_valid_is_rejected() {
    let service = service();
    let token = service
        .create_access_token_at(1, Utc::now() + Duration::hours(1))
        .unwrap();

    let err = service.parse_access_token(&token).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[test]
fn test_foreign_key_is_rejected() {
    let ours = service();
    let theirs = TokenService::new(TokenServiceConfig::with_sign_key("some-other-key"));
    let token = theirs.create_access_token(1).unwrap();

    let err = ours.parse_access_token(&token).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[test]
fn test_tampered_payload_is_rejected() {
    let service = service();
    let token = service.create_access_token(1).unwrap();
    let forged_payload = service.create_access_token(2).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let forged: Vec<&str> = forged_payload.split('.').collect();
    assert_ne!(parts[1], forged[1]);
    let spliced = format!("{}.{}.{}", parts[0], forged[1], parts[2]);

    let err = service.parse_access_token(&spliced).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[test]
fn test_flipped_signature_byte_is_rejected() {
    let service = service();
    let token = service.create_access_token(1).unwrap();

    let (signed, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    let flipped: String = chars.into_iter().collect();
    assert_ne!(flipped, signature);

    let err = service
        .parse_access_token(&format!("{}.{}", signed, flipped))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[test]
fn test_other_algorithms_are_rejected() {
    let service = service();
    let claims = AccessTokenClaims::new(1, "at", Utc::now(), Duration::hours(1));

    let hs512 = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();
    let err = service.parse_access_token(&hs512).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);

    // {"alg":"none","typ":"JWT"} with a valid payload and no signature
    let valid = service.create_access_token(1).unwrap();
    let payload = valid.split('.').nth(1).unwrap();
    let unsigned = format!("eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.{}.", payload);
    let err = service.parse_access_token(&unsigned).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

#[test]
fn test_garbage_is_rejected() {
    let service = service();
    for input in ["", "Bearer ", "not-a-token", "a.b.c", "Bearer a.b.c"] {
        let err = service.parse_access_token(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidToken, "input {:?}", input);
    }
}

#[test]
fn test_config_from_jwt_config() {
    let jwt = ga_shared::JwtConfig::new("from-config").with_access_expiry_hours(2);
    let config = TokenServiceConfig::from(&jwt);

    assert_eq!(config.sign_key, "from-config");
    assert_eq!(config.access_expiration, Duration::hours(2));
    assert_eq!(config.refresh_expiration, Duration::days(7));
    assert!(!format!("{:?}", config).contains("from-config"));
}
