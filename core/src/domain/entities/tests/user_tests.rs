//! Unit tests for user entity

use crate::domain::entities::user::User;

fn sample_user() -> User {
    User::new(
        "gamer".to_string(),
        "09123456789".to_string(),
        "$2b$04$abcdefghijklmnopqrstuu".to_string(),
    )
}

#[test]
fn test_new_user_is_not_persisted() {
    let user = sample_user();
    assert_eq!(user.id, 0);
    assert!(!user.is_persisted());

    let stored = user.with_id(7);
    assert_eq!(stored.id, 7);
    assert!(stored.is_persisted());
}

#[test]
fn test_info_excludes_password_hash() {
    let user = sample_user().with_id(3);
    let info = user.info();

    assert_eq!(info.id, 3);
    assert_eq!(info.name, "gamer");
    assert_eq!(info.phone_number, "09123456789");

    let json = serde_json::to_value(&info).unwrap();
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
}

#[test]
fn test_debug_redacts_password_hash() {
    let rendered = format!("{:?}", sample_user());
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("$2b$"));
}
