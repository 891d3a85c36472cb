//! User entity representing a registered account.

use std::fmt;

use crate::domain::value_objects::UserInfo;

/// Numeric identifier assigned by the store on registration
pub type UserId = u64;

/// Registered account
///
/// The password is only ever held as a bcrypt hash. `Debug` redacts it so the
/// entity can be logged.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier, `0` until persisted
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Phone number in `09XXXXXXXXX` form, unique across users
    pub phone_number: String,

    /// bcrypt hash of the password
    pub password_hash: String,
}

impl User {
    /// Creates a user that has not been persisted yet
    pub fn new(name: String, phone_number: String, password_hash: String) -> Self {
        Self {
            id: 0,
            name,
            phone_number,
            password_hash,
        }
    }

    /// Returns a copy carrying the id assigned by the store
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Public projection without the password hash
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phone_number", &self.phone_number)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        user.info()
    }
}
