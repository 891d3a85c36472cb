//! Caller-facing error messages.

pub const PHONE_NUMBER_NOT_VALID: &str = "phone number is not valid";
pub const PHONE_NUMBER_NOT_UNIQUE: &str = "phone number is not unique";
pub const NAME_LENGTH: &str = "name must be between 3 and 50 characters";
pub const PASSWORD_LENGTH: &str = "password must be between 8 and 20 characters";
pub const INVALID_CREDENTIALS: &str = "phone number or password isn't correct";
pub const INVALID_TOKEN: &str = "invalid or expired token";
pub const UNAUTHORIZED: &str = "missing or invalid access token";
pub const RECORD_NOT_FOUND: &str = "record not found";
pub const STORAGE_UNAVAILABLE: &str = "storage is unavailable";
pub const STORAGE_DEADLINE_EXCEEDED: &str = "storage deadline exceeded";
pub const SOMETHING_WENT_WRONG: &str = "something went wrong";
