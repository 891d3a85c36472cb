//! Password hashing
//!
//! Passwords are stored as bcrypt hashes. bcrypt only reads the first 72
//! bytes of its input, so longer passwords are refused instead of silently
//! truncated.

mod hasher;

pub use hasher::{BcryptPasswordHasher, PasswordHasher, MAX_PASSWORD_BYTES};
