//! Business services containing domain logic and use cases.

pub mod password;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use token::{TokenService, TokenServiceConfig};
pub use user::{AuthTokenService, UserService, UserServiceConfig, UserValidator};
