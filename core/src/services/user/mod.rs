//! User account workflows
//!
//! This module orchestrates registration, login and profile lookup on top of
//! the [`UserRepository`](crate::repositories::UserRepository),
//! [`PasswordHasher`](crate::services::password::PasswordHasher) and
//! [`AuthTokenService`] collaborators. Every storage call runs under the
//! deadline configured in [`UserServiceConfig`].

mod config;
mod deadline;
mod service;
mod traits;
mod validator;

#[cfg(test)]
mod tests;

pub use config::UserServiceConfig;
pub use service::UserService;
pub use traits::AuthTokenService;
pub use validator::{
    UserValidator, NAME_MAX_LEN, NAME_MIN_LEN, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN,
};
