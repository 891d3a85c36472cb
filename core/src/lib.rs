//! # GameApp Core
//!
//! Core business logic and domain layer for the GameApp account backend.
//! This crate contains the user entity and token claims, the registration,
//! login and profile workflows, the password and token services, the user
//! repository interface, and the error type that ties them together.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AccessTokenClaims, RefreshTokenClaims, User, UserId};
pub use domain::value_objects::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse, Tokens,
    UserInfo,
};
pub use errors::{messages, DomainError, ErrorKind};
pub use repositories::{InMemoryUserRepository, UserRepository};
pub use services::{
    AuthTokenService, BcryptPasswordHasher, PasswordHasher, TokenService, TokenServiceConfig,
    UserService, UserServiceConfig, UserValidator,
};
