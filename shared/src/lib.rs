//! Shared utilities and common types for the GameApp server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - The error body returned by the HTTP layer
//! - Utility functions (phone number validation, length checks)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::{phone, validation};
