//! Token service module for JWT management
//!
//! This module handles all token-related operations:
//! - HS256 access token generation and verification
//! - Identity-free refresh token generation and verification
//! - `Bearer ` prefix handling on inbound tokens

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::{TokenService, BEARER_PREFIX};
