//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - The user repository
//! - Reversible schema migrations embedded from `infra/migrations`

pub mod connection;
pub mod migrations;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use migrations::Migrator;
pub use mysql::MySqlUserRepository;
