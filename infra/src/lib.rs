//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the GameApp backend.
//! It provides the MySQL-backed [`UserRepository`](ga_core::repositories::UserRepository),
//! connection pooling and the schema migrations the repository relies on.

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, Migrator, MySqlUserRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for ga_core::errors::DomainError {
    fn from(err: InfrastructureError) -> Self {
        ga_core::errors::DomainError::storage(
            "infrastructure",
            ga_core::errors::messages::STORAGE_UNAVAILABLE,
        )
        .with_source(err)
    }
}
