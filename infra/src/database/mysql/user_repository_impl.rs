//! MySQL implementation of the UserRepository trait.
//!
//! The `users.phone_number` column carries a unique index; an insert that
//! violates it is reported as `InvalidInput`, which makes the store the final
//! authority on phone number uniqueness.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ga_core::domain::entities::user::{User, UserId};
use ga_core::errors::{messages, DomainError};
use ga_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(op: &'static str, row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let decode = |e: sqlx::Error| storage_error(op, e);

        Ok(User {
            id: row.try_get("id").map_err(decode)?,
            name: row.try_get("name").map_err(decode)?,
            phone_number: row.try_get("phone_number").map_err(decode)?,
            password_hash: row.try_get("password").map_err(decode)?,
        })
    }
}

fn storage_error(op: &'static str, e: sqlx::Error) -> DomainError {
    tracing::error!(op, error = %e, "Database query failed");
    DomainError::storage(op, messages::STORAGE_UNAVAILABLE).with_source(e)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn is_phone_number_unique(&self, phone_number: &str) -> Result<bool, DomainError> {
        const OP: &str = "mysql::is_phone_number_unique";

        let row = sqlx::query("SELECT id FROM users WHERE phone_number = ? LIMIT 1")
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error(OP, e))?;

        Ok(row.is_none())
    }

    async fn register(&self, user: User) -> Result<User, DomainError> {
        const OP: &str = "mysql::register";

        let result = sqlx::query("INSERT INTO users (name, phone_number, password) VALUES (?, ?, ?)")
            .bind(&user.name)
            .bind(&user.phone_number)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(user.with_id(done.last_insert_id())),
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!("phone number taken by a concurrent registration");
                Err(DomainError::invalid_input(
                    OP,
                    "phone_number",
                    messages::PHONE_NUMBER_NOT_UNIQUE,
                )
                .with_source(e))
            }
            Err(e) => Err(storage_error(OP, e)),
        }
    }

    async fn get_user_by_phone_number(&self, phone_number: &str) -> Result<User, DomainError> {
        const OP: &str = "mysql::get_user_by_phone_number";

        let row = sqlx::query(
            "SELECT id, name, phone_number, password FROM users WHERE phone_number = ? LIMIT 1",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error(OP, e))?;

        match row {
            Some(row) => Self::row_to_user(OP, &row),
            None => Err(DomainError::not_found(OP)),
        }
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<User, DomainError> {
        const OP: &str = "mysql::get_user_by_id";

        let row = sqlx::query("SELECT id, name, phone_number, password FROM users WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error(OP, e))?;

        match row {
            Some(row) => Self::row_to_user(OP, &row),
            None => Err(DomainError::not_found(OP)),
        }
    }
}
