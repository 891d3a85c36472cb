//! Schema migrations
//!
//! Migrations live in `infra/migrations` as reversible `<version>_<name>.up.sql`
//! and `.down.sql` pairs and are embedded into the binary at compile time.

use sqlx::migrate::Migrator as SqlxMigrator;

use crate::database::connection::DatabasePool;
use crate::InfrastructureError;

static MIGRATIONS: SqlxMigrator = sqlx::migrate!("./migrations");

/// Applies and reverts the embedded schema migrations
pub struct Migrator<'a> {
    pool: &'a DatabasePool,
}

impl<'a> Migrator<'a> {
    pub fn new(pool: &'a DatabasePool) -> Self {
        Self { pool }
    }

    /// Apply every pending migration
    pub async fn up(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Applying database migrations");
        MIGRATIONS.run(self.pool.get_pool()).await?;
        tracing::info!(count = Self::embedded().iter().count(), "Database migrations applied");
        Ok(())
    }

    /// Revert every applied migration
    pub async fn down(&self) -> Result<(), InfrastructureError> {
        tracing::info!("Reverting database migrations");
        MIGRATIONS.undo(self.pool.get_pool(), 0).await?;
        tracing::info!("Database migrations reverted");
        Ok(())
    }

    /// Migrations compiled into this binary
    pub fn embedded() -> &'static SqlxMigrator {
        &MIGRATIONS
    }
}
