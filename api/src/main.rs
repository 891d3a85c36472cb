use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::{bail, Context};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use ga_api::{create_app, telemetry, AppState};
use ga_infra::{DatabasePool, Migrator, MySqlUserRepository};
use ga_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging).context("failed to initialise tracing")?;

    info!(environment = %config.environment, "Starting GameApp API Server");

    if config.auth.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            bail!("refusing to start in production with the default JWT secret");
        }
        warn!("using the default JWT secret; set GAMEAPP_AUTH__JWT__SECRET");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;

    if config.database.run_migrations {
        Migrator::new(&pool)
            .up()
            .await
            .context("failed to apply database migrations")?;
    }

    let repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let state = web::Data::new(AppState::from_config(repository, &config.auth));

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()).wrap(TracingLogger::default()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
