//! Service entry-point: loads settings, prepares storage, and serves HTTP.

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use exercise_tracker::server::{ServerConfig, create_server};
use exercise_tracker::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| eyre!("failed to load configuration: {err}"))?;
    let mut config = ServerConfig::new(settings.host(), settings.port());

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations() {
            run_pending_migrations(database_url)
                .await
                .wrap_err("failed to migrate database")?;
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.pool_max_size()),
        )
        .await
        .wrap_err("failed to connect to database")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to bind server")?;
    info!(host = settings.host(), port = settings.port(), "server listening");
    server.await?;
    Ok(())
}
