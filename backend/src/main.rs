//! Users service entry-point: connects to PostgreSQL, ensures the schema, and
//! serves the REST endpoints.

mod server;

use actix_web::web;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_service::inbound::http::health::HealthState;
use users_service::outbound::persistence::{DbPool, ensure_schema};

use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
///
/// Any failure before the listener is bound (pool, schema, bind) is fatal:
/// it is logged and returned so the process exits non-zero.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::parse();

    let pool = DbPool::new(settings.pool_config()).await.map_err(|err| {
        error!(error = %err, "database connection failed");
        std::io::Error::other(format!("create database pool: {err}"))
    })?;

    ensure_schema(&pool).await.map_err(|err| {
        error!(error = %err, "schema initialisation failed");
        std::io::Error::other(err.to_string())
    })?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), pool);
    let server = create_server(health_state, config)?;
    info!(bind_addr = %settings.bind_addr(), "users service listening");
    server.await
}
