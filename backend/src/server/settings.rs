//! Command-line and environment settings for the server binary.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use users_service::outbound::persistence::PoolConfig;

/// `users-service` arguments. Every flag falls back to an environment
/// variable; only the database URL is required.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "users-service",
    about = "CRUD HTTP API over a PostgreSQL users table",
    version
)]
pub struct ServerSettings {
    /// PostgreSQL connection URL.
    #[arg(
        long = "database-url",
        env = "DATABASE_URL",
        value_name = "url",
        hide_env_values = true,
        value_parser = parse_database_url
    )]
    database_url: String,
    /// Socket address to listen on.
    #[arg(
        long = "bind-addr",
        env = "BIND_ADDR",
        value_name = "addr",
        default_value = "0.0.0.0:8080"
    )]
    bind_addr: SocketAddr,
    /// Maximum number of pooled database connections.
    #[arg(
        long = "db-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        value_name = "count",
        default_value_t = 10
    )]
    db_max_connections: u32,
    /// Seconds to wait for a pooled connection before failing the request.
    #[arg(
        long = "db-connect-timeout-secs",
        env = "DATABASE_CONNECT_TIMEOUT_SECS",
        value_name = "seconds",
        default_value_t = 30
    )]
    db_connect_timeout_secs: u64,
}

fn parse_database_url(raw: &str) -> Result<String, String> {
    if raw.trim().is_empty() {
        return Err("database URL must not be empty".to_owned());
    }
    Ok(raw.to_owned())
}

impl ServerSettings {
    /// Socket address the listener binds to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Pool configuration derived from the database flags.
    #[must_use]
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(&self.database_url)
            .with_max_size(self.db_max_connections)
            .with_connection_timeout(Duration::from_secs(self.db_connect_timeout_secs))
    }
}
