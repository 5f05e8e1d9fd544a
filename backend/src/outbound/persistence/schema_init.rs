//! Startup schema bootstrap for the `users` table.
//!
//! The statement is idempotent, so running it against an initialised
//! database is a no-op. A failure here must stop the process before the
//! server binds.

use diesel_async::RunQueryDsl;
use tracing::info;

use super::pool::{DbPool, PoolError};

/// DDL kept in step with [`super::schema`].
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL
)";

/// Errors raised while ensuring the schema exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaInitError {
    /// No connection could be checked out.
    #[error("schema initialisation could not connect: {0}")]
    Connection(#[from] PoolError),
    /// The DDL statement was rejected.
    #[error("schema initialisation failed: {message}")]
    Statement {
        /// PostgreSQL error text.
        message: String,
    },
}

/// Create the `users` table when it is absent.
///
/// # Errors
///
/// Returns [`SchemaInitError::Connection`] when the pool cannot hand out a
/// connection and [`SchemaInitError::Statement`] when PostgreSQL rejects the
/// statement.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaInitError> {
    let mut conn = pool.get().await?;
    diesel::sql_query(CREATE_USERS_TABLE)
        .execute(&mut conn)
        .await
        .map_err(|err| SchemaInitError::Statement {
            message: err.to_string(),
        })?;
    info!("users table ready");
    Ok(())
}
