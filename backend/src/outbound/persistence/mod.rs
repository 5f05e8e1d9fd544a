//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Provides the concrete [`UserRepository`](crate::domain::ports::UserRepository)
//! backed by PostgreSQL through `diesel-async` and a `bb8` pool, plus the
//! startup schema bootstrap.
//!
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   internal; only domain types cross the boundary.
//! - Statements are built with the Diesel query builder, so every value is
//!   sent as a bind parameter.
//!
//! # Example
//!
//! ```ignore
//! use users_service::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, ensure_schema,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! ensure_schema(&pool).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_helpers;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;
mod schema_init;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use schema_init::{CREATE_USERS_TABLE, SchemaInitError, ensure_schema};
