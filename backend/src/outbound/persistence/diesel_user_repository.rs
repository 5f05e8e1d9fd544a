//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Each operation checks out one pooled connection and runs exactly one
//! statement; no transactions span operations. Update and delete log the
//! affected row count but report success either way.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list users"))?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find(&self, id: UserId) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find user"))?;

        row.map(User::from)
            .ok_or_else(|| UserPersistenceError::not_found(id))
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            name: draft.name(),
            email: draft.email(),
        };

        let row: UserRow = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "create user"))?;

        debug!(user_id = row.id, "user created");
        Ok(row.into())
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = UserChangeset {
            name: draft.name(),
            email: draft.email(),
        };

        let updated_rows = diesel::update(users::table.find(id.get()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update user"))?;

        debug!(user_id = %id, updated_rows, "user update executed");
        Ok(draft.clone().with_id(id))
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted_rows = diesel::delete(users::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete user"))?;

        debug!(user_id = %id, deleted_rows, "user delete executed");
        Ok(())
    }
}
