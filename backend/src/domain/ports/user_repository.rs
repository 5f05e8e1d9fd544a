//! Port abstraction for user persistence adapters and their errors.
//!
//! Every operation maps to one parameterised statement against the `users`
//! table. Update and delete do not report whether a row matched: callers get
//! success for an unknown id and nothing is persisted.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

use super::define_port_error;

/// Message surfaced to clients when a single-row lookup finds nothing.
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// No row matched a single-row lookup.
        NotFound {
            /// Identifier that matched no row.
            id: UserId,
        } => "user {id} not found",
        /// Repository connection could not be established.
        Connection {
            /// Driver or pool message, passed through verbatim.
            message: String,
        } => "{message}",
        /// Query or mutation failed during execution, or a row failed to decode.
        Query {
            /// Driver message, passed through verbatim.
            message: String,
        } => "{message}",
    }
}

impl From<UserPersistenceError> for Error {
    fn from(error: UserPersistenceError) -> Self {
        match error {
            UserPersistenceError::NotFound { .. } => Error::not_found(USER_NOT_FOUND_MESSAGE),
            UserPersistenceError::Connection { message }
            | UserPersistenceError::Query { message } => Error::internal(message),
        }
    }
}

/// Storage port for the `users` table.
///
/// Adapters report failures as [`UserPersistenceError`]; handlers convert
/// them into the domain [`Error`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in storage order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    ///
    /// Fails with [`UserPersistenceError::NotFound`] when no row matches.
    async fn find(&self, id: UserId) -> Result<User, UserPersistenceError>;

    /// Insert a new user and return it with the storage-assigned id.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Overwrite name and email for `id`.
    ///
    /// Returns the submitted values under `id` without re-reading the row.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Remove the row for `id`, succeeding whether or not it existed.
    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn not_found_maps_to_fixed_message() {
        let err: Error = UserPersistenceError::not_found(3).into();
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), USER_NOT_FOUND_MESSAGE);
    }

    #[rstest]
    #[case(UserPersistenceError::connection("connection refused"))]
    #[case(UserPersistenceError::query("relation \"users\" does not exist"))]
    fn storage_failures_keep_raw_message(#[case] source: UserPersistenceError) {
        let expected = source.to_string();
        let err: Error = source.into();
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), expected);
    }
}
