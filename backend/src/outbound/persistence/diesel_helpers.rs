//! Error mapping shared by the Diesel adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

/// Map pool errors to user persistence errors.
pub(crate) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to user persistence errors, keeping the driver message.
///
/// `NotFound` is not handled here: single-row lookups use `.optional()` and
/// decide for themselves what a missing row means.
pub(crate) fn map_diesel_error(error: DieselError, operation: &str) -> UserPersistenceError {
    let message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, detail = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(%message, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection(message)
        }
        _ => UserPersistenceError::query(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, UserPersistenceError::connection("timed out"));
    }

    #[rstest]
    fn query_builder_errors_keep_message() {
        let err = map_diesel_error(DieselError::QueryBuilderError("bad query".into()), "list");
        assert!(matches!(err, UserPersistenceError::Query { ref message } if message.contains("bad query")));
    }

    #[rstest]
    fn rollback_errors_are_query_errors() {
        let err = map_diesel_error(DieselError::RollbackTransaction, "update");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
