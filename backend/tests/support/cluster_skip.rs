//! Helpers deciding whether database-backed tests run.
//!
//! Tests that need PostgreSQL read its URL from `TEST_DATABASE_URL`. When the
//! variable is absent they print a `SKIP-TEST-CLUSTER` marker and return early
//! so the rest of the suite still runs on machines without a database.

const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";

/// Returns true when `SKIP_TEST_CLUSTER` is set to a truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// URL of the PostgreSQL database reserved for tests, if configured.
///
/// Prints the skip marker and returns `None` when the variable is unset or
/// blank.
pub fn test_database_url() -> Option<String> {
    match std::env::var(TEST_DATABASE_URL) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-CLUSTER: {TEST_DATABASE_URL} is not set");
            None
        }
    }
}

/// Handles database setup failures once a URL was supplied.
///
/// With `SKIP_TEST_CLUSTER` truthy, prints a skip marker and returns `None`.
/// Otherwise panics so a broken database is not mistaken for a pass.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test database setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
