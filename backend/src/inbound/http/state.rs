//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend on
//! the repository port only and stay testable without a database.

use std::sync::Arc;

use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use users_service::domain::ports::InMemoryUserRepository;
/// use users_service::inbound::http::state::HttpState;
///
/// let state = HttpState::new(Arc::new(InMemoryUserRepository::new()));
/// let _users = state.users.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Repository backing every `/users` route.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state around a user repository.
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
