//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod in_memory_user_repository;
mod user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{USER_NOT_FOUND_MESSAGE, UserPersistenceError, UserRepository};
