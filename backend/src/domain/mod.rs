//! Domain primitives and ports.
//!
//! Purpose: Define the user entity, the transport-agnostic error taxonomy,
//! and the repository port that persistence adapters implement.
//!
//! Public surface:
//! - Error / ErrorCode: failure categories mapped to HTTP statuses by
//!   inbound adapters.
//! - User / UserDraft / UserId: the stored entity, its write model, and
//!   its storage-assigned identifier.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::user::{User, UserDraft, UserId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use users_service::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("User not found"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
