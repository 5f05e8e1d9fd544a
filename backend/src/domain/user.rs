//! User data model.
//!
//! A [`User`] is the only entity the service stores. Its identifier is
//! assigned by the storage engine on insert; the application never picks
//! one. Writes travel as a [`UserDraft`], which carries the mutable fields
//! only.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Storage-assigned user identifier.
///
/// Backed by the `SERIAL` primary key, so it fits a PostgreSQL `integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier read from storage or a request path.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Access the raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable user fields submitted on create and update.
///
/// No content rules are enforced on either field; the only invariant is that
/// both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    email: String,
}

impl UserDraft {
    /// Build a draft from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Name as submitted.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email as submitted.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Attach an identifier, producing a full [`User`].
    #[must_use]
    pub fn with_id(self, id: UserId) -> User {
        let Self { name, email } = self;
        User { id, name, email }
    }
}

/// Persisted user.
///
/// Serialises as `{"id":1,"name":"Ada","email":"ada@x.com"}`; all three keys
/// are always present.
///
/// # Examples
/// ```
/// use users_service::domain::{User, UserId};
///
/// let user = User::new(UserId::new(1), "Ada", "ada@x.com");
/// let json = serde_json::to_string(&user).expect("serialise user");
/// assert_eq!(json, r#"{"id":1,"name":"Ada","email":"ada@x.com"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    #[schema(value_type = i32, example = 1)]
    id: UserId,
    #[schema(example = "Ada")]
    name: String,
    #[schema(example = "ada@x.com")]
    email: String,
}

impl User {
    /// Build a user from its parts.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email, stored verbatim.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
