//! Request body codec for user writes.
//!
//! ```text
//! {"name":"Ada","email":"ada@x.com"}
//! {"id":9,"name":"Ada","email":"ada@x.com"}   // id accepted and ignored
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserDraft;

/// Body for `POST /users` and `PUT /users/{id}`.
///
/// `name` and `email` are required strings. A numeric `id` may be present but
/// is never used: creates take the storage-assigned id and updates take the
/// id from the path. Any other field is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserPayload {
    /// Ignored when present; must be an integer or `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Display name, stored verbatim.
    #[schema(example = "Ada")]
    pub name: String,
    /// Contact email, stored verbatim.
    #[schema(example = "ada@x.com")]
    pub email: String,
}

impl UserPayload {
    /// Build a payload without an id.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<UserPayload> for UserDraft {
    fn from(value: UserPayload) -> Self {
        let UserPayload { name, email, .. } = value;
        Self::new(name, email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"name":"Ada","email":"ada@x.com"}"#)]
    #[case(r#"{"id":42,"name":"Ada","email":"ada@x.com"}"#)]
    #[case(r#"{"id":null,"name":"Ada","email":"ada@x.com"}"#)]
    fn id_is_optional_and_ignored(#[case] body: &str) {
        let payload: UserPayload = serde_json::from_str(body).expect("valid payload");
        let draft = UserDraft::from(payload);
        assert_eq!(draft, UserDraft::new("Ada", "ada@x.com"));
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::truncated(r#"{"name":"Ada""#)]
    #[case::array(r#"[{"name":"Ada","email":"ada@x.com"}]"#)]
    #[case::missing_email(r#"{"name":"Ada"}"#)]
    #[case::null_name(r#"{"name":null,"email":"ada@x.com"}"#)]
    #[case::wrong_type(r#"{"name":7,"email":"ada@x.com"}"#)]
    #[case::string_id(r#"{"id":"one","name":"Ada","email":"ada@x.com"}"#)]
    #[case::unknown_field(r#"{"name":"Ada","email":"ada@x.com","admin":true}"#)]
    fn malformed_bodies_are_rejected(#[case] body: &str) {
        assert!(serde_json::from_str::<UserPayload>(body).is_err());
    }

    #[rstest]
    fn empty_strings_are_accepted() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"name":"","email":""}"#).expect("no content rules");
        assert_eq!(payload, UserPayload::new("", ""));
    }
}
