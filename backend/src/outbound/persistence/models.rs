//! Internal Diesel row structs for the `users` table.
//!
//! These never leave the persistence module; the repository converts them
//! into domain [`User`](crate::domain::User) values.

use diesel::prelude::*;

use super::schema::users;
use crate::domain::{User, UserId};

/// Row read back from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let UserRow { id, name, email } = row;
        User::new(UserId::new(id), name, email)
    }
}

/// Insert payload; `id` is left to the sequence.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Changeset overwriting both mutable columns.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub name: &'a str,
    pub email: &'a str,
}
