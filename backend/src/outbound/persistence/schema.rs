//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match the statement issued by [`super::schema_init`]; there is no
//! migration framework, so the two are kept in step by hand.

diesel::table! {
    /// User records.
    ///
    /// `id` is a `SERIAL` primary key assigned by PostgreSQL on insert.
    users (id) {
        id -> Int4,
        name -> Text,
        email -> Text,
    }
}
