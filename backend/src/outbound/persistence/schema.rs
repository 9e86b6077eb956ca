//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users. `username` carries a unique index.
    users (id) {
        id -> Uuid,
        username -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Recorded exercises, indexed on `(user_id, date)` for log reads.
    exercises (id) {
        id -> Uuid,
        user_id -> Uuid,
        description -> Text,
        /// Minutes; a CHECK constraint keeps it positive.
        duration -> Int4,
        date -> Date,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(exercises -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(exercises, users);
