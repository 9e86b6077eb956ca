//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! to and from domain types.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{exercises, users};

/// Row read from the `users` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
}

/// Insertable user record; `created_at` takes its column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
}

/// Row read from the `exercises` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = exercises)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExerciseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
}

/// Insertable exercise record.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = exercises)]
pub(crate) struct NewExerciseRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: &'a str,
    pub duration: i32,
    pub date: NaiveDate,
}
