//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Username uniqueness is enforced by the `users_username_key` index, so two
//! racing inserts resolve inside PostgreSQL and the loser surfaces as
//! [`UserPersistenceError::DuplicateUsername`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId, Username};

use super::diesel_error_mapping::{DieselFault, classify_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel_error(error: diesel::result::Error, username: &Username) -> UserPersistenceError {
    match classify_diesel_error(&error) {
        DieselFault::UniqueViolation => {
            UserPersistenceError::duplicate_username(username.as_ref())
        }
        DieselFault::Connection(message) => UserPersistenceError::connection(message),
        DieselFault::Query(message) => UserPersistenceError::query(message),
    }
}

fn map_read_error(error: diesel::result::Error) -> UserPersistenceError {
    match classify_diesel_error(&error) {
        DieselFault::Connection(message) => UserPersistenceError::connection(message),
        DieselFault::Query(message) => UserPersistenceError::query(message),
        DieselFault::UniqueViolation => UserPersistenceError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let username = Username::new(&row.username).map_err(|err| {
        warn!(user_id = %row.id, error = %err, "stored username failed validation");
        UserPersistenceError::query("stored user is invalid")
    })?;
    Ok(User::new(UserId::from_uuid(row.id), username))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let row = NewUserRow {
            id: *user.id().as_uuid(),
            username: user.username().as_ref(),
        };

        diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_diesel_error(err, user.username()))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        users::table
            .order(users::created_at.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_read_error)?
            .into_iter()
            .map(row_to_user)
            .collect()
    }
}
