//! PostgreSQL-backed `ExerciseRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ExercisePersistenceError, ExerciseRepository};
use crate::domain::{Description, DurationMinutes, Exercise, ExerciseId, LogFilter, UserId};

use super::diesel_error_mapping::{DieselFault, classify_diesel_error, map_pool_error};
use super::models::{ExerciseRow, NewExerciseRow};
use super::pool::DbPool;
use super::schema::exercises;

/// Diesel-backed implementation of the [`ExerciseRepository`] port.
///
/// Log reads use the `(user_id, date)` index; same-day entries are ordered by
/// `created_at` so they keep insertion order.
#[derive(Clone)]
pub struct DieselExerciseRepository {
    pool: DbPool,
}

impl DieselExerciseRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ExercisePersistenceError {
    match classify_diesel_error(&error) {
        DieselFault::Connection(message) => ExercisePersistenceError::connection(message),
        DieselFault::Query(message) => ExercisePersistenceError::query(message),
        DieselFault::UniqueViolation => ExercisePersistenceError::query("duplicate exercise id"),
    }
}

fn row_to_exercise(row: ExerciseRow) -> Result<Exercise, ExercisePersistenceError> {
    let invalid = |reason: String| {
        warn!(exercise_id = %row.id, %reason, "stored exercise failed validation");
        ExercisePersistenceError::query("stored exercise is invalid")
    };
    let description = Description::new(&row.description).map_err(|err| invalid(err.to_string()))?;
    let duration = DurationMinutes::try_from(i64::from(row.duration))
        .map_err(|err| invalid(err.to_string()))?;

    Ok(Exercise {
        id: ExerciseId::from_uuid(row.id),
        user_id: UserId::from_uuid(row.user_id),
        description,
        duration,
        date: row.date,
    })
}

fn exercise_to_row(exercise: &Exercise) -> Result<NewExerciseRow<'_>, ExercisePersistenceError> {
    let duration = i32::try_from(exercise.duration.get())
        .map_err(|_| ExercisePersistenceError::query("duration exceeds column range"))?;
    Ok(NewExerciseRow {
        id: *exercise.id.as_uuid(),
        user_id: *exercise.user_id.as_uuid(),
        description: exercise.description.as_ref(),
        duration,
        date: exercise.date,
    })
}

#[async_trait]
impl ExerciseRepository for DieselExerciseRepository {
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError> {
        let row = exercise_to_row(exercise)?;
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ExercisePersistenceError::connection))?;

        diesel::insert_into(exercises::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ExercisePersistenceError::connection))?;

        let mut query = exercises::table
            .filter(exercises::user_id.eq(user_id.as_uuid()))
            .select(ExerciseRow::as_select())
            .order((exercises::date.asc(), exercises::created_at.asc()))
            .into_boxed::<diesel::pg::Pg>();
        if let Some(from) = filter.from {
            query = query.filter(exercises::date.ge(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(exercises::date.le(to));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(i64::from(limit));
        }

        query
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_iter()
            .map(row_to_exercise)
            .collect()
    }
}
