//! Exercise recording and log compilation.
//!
//! Every operation validates its raw input before touching storage, then
//! performs at most two sequential store calls: resolve the owning user,
//! followed by either a write or a filtered read.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    AddExerciseRequest, AddExerciseResponse, ExerciseLogQuery, ExerciseLogRequest,
    ExercisePersistenceError, ExerciseRepository, ExercisesCommand, UserRepository,
};
use crate::domain::user_accounts_service::map_user_persistence_error;
use crate::domain::validation::{self, FieldName};
use crate::domain::{Error, Exercise, ExerciseLog, LogFilter, User, UserId};

fn map_exercise_persistence_error(err: ExercisePersistenceError) -> Error {
    match err {
        ExercisePersistenceError::Connection { message } => {
            Error::internal(format!("exercise repository unavailable: {message}"))
        }
        ExercisePersistenceError::Query { message } => {
            Error::internal(format!("exercise repository error: {message}"))
        }
    }
}

/// Exercise service implementing the exercise driving ports.
#[derive(Clone)]
pub struct ExerciseLogService<U, E> {
    users: Arc<U>,
    exercises: Arc<E>,
    clock: Arc<dyn Clock>,
}

impl<U, E> ExerciseLogService<U, E> {
    /// Create a new service.
    ///
    /// `clock` supplies "today" for exercises submitted without a date.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use exercise_tracker::domain::ExerciseLogService;
    /// use exercise_tracker::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let service = ExerciseLogService::new(store.clone(), store, Arc::new(DefaultClock));
    /// # let _ = service;
    /// ```
    pub fn new(users: Arc<U>, exercises: Arc<E>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            exercises,
            clock,
        }
    }
}

impl<U, E> ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    /// Resolve the owner. Malformed identifiers cannot name a stored user, so
    /// they fail the same way as unknown ones.
    async fn resolve_user(&self, raw_id: &str) -> Result<User, Error> {
        let user_id = UserId::new(raw_id).map_err(|_| Error::user_not_found())?;
        self.users
            .find_by_id(&user_id)
            .await
            .map_err(map_user_persistence_error)?
            .ok_or_else(Error::user_not_found)
    }
}

#[async_trait]
impl<U, E> ExercisesCommand for ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<AddExerciseResponse, Error> {
        let description = validation::description(request.description.as_ref())?;
        let duration = validation::duration(request.duration.as_ref())?;
        let today = self.clock.utc().date_naive();
        let date = validation::exercise_date(request.date.as_ref(), today)?;

        let user = self.resolve_user(&request.user_id).await?;
        let exercise = Exercise::record(*user.id(), description, duration, date);
        self.exercises
            .insert(&exercise)
            .await
            .map_err(map_exercise_persistence_error)?;
        debug!(user_id = %user.id(), exercise_id = %exercise.id, "exercise recorded");

        Ok(AddExerciseResponse { user, exercise })
    }
}

#[async_trait]
impl<U, E> ExerciseLogQuery for ExerciseLogService<U, E>
where
    U: UserRepository,
    E: ExerciseRepository,
{
    async fn get_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error> {
        let filter = LogFilter {
            from: validation::date_bound(FieldName::FROM, request.from.as_deref())?,
            to: validation::date_bound(FieldName::TO, request.to.as_deref())?,
            limit: validation::limit(request.limit.as_deref())?,
        };

        let user = self.resolve_user(&request.user_id).await?;
        let entries = self
            .exercises
            .find_for_user(user.id(), &filter)
            .await
            .map_err(map_exercise_persistence_error)?;

        Ok(ExerciseLog { user, entries })
    }
}

#[cfg(test)]
#[path = "exercise_log_service_tests.rs"]
mod tests;
