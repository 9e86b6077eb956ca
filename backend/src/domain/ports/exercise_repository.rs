//! Port abstraction for exercise persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Exercise, LogFilter, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by exercise repository adapters.
    pub enum ExercisePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "exercise repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "exercise repository query failed: {message}",
    }
}

/// Storage for recorded exercises.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Insert a new exercise. The owning user is validated by the caller.
    async fn insert(&self, exercise: &Exercise) -> Result<(), ExercisePersistenceError>;

    /// Fetch a user's exercises matching `filter`.
    ///
    /// Results are sorted ascending by date (ties keep insertion order) and
    /// truncated to `filter.limit` after sorting.
    async fn find_for_user(
        &self,
        user_id: &UserId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, ExercisePersistenceError>;
}
