//! Driving port for reading a user's exercise log.

use async_trait::async_trait;

use crate::domain::{Error, ExerciseLog};

/// Unvalidated query parameters for [`ExerciseLogQuery::get_log`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    pub user_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Domain use-case port for compiling exercise logs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Return the user's exercises within the requested bounds, oldest first.
    async fn get_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error>;
}
