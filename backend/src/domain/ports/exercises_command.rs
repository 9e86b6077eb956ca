//! Driving port for recording exercises.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Error, Exercise, User};

/// Unvalidated input for [`ExercisesCommand::add_exercise`].
///
/// Body fields stay as raw JSON so integers may arrive as numbers or strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddExerciseRequest {
    pub user_id: String,
    pub description: Option<Value>,
    pub duration: Option<Value>,
    pub date: Option<Value>,
}

/// Result of a successful [`ExercisesCommand::add_exercise`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseResponse {
    pub user: User,
    pub exercise: Exercise,
}

/// Domain use-case port for attaching exercises to users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExercisesCommand: Send + Sync {
    /// Validate the fields, resolve the owner, and persist the exercise.
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<AddExerciseResponse, Error>;
}
