//! Exercise recording and log handlers.
//!
//! ```text
//! POST /api/users/{id}/exercises {"description":"run","duration":30,"date":"2024-01-01"}
//! GET /api/users/{id}/logs?from=2024-01-01&to=2024-01-31&limit=10
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{AddExerciseRequest, AddExerciseResponse, ExerciseLogRequest};
use crate::domain::{Error, Exercise, ExerciseLog, format_calendar_date};
use crate::inbound::http::ApiResult;
use crate::inbound::http::payload::{JsonOrForm, into_inner};
use crate::inbound::http::state::HttpState;

/// Body for `POST /api/users/{id}/exercises`.
///
/// `duration` may be a JSON integer or a decimal string; `date` may be
/// omitted for today.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddExerciseBody {
    #[schema(value_type = Option<String>, example = "Morning run")]
    pub description: Option<Value>,
    #[schema(value_type = Option<i32>, example = 30)]
    pub duration: Option<Value>,
    #[schema(value_type = Option<String>, example = "2024-01-01")]
    pub date: Option<Value>,
}

/// A freshly recorded exercise. `id` is the owning user's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ExerciseResponse {
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "Morning run")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: u32,
    #[schema(example = "Mon Jan 01 2024")]
    pub date: String,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
}

impl From<&AddExerciseResponse> for ExerciseResponse {
    fn from(response: &AddExerciseResponse) -> Self {
        let AddExerciseResponse { user, exercise } = response;
        Self {
            username: user.username().to_string(),
            description: exercise.description.as_ref().to_owned(),
            duration: exercise.duration.get(),
            date: format_calendar_date(exercise.date),
            id: user.id().to_string(),
        }
    }
}

/// One entry of a user's log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: u32,
    #[schema(example = "Mon Jan 01 2024")]
    pub date: String,
}

impl From<&Exercise> for LogEntryResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            description: exercise.description.as_ref().to_owned(),
            duration: exercise.duration.get(),
            date: format_calendar_date(exercise.date),
        }
    }
}

/// A user's filtered log, oldest entry first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    pub id: String,
    pub log: Vec<LogEntryResponse>,
}

impl From<&ExerciseLog> for LogResponse {
    fn from(log: &ExerciseLog) -> Self {
        Self {
            username: log.user.username().to_string(),
            count: log.count(),
            id: log.user.id().to_string(),
            log: log.entries.iter().map(LogEntryResponse::from).collect(),
        }
    }
}

/// Query parameters for `GET /api/users/{id}/logs`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub to: Option<String>,
    /// Maximum number of entries, a positive integer.
    pub limit: Option<String>,
}

/// Record an exercise for an existing user.
#[utoipa::path(
    post,
    path = "/api/users/{id}/exercises",
    params(("id" = String, Path, description = "User identifier")),
    request_body = AddExerciseBody,
    responses(
        (status = 200, description = "Exercise recorded", body = ExerciseResponse),
        (status = 400, description = "Invalid field or unknown user", body = Error),
        (status = 500, description = "Storage fault", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
#[post("/users/{id}/exercises")]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonOrForm<AddExerciseBody>,
) -> ApiResult<web::Json<ExerciseResponse>> {
    let AddExerciseBody {
        description,
        duration,
        date,
    } = into_inner(payload);
    let request = AddExerciseRequest {
        user_id: path.into_inner(),
        description,
        duration,
        date,
    };
    let recorded = state.exercises.add_exercise(request).await?;
    Ok(web::Json(ExerciseResponse::from(&recorded)))
}

/// Read a user's exercise log.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    params(("id" = String, Path, description = "User identifier"), LogQuery),
    responses(
        (status = 200, description = "Exercise log", body = LogResponse),
        (status = 400, description = "Invalid parameter or unknown user", body = Error),
        (status = 500, description = "Storage fault", body = Error)
    ),
    tags = ["exercises"],
    operation_id = "getLog"
)]
#[get("/users/{id}/logs")]
pub async fn get_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQuery>,
) -> ApiResult<web::Json<LogResponse>> {
    let LogQuery { from, to, limit } = query.into_inner();
    let request = ExerciseLogRequest {
        user_id: path.into_inner(),
        from,
        to,
        limit,
    };
    let log = state.exercise_log.get_log(request).await?;
    Ok(web::Json(LogResponse::from(&log)))
}

#[cfg(test)]
#[path = "exercises_tests.rs"]
mod tests;
