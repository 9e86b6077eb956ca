//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP handler and DTO. Swagger UI serves it in
//! debug builds, and `cargo run --bin openapi-dump` exports it for tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::exercises::{
    AddExerciseBody, ExerciseResponse, LogEntryResponse, LogResponse,
};
use crate::inbound::http::users::{CreateUserBody, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Register users, record exercises, and read filtered exercise logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::exercises::add_exercise,
        crate::inbound::http::exercises::get_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserBody,
        UserResponse,
        AddExerciseBody,
        ExerciseResponse,
        LogEntryResponse,
        LogResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "exercises", description = "Exercise recording and logs"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected object schema for {name}"),
        }
    }

    #[rstest]
    #[case("/api/users")]
    #[case("/api/users/{id}/exercises")]
    #[case("/api/users/{id}/logs")]
    #[case("/health/ready")]
    fn paths_are_registered(#[case] path: &str) {
        assert!(ApiDoc::openapi().paths.paths.contains_key(path));
    }

    #[rstest]
    #[case("LogResponse", &["username", "count", "id", "log"])]
    #[case("ExerciseResponse", &["username", "description", "duration", "date", "id"])]
    #[case("Error", &["error", "code"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] expected: &[&str]) {
        let fields = schema_fields(name);
        for field in expected {
            assert!(fields.iter().any(|f| f == field), "{name} lacks {field}");
        }
    }
}
