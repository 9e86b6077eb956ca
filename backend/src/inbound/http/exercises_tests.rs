//! Tests for exercise handlers.

use super::*;
use crate::domain::{Description, DurationMinutes, User, UserId, Username};
use crate::inbound::http::test_utils::{MockPorts, read_json};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::json;

const USER_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn owner() -> User {
    User::new(
        UserId::new(USER_ID).expect("valid id"),
        Username::new("ada").expect("valid username"),
    )
}

fn exercise(owner: &User, description: &str, minutes: i64, day: u32) -> Exercise {
    Exercise::record(
        *owner.id(),
        Description::new(description).expect("valid description"),
        DurationMinutes::try_from(minutes).expect("valid duration"),
        NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date"),
    )
}

#[rstest]
#[case::json(actix_test::TestRequest::post().set_json(json!({
    "description": "run",
    "duration": "30",
    "date": "2024-01-01",
})))]
#[case::form(actix_test::TestRequest::post().set_form([
    ("description", "run"),
    ("duration", "30"),
    ("date", "2024-01-01"),
]))]
#[actix_web::test]
async fn add_exercise_forwards_raw_fields_and_renders_the_user_id(
    owner: User,
    #[case] request: actix_test::TestRequest,
) {
    let recorded = AddExerciseResponse {
        exercise: exercise(&owner, "run", 30, 1),
        user: owner,
    };
    let mut ports = MockPorts::default();
    ports
        .exercises
        .expect_add_exercise()
        .withf(|request| {
            request.user_id == USER_ID
                && request.description == Some(json!("run"))
                && request.duration == Some(json!("30"))
                && request.date == Some(json!("2024-01-01"))
        })
        .times(1)
        .return_once(move |_| Ok(recorded));
    let app = actix_test::init_service(ports.into_app()).await;

    let uri = format!("/api/users/{USER_ID}/exercises");
    let response = actix_test::call_service(&app, request.uri(&uri).to_request()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({
            "username": "ada",
            "description": "run",
            "duration": 30,
            "date": "Mon Jan 01 2024",
            "id": USER_ID,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn add_exercise_keeps_json_integer_durations() {
    let mut ports = MockPorts::default();
    ports
        .exercises
        .expect_add_exercise()
        .withf(|request| request.duration == Some(json!(30)) && request.date.is_none())
        .times(1)
        .return_once(|_| Err(Error::user_not_found()));
    let app = actix_test::init_service(ports.into_app()).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/users/unknown/exercises")
        .set_json(json!({ "description": "run", "duration": 30 }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "error": "User not found", "code": "not_found" })
    );
}

#[rstest]
#[actix_web::test]
async fn get_log_forwards_query_parameters(owner: User) {
    let log = ExerciseLog {
        entries: vec![exercise(&owner, "walk", 20, 2), exercise(&owner, "swim", 40, 3)],
        user: owner,
    };
    let mut ports = MockPorts::default();
    ports
        .exercise_log
        .expect_get_log()
        .withf(|request| {
            request.user_id == USER_ID
                && request.from.as_deref() == Some("2024-01-02")
                && request.to.is_none()
                && request.limit.as_deref() == Some("2")
        })
        .times(1)
        .return_once(move |_| Ok(log));
    let app = actix_test::init_service(ports.into_app()).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/users/{USER_ID}/logs?from=2024-01-02&limit=2"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({
            "username": "ada",
            "count": 2,
            "id": USER_ID,
            "log": [
                { "description": "walk", "duration": 20, "date": "Tue Jan 02 2024" },
                { "description": "swim", "duration": 40, "date": "Wed Jan 03 2024" },
            ],
        })
    );
}

#[rstest]
#[actix_web::test]
async fn get_log_without_parameters_sends_none() {
    let mut ports = MockPorts::default();
    ports
        .exercise_log
        .expect_get_log()
        .withf(|request| request.from.is_none() && request.to.is_none() && request.limit.is_none())
        .times(1)
        .return_once(|_| Err(Error::invalid_request("Limit must be a positive integer")));
    let app = actix_test::init_service(ports.into_app()).await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/users/{USER_ID}/logs"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
