//! Shared helpers for HTTP behaviour tests.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;

use exercise_tracker::inbound::http::health::HealthState;
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::InMemoryStore;
use exercise_tracker::server::build_app;

/// Clock pinned late on 2024-05-17 UTC, so local-time mistakes roll the day.
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 23, 45, 0)
            .single()
            .expect("valid fixture timestamp")
    }
}

/// Application over a fresh in-memory store and [`FixtureClock`].
pub fn tracker_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let store = Arc::new(InMemoryStore::new());
    let state = HttpState::from_repositories(store.clone(), store, Arc::new(FixtureClock));
    let health = HealthState::new();
    health.mark_ready();
    build_app(web::Data::new(health), web::Data::new(state))
}

/// Send a request and decode the JSON response body.
pub async fn send<S, R, B>(app: &S, request: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, request).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

/// Register `username` and return the new user's id.
pub async fn create_user<S, B>(app: &S, username: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({ "username": username }))
        .to_request();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::OK, "create user failed: {body}");
    body["id"].as_str().expect("user id").to_owned()
}
