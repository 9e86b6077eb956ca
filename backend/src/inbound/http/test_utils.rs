//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::Value;

use crate::domain::ports::{
    MockExerciseLogQuery, MockExercisesCommand, MockUsersCommand, MockUsersQuery,
};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;

/// Driving-port mocks with no expectations; any unexpected call panics.
#[derive(Default)]
pub struct MockPorts {
    pub users: MockUsersCommand,
    pub users_query: MockUsersQuery,
    pub exercises: MockExercisesCommand,
    pub exercise_log: MockExerciseLogQuery,
}

impl MockPorts {
    /// Build an application serving the API scope over these mocks.
    pub fn into_app(
        self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState {
            users: Arc::new(self.users),
            users_query: Arc::new(self.users_query),
            exercises: Arc::new(self.exercises),
            exercise_log: Arc::new(self.exercise_log),
        };
        App::new()
            .app_data(web::Data::new(state))
            .service(api_scope())
    }
}

/// Read a response body as JSON.
pub async fn read_json<B>(response: ServiceResponse<B>) -> Value
where
    B: MessageBody,
{
    let body = test::read_body(response).await;
    serde_json::from_slice(&body).expect("json body")
}
