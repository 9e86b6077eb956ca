//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::api_scope;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use state_builders::build_http_state;

/// Assemble the application: tracing middleware, API scope, health probes,
/// and (in debug builds) Swagger UI.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use mockable::DefaultClock;
/// use exercise_tracker::inbound::http::health::HealthState;
/// use exercise_tracker::inbound::http::state::HttpState;
/// use exercise_tracker::outbound::memory::InMemoryStore;
/// use exercise_tracker::server::build_app;
///
/// let store = Arc::new(InMemoryStore::new());
/// let state = HttpState::from_repositories(store.clone(), store, Arc::new(DefaultClock));
/// let _app = build_app(web::Data::new(HealthState::new()), web::Data::new(state));
/// ```
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind an HTTP server for `config` and mark `health_state` ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
