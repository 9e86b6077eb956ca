//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod exercises;
pub mod health;
pub mod payload;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// The `/api` scope with every resource handler and extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use exercise_tracker::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(payload::json_config())
        .app_data(payload::form_config())
        .app_data(payload::query_config())
        .service(users::create_user)
        .service(users::list_users)
        .service(exercises::add_exercise)
        .service(exercises::get_log)
}
