//! Request body and query extraction shared by the handlers.
//!
//! Bodies may arrive as JSON or as `application/x-www-form-urlencoded`
//! (HTML form posts). Extraction failures are reported with the same JSON
//! error envelope as domain errors.

use actix_web::error::{JsonPayloadError, QueryPayloadError, UrlencodedError};
use actix_web::{Either, HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Body extractor accepting JSON first, then form encoding.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// Unwrap whichever encoding matched.
pub fn into_inner<T>(payload: JsonOrForm<T>) -> T {
    match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

fn malformed(kind: &'static str, reason: String) -> actix_web::Error {
    debug!(kind, %reason, "request extraction failed");
    Error::invalid_request("Request could not be parsed")
        .with_details(json!({ "code": kind, "reason": reason }))
        .into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    malformed("malformed_body", err.to_string())
}

fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    malformed("malformed_body", err.to_string())
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    malformed("malformed_query", err.to_string())
}

/// Extractor configuration rendering failures as JSON errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Form extractor configuration rendering failures as JSON errors.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(form_error)
}

/// Query extractor configuration rendering failures as JSON errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}
