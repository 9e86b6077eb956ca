//! HTTP adapter mapping for domain errors.
//!
//! The domain error type stays HTTP agnostic; this module decides status
//! codes and keeps storage details out of response bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of any internal failure.
pub const REDACTED_MESSAGE: &str = "Server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        // Lookup misses share 400 with validation failures; clients rely on it.
        ErrorCode::InvalidRequest | ErrorCode::Duplicate | ErrorCode::NotFound => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    match error.code() {
        ErrorCode::InternalError => Error::internal(REDACTED_MESSAGE),
        _ => error.clone(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            let trace_id = TraceId::current().map(|id| id.to_string());
            error!(
                trace_id = trace_id.as_deref().unwrap_or("-"),
                message = self.message(),
                details = ?self.details(),
                "request failed with internal error"
            );
        }
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}
