//! HTTP adapter mapping for domain errors.
//!
//! Error bodies are the bare error message, not a JSON envelope, while the
//! `Content-Type` header still says `application/json` like every other
//! response from this service.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            let trace_id = TraceId::current().map(|id| id.to_string());
            error!(?trace_id, message = self.message(), "request failed");
        }

        HttpResponse::build(status)
            .insert_header(ContentType::json())
            .body(self.message().to_owned())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
