//! Extractor configuration routing decode failures through the domain error.
//!
//! Actix answers malformed JSON and unparsable path segments with its own
//! responses by default. These configs turn both into
//! [`Error::invalid_request`] so clients get a 400 with the decoder message.

use actix_web::{HttpRequest, error, web};
use tracing::debug;

use crate::domain::Error;

/// JSON body config: any decode failure becomes a 400.
///
/// The request `Content-Type` is not checked; bodies are decoded as JSON
/// regardless of what the client declares, or whether it declares anything.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|_| true)
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// Path config: a non-integer `{id}` becomes a 400.
#[must_use]
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match err {
        error::JsonPayloadError::Deserialize(inner) => inner.to_string(),
        other => other.to_string(),
    };
    debug!(%message, "rejected request body");
    Error::invalid_request(message).into()
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "actix fixes the error handler signature"
)]
fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected path parameter");
    Error::invalid_request(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    fn json_errors_are_bad_requests() {
        let req = TestRequest::default().to_http_request();
        let err = json_error_handler(error::JsonPayloadError::ContentType, &req);
        assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST);
    }
}
