//! Shared helpers for the users service integration tests.
//!
//! Each file under `backend/tests/` compiles as its own crate and pulls in a
//! subset of these helpers.
#![expect(dead_code, reason = "each integration test crate uses a subset of the helpers")]

mod cluster_skip;

pub use cluster_skip::{handle_cluster_setup_failure, test_database_url};

use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::test;

/// Assert the response is labelled `application/json`.
pub fn assert_json_content_type(response: &ServiceResponse) {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    assert_eq!(content_type, Some("application/json"));
}

/// Read the whole response body as UTF-8 text.
pub async fn body_text(response: ServiceResponse) -> String {
    let bytes = test::read_body(response).await;
    String::from_utf8_lossy(&bytes).into_owned()
}
