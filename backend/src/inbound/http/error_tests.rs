//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::header::CONTENT_TYPE;
use rstest::rstest;

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

#[rstest]
#[case(Error::not_found("User not found"))]
#[case(Error::internal("pq: relation \"users\" does not exist"))]
#[case(Error::invalid_request("expected value at line 1 column 1"))]
#[actix_web::test]
async fn error_body_is_the_raw_message(#[case] err: Error) {
    let response = ResponseError::error_response(&err);
    assert_eq!(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    assert_eq!(
        std::str::from_utf8(&bytes).expect("utf8 body"),
        err.message()
    );
}
