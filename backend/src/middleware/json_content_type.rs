//! Middleware stamping `Content-Type: application/json` on every response.
//!
//! Applies to success bodies, plain-text error bodies, empty 204s, and the
//! router's own 404/405 answers alike. Any content type set further in is
//! overwritten.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{CONTENT_TYPE, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};

/// Middleware forcing a JSON content type on all responses.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_service::JsonContentType;
///
/// let app = App::new().wrap(JsonContentType);
/// ```
#[derive(Clone)]
pub struct JsonContentType;

impl<S, B> Transform<S, ServiceRequest> for JsonContentType
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JsonContentTypeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JsonContentTypeMiddleware { service }))
    }
}

/// Service wrapper produced by [`JsonContentType`].
pub struct JsonContentTypeMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JsonContentTypeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;
            res.response_mut().headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    async fn content_type_for(uri: &str) -> Option<String> {
        let app = test::init_service(
            App::new()
                .wrap(JsonContentType)
                .route(
                    "/text",
                    web::get().to(|| async {
                        HttpResponse::InternalServerError()
                            .content_type("text/plain; charset=utf-8")
                            .body("boom")
                    }),
                )
                .route(
                    "/empty",
                    web::get().to(|| async { HttpResponse::NoContent().finish() }),
                ),
        )
        .await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        res.headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    #[rstest]
    #[case::overrides_text("/text")]
    #[case::fills_empty("/empty")]
    #[case::router_not_found("/missing")]
    #[actix_web::test]
    async fn every_response_is_json(#[case] uri: &str) {
        assert_eq!(
            content_type_for(uri).await.as_deref(),
            Some("application/json")
        );
    }
}
