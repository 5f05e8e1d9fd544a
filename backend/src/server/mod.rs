//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use users_service::ApiDoc;
use users_service::inbound::http::health::{HealthState, live, ready};
use users_service::inbound::http::state::HttpState;
use users_service::inbound::http::users;
use users_service::outbound::persistence::DieselUserRepository;
use users_service::{JsonContentType, Trace};

/// Assemble the application.
///
/// `JsonContentType` wraps an empty-prefix scope holding the API routes and
/// the fallback 404, so the debug-only Swagger UI registered ahead of it keeps
/// its own asset content types.
fn build_app(
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
    let api = web::scope("")
        .wrap(JsonContentType)
        .configure(users::configure)
        .service(ready)
        .service(live)
        .default_service(web::to(|| async { HttpResponse::NotFound().finish() }));

    let base = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace);

    #[cfg(debug_assertions)]
    let with_docs = base.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    #[cfg(not(debug_assertions))]
    let with_docs = base;

    with_docs.service(api)
}

/// Construct the Actix HTTP server backed by the Diesel user repository.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = web::Data::new(HttpState::new(Arc::new(DieselUserRepository::new(
        db_pool,
    ))));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
