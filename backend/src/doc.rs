//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the five user endpoints, the health probes, and the
//! `User` / `UserPayload` schemas. Swagger UI serves it in debug builds.

use crate::domain::User;
use crate::inbound::http::users_dto::UserPayload;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users service API",
        description = "Create, read, update and delete users stored in PostgreSQL. \
                       Error bodies are plain text even though every response is \
                       labelled application/json."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserPayload)),
    tags(
        (name = "users", description = "User CRUD operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
