//! Users API handlers.
//!
//! ```text
//! POST   /users       {"name":"Ada","email":"ada@x.com"}
//! GET    /users
//! GET    /users/{id}
//! PUT    /users/{id}  {"name":"Ada","email":"ada@x.com"}
//! DELETE /users/{id}
//! ```
//!
//! Update and delete succeed for ids that do not exist; nothing is persisted
//! in that case.

use actix_web::{HttpResponse, web};

use crate::domain::{User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::extractors::{json_config, path_config};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users_dto::UserPayload;

/// Register the user routes together with their extractor configuration.
///
/// Both paths are registered as resources so a known path hit with an
/// unsupported method answers 405.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_service::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(
            web::resource("/users")
                .route(web::post().to(create_user))
                .route(web::get().to(list_users)),
        )
        .service(
            web::resource("/users/{id}")
                .route(web::get().to(get_user))
                .route(web::put().to(update_user))
                .route(web::delete().to(delete_user)),
        );
}

/// Create a user and return it with its assigned id.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Malformed JSON body", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<User>> {
    let draft = UserDraft::from(payload.into_inner());
    let user = state.users.create(&draft).await?;
    Ok(web::Json(user))
}

/// List every stored user; an empty table yields `[]`.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Storage error", body = String)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Identifier is not an integer", body = String),
        (status = 404, description = "User not found", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    let user = state.users.find(id).await?;
    Ok(web::Json(user))
}

/// Overwrite name and email, echoing the submitted values under the path id.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Submitted values echoed back", body = User),
        (status = 400, description = "Malformed JSON body or identifier", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    let draft = UserDraft::from(payload.into_inner());
    let user = state.users.update(id, &draft).await?;
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Deleted, or no such user"),
        (status = 400, description = "Identifier is not an integer", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    state.users.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
