//! User CRUD handlers.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::{UserRequest, UserResponse};
use crate::services::UserService;
use crate::validators::{parse_user_id, UserKey};

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in id order", body = [UserResponse])
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users: Vec<UserResponse> = user_service
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    debug!("Listing {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

/// Get a user by id or by name
///
/// A segment made only of digits is looked up as an id, anything else as a name.
#[utoipa::path(
    get,
    path = "/users/{key}",
    tag = "Users",
    params(
        ("key" = String, Path, description = "User id (digits) or user name")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Id is not a positive integer", body = crate::models::ErrorBody),
        (status = 404, description = "User not found", body = crate::models::ErrorBody)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user = match UserKey::parse(&path.into_inner())? {
        UserKey::Id(id) => {
            debug!("Fetching user with id: {}", id);
            user_service.get_user_by_id(id).await?
        }
        UserKey::Name(name) => {
            debug!("Fetching user with name: {}", name);
            user_service.get_user_by_name(&name).await?
        }
    };

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorBody),
        (status = 409, description = "Email already registered", body = crate::models::ErrorBody)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    validate(&body, "create user")?;

    let user = user_service.create_user(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Update a user's email, names, phone and birth
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorBody),
        (status = 404, description = "User not found", body = crate::models::ErrorBody),
        (status = 409, description = "Email already registered", body = crate::models::ErrorBody)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path.into_inner())?;
    validate(&body, "update user")?;

    info!("Updating user: {}", user_id);
    let user = user_service.update_user(user_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// Delete a user and return the deleted record
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 400, description = "Id is not a positive integer", body = crate::models::ErrorBody),
        (status = 404, description = "User not found", body = crate::models::ErrorBody)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = parse_user_id(&path.into_inner())?;

    info!("Deleting user: {}", user_id);
    let user = user_service.delete_user(user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

fn validate(body: &UserRequest, action: &str) -> Result<(), ApiError> {
    body.validate().map_err(|e| {
        let err = ApiError::from(e);
        warn!("Validation failed for {}: {}", action, err);
        err
    })
}
