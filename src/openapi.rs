use utoipa::OpenApi;

use crate::models::{ErrorBody, MessageResponse, UploadResponse, UserRequest, UserResponse};

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        description = "CRUD REST API for users, with a bounded file upload endpoint.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Banner and database health check"),
        (name = "Users", description = "User CRUD operations"),
        (name = "Files", description = "File uploads")
    ),
    paths(
        crate::handlers::root,
        crate::handlers::healthchecker,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::handlers::upload_file
    ),
    components(
        schemas(
            UserRequest,
            UserResponse,
            MessageResponse,
            UploadResponse,
            ErrorBody
        )
    )
)]
pub struct ApiDoc;
