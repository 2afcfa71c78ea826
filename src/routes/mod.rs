use actix_web::{error, web, HttpRequest};
use log::warn;

use crate::constants::CODE_INVALID_BODY;
use crate::errors::ApiError;
use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(handlers::root))
        .service(
            web::scope("/users")
                .route("", web::get().to(handlers::get_users))
                .route("", web::post().to(handlers::create_user))
                // Digit-only segments are ids, anything else is a name
                .route("/{key}", web::get().to(handlers::get_user))
                .route("/{id}", web::put().to(handlers::update_user))
                .route("/{id}", web::delete().to(handlers::delete_user)),
        )
        .route("/api/healthchecker", web::get().to(handlers::healthchecker))
        .route("/upload-file/", web::post().to(handlers::upload_file))
        .route("/api-docs/openapi.json", web::get().to(handlers::openapi_json));
}

/// Render JSON body errors in the same shape as every other API error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        warn!("Rejected JSON body: {}", err);
        ApiError::BadRequest {
            code: CODE_INVALID_BODY.to_string(),
            message: err.to_string(),
        }
        .into()
    })
}
