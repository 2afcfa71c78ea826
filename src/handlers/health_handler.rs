//! Root, health check and API document handlers.

use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::{app_banner, MSG_HEALTHY};
use crate::errors::ApiError;
use crate::models::MessageResponse;
use crate::openapi::ApiDoc;
use crate::services::HealthService;

/// Application banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Application name and version", body = MessageResponse)
    )
)]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new(app_banner()))
}

/// Check database connectivity
#[utoipa::path(
    get,
    path = "/api/healthchecker",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = MessageResponse),
        (status = 500, description = "Database unreachable or misconfigured", body = crate::models::ErrorBody)
    )
)]
pub async fn healthchecker(
    health_service: web::Data<HealthService>,
) -> Result<HttpResponse, ApiError> {
    health_service.check().await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_HEALTHY)))
}

/// OpenAPI document for this service.
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
