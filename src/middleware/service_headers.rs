//! Static headers stamped on every response.

use actix_web::http::header::HeaderValue;
use actix_web::middleware::DefaultHeaders;

pub const SERVICE_NAME_HEADER: &str = "x-service-name";

/// `DefaultHeaders` carrying the configured service name.
pub fn service_headers(service_name: HeaderValue) -> DefaultHeaders {
    DefaultHeaders::new().add((SERVICE_NAME_HEADER, service_name))
}
