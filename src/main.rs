mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

#[cfg(test)]
mod test_support;

use actix_web::http::header::HeaderValue;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use std::io;

use crate::config::CONFIG;
use crate::middleware::{service_headers, ProcessTime};
use crate::services::{FileService, HealthService, UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Opening database...");
    let pool = db::create_pool(&CONFIG).await.map_err(io::Error::other)?;
    db::run_migrations(&pool).await.map_err(io::Error::other)?;

    let user_service = web::Data::new(UserService::new(pool.clone()));
    let health_service = web::Data::new(HealthService::new(pool.clone()));
    let file_service = web::Data::new(FileService::new());

    let service_name = HeaderValue::from_str(&CONFIG.service_name).map_err(io::Error::other)?;

    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(service_headers(service_name.clone()))
            .wrap(ProcessTime)
            .app_data(user_service.clone())
            .app_data(health_service.clone())
            .app_data(file_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await;

    info!("Server stopped, closing database pool");
    pool.close().await;
    result
}
