//! Shared fixtures for unit tests.

use actix_web::web;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::time::Duration;

use crate::db;
use crate::models::UserRequest;
use crate::routes;
use crate::services::{FileService, HealthService, UserService};

/// Fresh in-memory database with the schema applied.
///
/// A single connection that never idles out, since every SQLite in-memory
/// connection is its own database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    db::run_migrations(&pool).await.expect("apply migrations");
    pool
}

pub fn user_request(name: &str, email: &str) -> UserRequest {
    UserRequest {
        name: name.to_string(),
        second_name: "B".to_string(),
        email: email.to_string(),
        phone: "1".to_string(),
        birth: "2000-01-01".to_string(),
        notes: "x".to_string(),
    }
}

/// Register services and routes the same way `main` does.
pub fn app_config(
    pool: SqlitePool,
    upload_dir: PathBuf,
    max_upload_size: usize,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(UserService::new(pool.clone())))
            .app_data(web::Data::new(HealthService::new(pool)))
            .app_data(web::Data::new(FileService::with_upload_dir(
                upload_dir,
                max_upload_size,
            )));
        routes::configure_routes(cfg);
    }
}
