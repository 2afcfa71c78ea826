//! Database connection pool and schema setup.
//!
//! The pool is created once at startup, migrations are applied explicitly
//! before the server accepts requests, and the pool is closed on shutdown.

use log::{debug, info};
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Create the SQLite connection pool described by `config`.
///
/// The database file is created if it does not exist yet.
pub async fn create_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    debug!(
        "Creating database pool: max_connections={}",
        config.db_max_connections
    );

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    info!("Database pool created");
    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(url: &str) -> Config {
        Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            database_url: url.to_string(),
            db_max_connections: 1,
            upload_dir: "uploads".to_string(),
            max_upload_size: 1_000_000,
            service_name: "user-service".to_string(),
        }
    }

    #[actix_web::test]
    async fn creates_database_file_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.db");
        let url = format!("sqlite://{}", path.display());

        let pool = create_pool(&config_for(&url)).await.unwrap();
        run_migrations(&pool).await.unwrap();
        // Applying twice is a no-op.
        run_migrations(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
        assert!(path.exists());

        pool.close().await;
    }
}
