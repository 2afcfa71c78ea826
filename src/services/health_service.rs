//! Storage liveness probe.

use log::error;
use sqlx::SqlitePool;

use crate::constants::{
    CODE_DATABASE_UNAVAILABLE, ERR_DATABASE_CONNECTION, ERR_DATABASE_MISCONFIGURED,
};
use crate::errors::ApiError;

pub struct HealthService {
    pool: SqlitePool,
}

impl HealthService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run `SELECT 1` against the pool.
    pub async fn check(&self) -> Result<(), ApiError> {
        let result = sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_optional(&self.pool)
            .await;

        match result {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                error!("Health check query returned no rows");
                Err(ApiError::InternalServerError {
                    code: CODE_DATABASE_UNAVAILABLE.to_string(),
                    message: ERR_DATABASE_MISCONFIGURED.to_string(),
                })
            }
            Err(e) => {
                error!("Health check query failed: {}", e);
                Err(ApiError::InternalServerError {
                    code: CODE_DATABASE_UNAVAILABLE.to_string(),
                    message: ERR_DATABASE_CONNECTION.to_string(),
                })
            }
        }
    }
}
