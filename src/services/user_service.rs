//! User service for CRUD operations.

use log::{debug, info, warn};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::constants::{
    CODE_EMAIL_EXISTS, CODE_USER_NOT_FOUND, ERR_EMAIL_EXISTS, ERR_USER_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{User, UserRequest};
use crate::repositories::UserRepository;
use crate::utils::mask_email;

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(pool)),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<User, ApiError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                warn!("User not found with id: {}", id);
                not_found()
            })
    }

    pub async fn get_user_by_name(&self, name: &str) -> Result<User, ApiError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| {
                warn!("User not found with name: {}", name);
                not_found()
            })
    }

    /// Insert a user. The UNIQUE constraint on `email` decides conflicts, so
    /// two racing creates cannot both succeed.
    pub async fn create_user(&self, req: UserRequest) -> Result<User, ApiError> {
        debug!("Creating user with email: {}", mask_email(&req.email));

        let user = self
            .repository
            .insert(&req)
            .await
            .map_err(|e| conflict_on_duplicate_email(e, &req.email))?;

        info!("Created user {}", user.id);
        Ok(user)
    }

    /// Overwrite email, name, second name, phone and birth of an existing user.
    pub async fn update_user(&self, id: i64, req: UserRequest) -> Result<User, ApiError> {
        self.repository
            .update(id, &req)
            .await
            .map_err(|e| conflict_on_duplicate_email(e, &req.email))?
            .ok_or_else(|| {
                warn!("Update failed: User not found with id: {}", id);
                not_found()
            })
    }

    /// Delete a user and return the removed record.
    pub async fn delete_user(&self, id: i64) -> Result<User, ApiError> {
        self.repository.delete(id).await?.ok_or_else(|| {
            warn!("Delete failed: User not found with id: {}", id);
            not_found()
        })
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound {
        code: CODE_USER_NOT_FOUND.to_string(),
        message: ERR_USER_NOT_FOUND.to_string(),
    }
}

fn conflict_on_duplicate_email(err: sqlx::Error, email: &str) -> ApiError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            warn!("Email already registered: {}", mask_email(email));
            ApiError::Conflict {
                code: CODE_EMAIL_EXISTS.to_string(),
                message: ERR_EMAIL_EXISTS.to_string(),
            }
        }
        other => other.into(),
    }
}
