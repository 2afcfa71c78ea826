//! User repository for all SQL operations on the `users` table.

use log::debug;
use sqlx::SqlitePool;

use crate::models::{User, UserRequest};

const USER_COLUMNS: &str = "id, name, second_name, email, phone, birth, notes";

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new UserRepository over a shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All users in id order.
    pub async fn find_all(&self) -> Result<Vec<User>, sqlx::Error> {
        debug!("Repository: Listing users");
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        debug!("Repository: Finding user by ID: {}", id);
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find the first user (lowest id) with the given name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<User>, sqlx::Error> {
        debug!("Repository: Finding user by name: {}", name);
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE name = ? ORDER BY id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a new user and return the stored row.
    ///
    /// A duplicate email surfaces as a unique-violation database error.
    pub async fn insert(&self, req: &UserRequest) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (name, second_name, email, phone, birth, notes) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        ))
        .bind(&req.name)
        .bind(&req.second_name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.birth)
        .bind(&req.notes)
        .fetch_one(&self.pool)
        .await
    }

    /// Overwrite the contact fields of a user. `notes` is left as is.
    ///
    /// Returns `None` when no row has the given id.
    pub async fn update(&self, id: i64, req: &UserRequest) -> Result<Option<User>, sqlx::Error> {
        debug!("Repository: Updating user: {}", id);
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET email = ?, name = ?, second_name = ?, phone = ?, birth = ? \
             WHERE id = ? RETURNING {USER_COLUMNS}"
        ))
        .bind(&req.email)
        .bind(&req.name)
        .bind(&req.second_name)
        .bind(&req.phone)
        .bind(&req.birth)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a user and return the removed row.
    pub async fn delete(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        debug!("Repository: Deleting user: {}", id);
        sqlx::query_as::<_, User>(&format!(
            "DELETE FROM users WHERE id = ? RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_pool, user_request};

    #[actix_web::test]
    async fn insert_assigns_sequential_ids() {
        let repo = UserRepository::new(test_pool().await);

        let first = repo.insert(&user_request("A", "a@b.com")).await.unwrap();
        let second = repo.insert(&user_request("C", "c@d.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[actix_web::test]
    async fn duplicate_email_is_unique_violation() {
        let repo = UserRepository::new(test_pool().await);
        repo.insert(&user_request("A", "a@b.com")).await.unwrap();

        let err = repo
            .insert(&user_request("Other", "a@b.com"))
            .await
            .unwrap_err();
        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn find_by_name_returns_lowest_id() {
        let repo = UserRepository::new(test_pool().await);
        let first = repo.insert(&user_request("Sam", "sam1@b.com")).await.unwrap();
        repo.insert(&user_request("Sam", "sam2@b.com")).await.unwrap();

        assert_eq!(repo.find_by_name("Sam").await.unwrap(), Some(first));
        assert_eq!(repo.find_by_name("Nobody").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn update_keeps_notes() {
        let repo = UserRepository::new(test_pool().await);
        let created = repo.insert(&user_request("A", "a@b.com")).await.unwrap();

        let mut change = user_request("Z", "z@b.com");
        change.notes = "ignored".to_string();
        let updated = repo.update(created.id, &change).await.unwrap().unwrap();

        assert_eq!(updated.name, "Z");
        assert_eq!(updated.email, "z@b.com");
        assert_eq!(updated.notes, created.notes);
        assert_eq!(repo.update(99, &change).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn delete_returns_snapshot_once() {
        let repo = UserRepository::new(test_pool().await);
        let created = repo.insert(&user_request("A", "a@b.com")).await.unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(repo.delete(created.id).await.unwrap(), None);
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
    }
}
