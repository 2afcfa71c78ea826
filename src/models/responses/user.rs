//! User response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "John")]
    pub name: String,
    #[schema(example = "Doe")]
    pub second_name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "+1234567890")]
    pub phone: String,
    #[schema(example = "1990-01-15")]
    pub birth: String,
    pub notes: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            second_name: user.second_name,
            email: user.email,
            phone: user.phone,
            birth: user.birth,
            notes: user.notes,
        }
    }
}
