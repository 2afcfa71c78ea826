//! User-related request models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or updating a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    /// First name (max 150 characters)
    #[validate(length(max = 150, message = "Name must be at most 150 characters"))]
    #[schema(example = "John")]
    pub name: String,
    /// Second name (max 150 characters)
    #[validate(length(max = 150, message = "Second name must be at most 150 characters"))]
    #[schema(example = "Doe")]
    pub second_name: String,
    /// Unique email address
    #[validate(
        email(message = "Invalid email format"),
        length(max = 150, message = "Email must be at most 150 characters")
    )]
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Phone number (free-form)
    #[validate(length(max = 150, message = "Phone must be at most 150 characters"))]
    #[schema(example = "+1234567890")]
    pub phone: String,
    /// Birth date (free-form)
    #[validate(length(max = 150, message = "Birth must be at most 150 characters"))]
    #[schema(example = "1990-01-15")]
    pub birth: String,
    /// Free-form notes
    #[validate(length(max = 150, message = "Notes must be at most 150 characters"))]
    #[schema(example = "Prefers email contact")]
    pub notes: String,
}
