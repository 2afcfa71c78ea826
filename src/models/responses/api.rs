//! Generic API response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain message body used by the root and health endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Welcome to the user service!")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Location of a stored upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    /// Path the file was written to, relative to the working directory
    #[schema(example = "uploads/report.pdf")]
    pub file_path: String,
}

/// Error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always false for errors
    #[schema(example = false)]
    pub success: bool,
    /// Machine-readable error code
    #[schema(example = "USER_NOT_FOUND")]
    pub code: String,
    /// Error message
    #[schema(example = "NOT FOUND")]
    pub message: String,
    /// Detailed validation errors (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}
