//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_EMAIL_EXISTS: &str = "EMAIL_EXISTS";
pub const CODE_INVALID_USER_ID: &str = "INVALID_USER_ID";

// File errors
pub const CODE_INVALID_FILE_NAME: &str = "INVALID_FILE_NAME";
pub const CODE_FILE_TOO_LARGE: &str = "FILE_TOO_LARGE";
pub const CODE_FILE_UPLOAD_FAILED: &str = "FILE_UPLOAD_FAILED";

// Storage errors
pub const CODE_DATABASE_UNAVAILABLE: &str = "DATABASE_UNAVAILABLE";

// Request errors
pub const CODE_INVALID_BODY: &str = "INVALID_BODY";

// Generic errors
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
