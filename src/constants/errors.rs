//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "NOT FOUND";
pub const ERR_INVALID_USER_ID: &str = "User id must be a positive integer";
pub const ERR_EMAIL_EXISTS: &str = "User is existing!";

// Upload errors
pub const ERR_NO_UPLOAD_FILE: &str =
    "No file provided. Please upload a file with field name 'file'.";
pub const ERR_INVALID_FILE_NAME: &str = "Invalid file name";
pub const ERR_FAILED_PROCESS_UPLOAD: &str = "Failed to process upload";
pub const ERR_FAILED_READ_FILE: &str = "Failed to read file data";
pub const ERR_FAILED_SAVE_FILE: &str = "Failed to save file";

// Health check errors
pub const ERR_DATABASE_MISCONFIGURED: &str = "Database is not configured correctly";
pub const ERR_DATABASE_CONNECTION: &str = "Error connecting to the database";

// Validation errors
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
