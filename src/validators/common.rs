//! Common validation utilities for uploads.

use std::path::Path;

use crate::constants::{
    CODE_FILE_TOO_LARGE, CODE_INVALID_FILE_NAME, ERR_INVALID_FILE_NAME,
};
use crate::errors::ApiError;

/// Multipart field that carries the uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Reduce a client-supplied filename to its final path component.
///
/// Rejects names that would not land inside the upload directory.
pub fn validate_upload_filename(raw: &str) -> Result<String, ApiError> {
    let invalid = || ApiError::BadRequest {
        code: CODE_INVALID_FILE_NAME.to_string(),
        message: ERR_INVALID_FILE_NAME.to_string(),
    };

    // Browsers on Windows may send the full client path.
    let last = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    match Path::new(last).file_name().and_then(|name| name.to_str()) {
        Some(name) if !name.trim().is_empty() && name == last => Ok(name.to_string()),
        _ => Err(invalid()),
    }
}

/// Check the running byte count of an upload against the ceiling.
pub fn validate_upload_size(size: usize, max_size: usize) -> Result<(), ApiError> {
    if size > max_size {
        return Err(ApiError::PayloadTooLarge {
            code: CODE_FILE_TOO_LARGE.to_string(),
            message: format!("File size is over the limit: {} bytes", max_size),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_names() {
        assert_eq!(validate_upload_filename("report.pdf").unwrap(), "report.pdf");
        assert_eq!(validate_upload_filename(".hidden").unwrap(), ".hidden");
    }

    #[test]
    fn strips_directories() {
        assert_eq!(
            validate_upload_filename("../../etc/passwd").unwrap(),
            "passwd"
        );
        assert_eq!(
            validate_upload_filename("C:\\Users\\me\\photo.png").unwrap(),
            "photo.png"
        );
    }

    #[test]
    fn rejects_empty_and_dot_names() {
        for raw in ["", "   ", ".", "..", "uploads/", "a/.."] {
            assert!(validate_upload_filename(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(validate_upload_size(1_000_000, 1_000_000).is_ok());
        assert!(matches!(
            validate_upload_size(1_000_001, 1_000_000),
            Err(ApiError::PayloadTooLarge { .. })
        ));
    }
}
