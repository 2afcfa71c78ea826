//! User path-segment validation.

use crate::constants::{CODE_INVALID_USER_ID, ERR_INVALID_USER_ID};
use crate::errors::ApiError;

/// How a `/users/{value}` segment is looked up.
#[derive(Debug, PartialEq, Eq)]
pub enum UserKey {
    Id(i64),
    Name(String),
}

impl UserKey {
    /// Digit-only segments are ids, everything else is a name.
    pub fn parse(segment: &str) -> Result<Self, ApiError> {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            parse_user_id(segment).map(UserKey::Id)
        } else {
            Ok(UserKey::Name(segment.to_string()))
        }
    }
}

/// Parse a path id; it must be a positive integer.
pub fn parse_user_id(segment: &str) -> Result<i64, ApiError> {
    match segment.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ApiError::BadRequest {
            code: CODE_INVALID_USER_ID.to_string(),
            message: ERR_INVALID_USER_ID.to_string(),
        }),
    }
}
