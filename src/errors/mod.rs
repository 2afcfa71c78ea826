use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use std::fmt;
use validator::ValidationErrors;

use crate::constants::{CODE_INTERNAL_ERROR, CODE_VALIDATION_FAILED, ERR_VALIDATION_FAILED};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    PayloadTooLarge { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::Conflict { code, message } => {
                write!(f, "Conflict [{}]: {}", code, message)
            }
            ApiError::PayloadTooLarge { code, message } => {
                write!(f, "Payload Too Large [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::BadRequest { code, message }
            | ApiError::NotFound { code, message }
            | ApiError::Conflict { code, message }
            | ApiError::PayloadTooLarge { code, message }
            | ApiError::InternalServerError { code, message } => ErrorResponse {
                success: false,
                code: code.clone(),
                message: message.clone(),
                errors: None,
            },
            ApiError::ValidationError { code, errors } => ErrorResponse {
                success: false,
                code: code.clone(),
                message: ERR_VALIDATION_FAILED.to_string(),
                errors: Some(errors.clone()),
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        error!("Database error: {}", err);
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        let mut errors: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(_, errs)| {
                errs.iter()
                    .map(|e| e.message.clone().unwrap_or_default().to_string())
            })
            .collect();
        errors.sort();
        ApiError::ValidationError {
            code: CODE_VALIDATION_FAILED.to_string(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    fn not_found() -> ApiError {
        ApiError::NotFound {
            code: "USER_NOT_FOUND".to_string(),
            message: "NOT FOUND".to_string(),
        }
    }

    #[test]
    fn status_codes_follow_variants() {
        assert_eq!(not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::PayloadTooLarge {
                code: "FILE_TOO_LARGE".to_string(),
                message: "too big".to_string(),
            }
            .status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::ValidationError {
                code: CODE_VALIDATION_FAILED.to_string(),
                errors: vec![],
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn display_includes_code() {
        assert_eq!(
            not_found().to_string(),
            "Not Found [USER_NOT_FOUND]: NOT FOUND"
        );
    }

    #[actix_web::test]
    async fn error_body_is_json() {
        let resp = not_found().error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "USER_NOT_FOUND");
        assert_eq!(body["message"], "NOT FOUND");
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn sqlx_errors_become_internal() {
        let err: ApiError = sqlx::Error::PoolClosed.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
