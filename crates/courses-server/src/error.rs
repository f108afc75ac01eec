//! API Error Types
//!
//! Maps domain errors to HTTP status codes with a JSON body carrying a
//! machine-readable code. Store failures are logged, never echoed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use courses::DomainError;

/// JSON error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g. "NOT_FOUND", "COURSE_ALREADY_HAS_MAIN_TEACHER")
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("not found: {0}")]
    NotFound(String),

    /// 400, with a reason code
    #[error("bad request: {message}")]
    BadRequest { code: String, message: String },

    /// 500; message is logged but not returned
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            DomainError::Conflict(reason) => ApiError::BadRequest {
                code: reason.code().to_string(),
                message: err.to_string(),
            },
            DomainError::Validation(message) => ApiError::BadRequest {
                code: "VALIDATION_ERROR".to_string(),
                message,
            },
            DomainError::Repository(message) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "NOT_FOUND".to_string(), message),
            ApiError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            ApiError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { code, message })).into_response()
    }
}
