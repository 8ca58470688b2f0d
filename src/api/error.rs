//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::chart::RenderError;
use crate::dashboard::CallbackError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Callback resolution or input error
    #[error("Callback error: {0}")]
    Callback(#[from] CallbackError),

    /// Figure rendering or snapshot write failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Callback(CallbackError::UnknownOutput(_)) => {
                (StatusCode::NOT_FOUND, "UNKNOWN_OUTPUT")
            }
            ApiError::Callback(CallbackError::MissingInput { .. })
            | ApiError::Callback(CallbackError::InvalidInput { .. }) => {
                (StatusCode::BAD_REQUEST, "INVALID_INPUT")
            }
            ApiError::Callback(CallbackError::DuplicateOutput(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CALLBACK_ERROR")
            }
            ApiError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
