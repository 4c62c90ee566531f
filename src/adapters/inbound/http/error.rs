use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{
    adapters::inbound::http::dto::ErrorResponseDto,
    domain::errors::{StorageError, ValidationError},
};

/// Message returned when an upload carries no `file` part
pub const MISSING_FILE_MESSAGE: &str = "No file found in request (expected multipart field 'file')";

/// Every failed request ends here and is rendered as `{success: false, error}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn missing_file() -> Self {
        Self::bad_request(MISSING_FILE_MESSAGE)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        let status = match &err {
            StorageError::Validation(_) => StatusCode::BAD_REQUEST,
            StorageError::InvalidObjectSize { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            StorageError::InvalidStoredKey { .. } | StorageError::StorageBackendError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self::new(status, err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        // 413 when the body limit tripped, 400 for malformed bodies
        Self::new(err.status(), err.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(_: MultipartRejection) -> Self {
        Self::missing_file()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.message, "request failed");
        }
        (self.status, Json(ErrorResponseDto::new(self.message))).into_response()
    }
}
