//! Application error types with HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Application-level errors for FloatChat.
#[derive(Error, Debug)]
pub enum AppError {
    // Input errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Float already exists: {0}")]
    DuplicateFloat(String),

    #[error("Measurement references unknown float: {0}")]
    UnknownFloatReference(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    // Lookup errors
    #[error("Float not found: {0}")]
    FloatNotFound(String),

    #[error("No measurements found for float: {0}")]
    ProfileNotFound(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Coarse error taxonomy shared by every store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or duplicate input.
    Validation,
    /// A foreign key that points nowhere.
    Reference,
    /// A lookup miss.
    NotFound,
    Internal,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) | AppError::DuplicateFloat(_) | AppError::BadRequest(_) => {
                ErrorKind::Validation
            }
            AppError::UnknownFloatReference(_) => ErrorKind::Reference,
            AppError::FloatNotFound(_) | AppError::ProfileNotFound(_) => ErrorKind::NotFound,
            AppError::Config(_) => ErrorKind::Internal,
        }
    }

    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::DuplicateFloat(_) => "DUPLICATE_FLOAT",
            AppError::UnknownFloatReference(_) => "UNKNOWN_FLOAT_REFERENCE",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::FloatNotFound(_) => "FLOAT_NOT_FOUND",
            AppError::ProfileNotFound(_) => "PROFILE_NOT_FOUND",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match (self.kind(), self) {
            (_, AppError::DuplicateFloat(_)) => StatusCode::CONFLICT,
            (ErrorKind::Validation, _) => StatusCode::BAD_REQUEST,
            (ErrorKind::Reference, _) => StatusCode::UNPROCESSABLE_ENTITY,
            (ErrorKind::NotFound, _) => StatusCode::NOT_FOUND,
            (ErrorKind::Internal, _) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, code = self.code(), "Request rejected");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "code": self.code(),
        }));
        (status, body).into_response()
    }
}
