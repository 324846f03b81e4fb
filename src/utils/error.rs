//! Error types and handling
//!
//! Every handler error is converted to a JSON body of the form
//! `{"type": ..., "message": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Lookup by key found no record (404)
    #[error("{entity} with id {id} not found")]
    EntityNotFound { entity: &'static str, id: String },

    /// Route or resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed parameters or body (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Caller is anonymous or lacks the required role (403)
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn entity_not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::EntityNotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        AppError::Forbidden(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// HTTP status, exception-style type name, and whether to log
    fn classify(&self) -> (StatusCode, &'static str, bool) {
        match self {
            AppError::EntityNotFound { .. } => (StatusCode::NOT_FOUND, "NotFoundException", false),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFoundException", false),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BadRequestException", false),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "AccessDeniedException", false),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError", true),
        }
    }
}

/// Error response body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Error type identifier
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, should_log) = self.classify();

        if should_log {
            error!(error = %self, error_type = error_type, "Request error");
        }

        let body = ErrorResponse::new(error_type, self.to_string());

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
