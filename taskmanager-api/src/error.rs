//! Error handling for the API server.
//!
//! Handlers return `Result<T, ApiError>`; the error converts into an HTTP
//! response with a JSON body. In this domain almost every failure is a
//! missing row, so `NotFound` does most of the work.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Not found (404) — a lookup by identifier yielded no row
    #[error("Not found: {0}")]
    NotFound(String),

    /// Conflict (409) — e.g., duplicate username
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (500)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "not_found")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => match db_err.kind() {
                // Unique constraint violations surface as conflicts; the
                // constraint name stays server-side
                sqlx::error::ErrorKind::UniqueViolation => {
                    if db_err.constraint().is_some_and(|c| c.contains("username")) {
                        ApiError::Conflict("Username already exists".to_string())
                    } else {
                        ApiError::Conflict("Resource already exists".to_string())
                    }
                }
                // A broken reference means the row it pointed at is gone
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    ApiError::NotFound("Referenced resource was not found".to_string())
                }
                _ => ApiError::InternalError(format!("Database error: {}", db_err)),
            },
            _ => ApiError::InternalError(format!("Database error: {}", err)),
        }
    }
}
