//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for request handling. Each
//! variant maps to a specific HTTP status code and structured JSON error
//! response. [`StartupError`] covers everything that can stop the process
//! before it starts serving.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::PostId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "Post with id = 7 was not found"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Request-level error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                 |
/// |-----------|------------|-----------------------------|
/// | 1000–1999 | Validation | 422 Unprocessable Entity    |
/// | 2000–2999 | Not Found  | 404 Not Found               |
/// | 3000–3999 | Server     | 500 Internal Server Error   |
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request payload or path failed structural validation.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No post exists with the given ID.
    #[error("Post with id = {0} was not found")]
    PostNotFound(PostId),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::PostNotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::PersistenceError(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PostNotFound(_) => StatusCode::NOT_FOUND,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

/// Errors that abort process startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// A configuration value could not be interpreted.
    #[error("invalid configuration for {key}: {reason}")]
    InvalidConfig {
        /// Environment variable name.
        key: &'static str,
        /// What was wrong with the value.
        reason: String,
    },

    /// The database stayed unreachable for the whole retry budget.
    #[error("database unreachable after {attempts} attempts: {source}")]
    DatabaseUnavailable {
        /// Number of connection attempts made.
        attempts: u32,
        /// Error from the last attempt.
        #[source]
        source: sqlx::Error,
    },

    /// Creating the `posts` table failed.
    #[error("schema setup failed: {0}")]
    Schema(#[source] sqlx::Error),

    /// Binding or serving the HTTP listener failed.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
