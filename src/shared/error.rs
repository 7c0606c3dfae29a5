//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every failure leaves the
//! API in the same envelope:
//!
//! ```json
//! { "status": "error", "error": { "code": "NOT_FOUND", "message": "User not found" } }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Machine-readable error codes returned in the `error.code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingFields,
    ContentTooLong,
    InvalidSender,
    ForbiddenContent,
    InvalidTimestamp,
    InvalidPagination,
    InvalidBody,
    InvalidQuery,
    Unauthorized,
    InvalidCredentials,
    NotFound,
    DuplicateEmail,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// Wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingFields => "MISSING_FIELDS",
            Self::ContentTooLong => "CONTENT_TOO_LONG",
            Self::InvalidSender => "INVALID_SENDER",
            Self::ForbiddenContent => "FORBIDDEN_CONTENT",
            Self::InvalidTimestamp => "INVALID_TIMESTAMP",
            Self::InvalidPagination => "INVALID_PAGINATION",
            Self::InvalidBody => "INVALID_BODY",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotFound => "NOT_FOUND",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request ({0}): {1}")]
    BadRequest(ErrorCode, String),

    #[error("Unauthorized ({0}): {1}")]
    Unauthorized(ErrorCode, String),

    #[error("Conflict ({0}): {1}")]
    Conflict(ErrorCode, String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Shorthand for a 400 with the given code.
    pub fn bad_request(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::BadRequest(code, message.into())
    }

    /// Shorthand for a 401 caused by a missing or unusable bearer token.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(ErrorCode::Unauthorized, message.into())
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(..) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(..) => StatusCode::UNAUTHORIZED,
            Self::Conflict(..) => StatusCode::CONFLICT,
            Self::Internal(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code for the response body.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::BadRequest(code, _) | Self::Unauthorized(code, _) | Self::Conflict(code, _) => {
                *code
            }
            Self::Internal(_) => ErrorCode::InternalError,
            Self::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: ErrorBody,
}

/// The `error` object inside [`ErrorResponse`].
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, detail) = match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(_, msg)
            | AppError::Unauthorized(_, msg)
            | AppError::Conflict(_, msg) => (msg, None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ("Internal server error".to_string(), None)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ("Database error".to_string(), Some(e.to_string()))
            }
        };

        let body = ErrorResponse {
            status: "error",
            error: ErrorBody {
                code,
                message,
                detail,
            },
        };

        (status, Json(body)).into_response()
    }
}
