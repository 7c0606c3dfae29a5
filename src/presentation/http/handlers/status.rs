//! Status Handlers

use axum::Json;

use crate::application::dto::response::StatusResponse;
use crate::shared::error::AppError;

/// Liveness probe
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "OK" })
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
