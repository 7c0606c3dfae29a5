//! Authentication Middleware
//!
//! JWT validation middleware for protected routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};

use crate::application::services::{AuthError, AuthService, AuthServiceImpl};
use crate::infrastructure::repositories::SqliteUserRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated user extension
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

/// Authentication middleware that validates bearer JWTs.
///
/// The token must name an account that still exists.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Authorization(bearer) = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    let auth_service = AuthServiceImpl::new(
        Arc::new(SqliteUserRepository::new(state.db.clone())),
        state.settings.jwt.clone(),
    );

    let user_id = auth_service
        .validate_token(bearer.token())
        .await
        .map_err(|e| match e {
            AuthError::TokenExpired => AppError::unauthorized("Token expired"),
            AuthError::Storage(e) => e,
            _ => AppError::unauthorized("Invalid token"),
        })?;

    request.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(request).await)
}
