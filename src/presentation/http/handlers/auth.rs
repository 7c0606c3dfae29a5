//! Authentication Handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::application::dto::request::{LoginRequest, RegisterRequest};
use crate::application::dto::response::{LoginResponse, LogoutResponse, RegisterResponse};
use crate::application::services::{AuthError, AuthService, AuthServiceImpl};
use crate::infrastructure::repositories::SqliteUserRepository;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::{AppError, ErrorCode};
use crate::shared::validation::validation_error;
use crate::startup::AppState;

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => {
                AppError::Unauthorized(ErrorCode::InvalidCredentials, "invalid credentials".into())
            }
            AuthError::EmailExists => {
                AppError::Conflict(ErrorCode::DuplicateEmail, "user already exists".into())
            }
            AuthError::TokenExpired => AppError::unauthorized("Token expired"),
            AuthError::InvalidToken => AppError::unauthorized("Invalid token"),
            AuthError::Internal(msg) => AppError::Internal(msg),
            AuthError::Storage(e) => e,
        }
    }
}

fn auth_service(state: &AppState) -> AuthServiceImpl<SqliteUserRepository> {
    let user_repo = Arc::new(SqliteUserRepository::new(state.db.clone()));
    AuthServiceImpl::new(user_repo, state.settings.jwt.clone())
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    body.validate()
        .map_err(|e| validation_error(e, ErrorCode::MissingFields))?;
    let RegisterRequest {
        email: Some(email),
        password: Some(password),
        first_name,
        last_name,
    } = body
    else {
        return Err(AppError::bad_request(
            ErrorCode::MissingFields,
            "missing data: email or password",
        ));
    };

    let (user, access_token) = auth_service(&state)
        .register(&email, &password, first_name, last_name)
        .await?;

    let response = RegisterResponse {
        message: "user created",
        user: user.into(),
        access_token,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with credentials
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    body.validate()
        .map_err(|e| validation_error(e, ErrorCode::MissingFields))?;
    let LoginRequest {
        email: Some(email),
        password: Some(password),
    } = body
    else {
        return Err(AppError::bad_request(ErrorCode::MissingFields, "missing data"));
    };

    let (user, access_token) = auth_service(&state).authenticate(&email, &password).await?;

    Ok(Json(LoginResponse {
        message: "user authenticated",
        is_user: user.is_user,
        access_token,
    }))
}

/// Logout. Tokens are stateless, so there is nothing to revoke.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { logout: true })
}
