//! User Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::application::dto::request::UpdateUserRequest;
use crate::application::dto::response::{UpdateUserResponse, UserResponse};
use crate::application::services::{UserError, UserService, UserServiceImpl};
use crate::infrastructure::repositories::SqliteUserRepository;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::startup::AppState;

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound => AppError::NotFound("User not found".into()),
            UserError::Storage(e) => e,
        }
    }
}

fn user_service(state: &AppState) -> UserServiceImpl<SqliteUserRepository> {
    UserServiceImpl::new(Arc::new(SqliteUserRepository::new(state.db.clone())))
}

/// List every user
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = user_service(&state).list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = user_service(&state).get_user(&user_id).await?;
    Ok(Json(user.into()))
}

/// Update the allowed fields of a user.
///
/// A missing user is reported before a malformed body.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<JsonBody<UpdateUserRequest>, AppError>,
) -> Result<Json<UpdateUserResponse>, AppError> {
    let service = user_service(&state);
    service.get_user(&user_id).await?;

    let JsonBody(body) = body?;
    let user = service.update_user(&user_id, body.into()).await?;

    Ok(Json(UpdateUserResponse {
        message: "user updated",
        user: user.into(),
    }))
}

/// Delete a user and their messages
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    user_service(&state).delete_user(&user_id).await?;
    Ok(Json(serde_json::json!({})))
}
