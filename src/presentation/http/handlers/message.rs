//! Message Handlers

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{
    CreateMessageRequest, MessageListQuery, UpdateMessageRequest,
};
use crate::application::dto::response::{
    ApiResponse, CreatedMessageResponse, DeleteMessageResponse, MessageResponse,
};
use crate::application::services::{MessageError, MessageService, MessageServiceImpl};
use crate::domain::services::ContentViolation;
use crate::infrastructure::repositories::SqliteMessageRepository;
use crate::presentation::http::extractors::{JsonBody, QueryParams};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::{AppError, ErrorCode};
use crate::startup::AppState;

fn violation_code(violation: ContentViolation) -> ErrorCode {
    match violation {
        ContentViolation::MissingFields => ErrorCode::MissingFields,
        ContentViolation::ContentTooLong => ErrorCode::ContentTooLong,
        ContentViolation::InvalidSender => ErrorCode::InvalidSender,
        ContentViolation::ForbiddenContent => ErrorCode::ForbiddenContent,
        ContentViolation::InvalidTimestamp => ErrorCode::InvalidTimestamp,
    }
}

impl From<MessageError> for AppError {
    fn from(e: MessageError) -> Self {
        match e {
            MessageError::Invalid(v) => AppError::bad_request(violation_code(v), v.to_string()),
            MessageError::InvalidPagination(_) => AppError::bad_request(
                ErrorCode::InvalidPagination,
                "Limit and offset must be integers",
            ),
            MessageError::NotFound => AppError::NotFound("Message not found".into()),
            MessageError::Storage(e) => e,
        }
    }
}

fn message_service(state: &AppState) -> MessageServiceImpl<SqliteMessageRepository> {
    MessageServiceImpl::new(Arc::new(SqliteMessageRepository::new(state.db.clone())))
}

/// Create a message authored by the caller
pub async fn create_message(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    JsonBody(body): JsonBody<CreateMessageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedMessageResponse>>), AppError> {
    let (message, metadata) = message_service(&state)
        .send_message(&auth.user_id, body.into())
        .await?;

    let response = CreatedMessageResponse {
        message: message.into(),
        metadata,
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))))
}

/// List messages, optionally filtered by session and author
pub async fn list_messages(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<MessageListQuery>,
) -> Result<Json<ApiResponse<Vec<MessageResponse>>>, AppError> {
    let messages = message_service(&state).list_messages(query.into()).await?;

    let responses: Vec<MessageResponse> = messages.into_iter().map(MessageResponse::from).collect();
    Ok(Json(ApiResponse::success(responses)))
}

/// Replace the content of a message
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    JsonBody(body): JsonBody<UpdateMessageRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    let message = message_service(&state)
        .edit_message(&message_id, body.content)
        .await?;

    Ok(Json(ApiResponse::success(message.into())))
}

/// Delete a message
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
) -> Result<Json<DeleteMessageResponse>, AppError> {
    message_service(&state).delete_message(&message_id).await?;

    Ok(Json(DeleteMessageResponse {
        status: "success",
        message: "Message deleted",
    }))
}
