//! Message Service
//!
//! Handles message operations including send, list, edit, delete.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::services::{
    ContentMetadata, ContentViolation, MessageDraft, MessageValidationService,
};
use crate::domain::{Message, MessageFilter, MessageRepository, Pagination, PaginationError};
use crate::shared::error::AppError;

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Validate and store a new message written by `author_id`
    async fn send_message(
        &self,
        author_id: &str,
        request: CreateMessageDto,
    ) -> Result<(Message, ContentMetadata), MessageError>;

    /// List messages matching the query, oldest first
    async fn list_messages(&self, query: MessageQueryDto) -> Result<Vec<Message>, MessageError>;

    /// Replace the content of a message
    async fn edit_message(
        &self,
        message_id: &str,
        content: Option<String>,
    ) -> Result<Message, MessageError>;

    /// Delete a message
    async fn delete_message(&self, message_id: &str) -> Result<(), MessageError>;
}

/// Create message request, as received.
///
/// `sender` keeps an explicit `null` apart from a missing key.
#[derive(Debug, Clone, Default)]
pub struct CreateMessageDto {
    pub session_id: Option<String>,
    pub content: Option<String>,
    pub sender: Option<Option<String>>,
    pub timestamp: Option<String>,
}

/// Message query parameters, as received.
///
/// `limit` and `offset` stay raw so that non-integers can be reported.
#[derive(Debug, Clone, Default)]
pub struct MessageQueryDto {
    pub session_id: Option<String>,
    pub user_id: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl MessageQueryDto {
    fn filter(&self) -> MessageFilter {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        MessageFilter {
            session_id: non_empty(&self.session_id),
            user_id: non_empty(&self.user_id),
        }
    }
}

/// Message service errors
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error(transparent)]
    Invalid(#[from] ContentViolation),

    #[error(transparent)]
    InvalidPagination(#[from] PaginationError),

    #[error("Message not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] AppError),
}

/// MessageService implementation
pub struct MessageServiceImpl<M>
where
    M: MessageRepository,
{
    message_repo: Arc<M>,
}

impl<M> MessageServiceImpl<M>
where
    M: MessageRepository,
{
    pub fn new(message_repo: Arc<M>) -> Self {
        Self { message_repo }
    }
}

#[async_trait]
impl<M> MessageService for MessageServiceImpl<M>
where
    M: MessageRepository + 'static,
{
    async fn send_message(
        &self,
        author_id: &str,
        request: CreateMessageDto,
    ) -> Result<(Message, ContentMetadata), MessageError> {
        let draft = MessageValidationService::validate_draft(MessageDraft {
            session_id: request.session_id.as_deref(),
            content: request.content.as_deref(),
            sender: request.sender.as_ref().map(Option::as_deref),
            timestamp: request.timestamp.as_deref(),
        })?;

        let message = Message::new(
            draft.session_id,
            author_id.to_string(),
            draft.content,
            draft.timestamp,
        );
        let created = self.message_repo.create(&message).await?;
        let metadata = ContentMetadata::compute(&created.content);

        tracing::debug!(
            message_id = %created.id,
            session_id = %created.session_id,
            sender = draft.sender.as_str(),
            "Message created"
        );

        Ok((created, metadata))
    }

    async fn list_messages(&self, query: MessageQueryDto) -> Result<Vec<Message>, MessageError> {
        let pagination = Pagination::parse(query.limit.as_deref(), query.offset.as_deref())?;
        let filter = query.filter();

        Ok(self.message_repo.list(&filter, pagination).await?)
    }

    async fn edit_message(
        &self,
        message_id: &str,
        content: Option<String>,
    ) -> Result<Message, MessageError> {
        let mut message = self
            .message_repo
            .find_by_id(message_id)
            .await?
            .ok_or(MessageError::NotFound)?;

        let Some(content) = content.filter(|c| !c.is_empty()) else {
            return Ok(message);
        };

        MessageValidationService::validate_edit(&content)?;
        message.edit(content);

        self.message_repo.update(&message).await.map_err(|e| match e {
            AppError::NotFound(_) => MessageError::NotFound,
            other => MessageError::Storage(other),
        })
    }

    async fn delete_message(&self, message_id: &str) -> Result<(), MessageError> {
        self.message_repo
            .delete(message_id)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => MessageError::NotFound,
                other => MessageError::Storage(other),
            })
    }
}
