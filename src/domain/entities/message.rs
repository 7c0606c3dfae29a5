//! Message entity and repository trait.
//!
//! Maps to the `messages` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::Pagination;
use crate::shared::error::AppError;

/// Maximum message length in characters.
pub const MAX_CONTENT_LENGTH: usize = 512;

/// Represents a chat message within a session.
///
/// Maps to the `messages` table:
/// - id: TEXT PRIMARY KEY (UUIDv4)
/// - session_id: VARCHAR(60) NOT NULL
/// - user_id: VARCHAR(60) NOT NULL REFERENCES users(id)
/// - content: VARCHAR(512) NOT NULL
/// - timestamp: TEXT NOT NULL
/// - created_at: TEXT NOT NULL
/// - updated_at: TEXT NOT NULL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// UUIDv4 (primary key)
    pub id: String,

    /// Conversation the message belongs to
    pub session_id: String,

    /// Author user ID
    pub user_id: String,

    /// Message content (up to 512 characters)
    pub content: String,

    /// When the message was sent, as reported by the caller
    pub timestamp: DateTime<Utc>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Build a new message with a generated id.
    pub fn new(
        session_id: String,
        user_id: String,
        content: String,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            session_id,
            user_id,
            content,
            timestamp: timestamp.unwrap_or(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the content and refresh `updated_at`.
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// Conjunctive filters for listing messages. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFilter {
    pub session_id: Option<String>,
    pub user_id: Option<String>,
}

/// Repository trait for Message data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find a message by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Message>, AppError>;

    /// Messages matching `filter`, ascending by `timestamp`.
    async fn list(
        &self,
        filter: &MessageFilter,
        pagination: Pagination,
    ) -> Result<Vec<Message>, AppError>;

    /// Create a new message.
    async fn create(&self, message: &Message) -> Result<Message, AppError>;

    /// Update a message (content only).
    async fn update(&self, message: &Message) -> Result<Message, AppError>;

    /// Delete a message.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
