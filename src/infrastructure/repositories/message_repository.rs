//! Message Repository Implementation
//!
//! SQLite implementation of message storage with filtered, offset-paginated
//! listings ordered by message timestamp.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::{Message, MessageFilter, MessageRepository, Pagination};
use crate::infrastructure::database::with_transaction;
use crate::shared::error::AppError;

const MESSAGE_COLUMNS: &str =
    "id, session_id, user_id, content, timestamp, created_at, updated_at";

/// SQLite message repository implementation.
#[derive(Clone)]
pub struct SqliteMessageRepository {
    pool: SqlitePool,
}

impl SqliteMessageRepository {
    /// Creates a new SqliteMessageRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for message queries.
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: String,
    session_id: String,
    user_id: String,
    content: String,
    timestamp: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MessageRow {
    /// Converts database row to domain Message entity.
    fn into_message(self) -> Message {
        Message {
            id: self.id,
            session_id: self.session_id,
            user_id: self.user_id,
            content: self.content,
            timestamp: self.timestamp,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Message>, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_message()))
    }

    /// List messages matching every supplied filter.
    ///
    /// Ties on `timestamp` fall back to insertion order.
    async fn list(
        &self,
        filter: &MessageFilter,
        pagination: Pagination,
    ) -> Result<Vec<Message>, AppError> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {MESSAGE_COLUMNS} FROM messages WHERE 1 = 1"));

        if let Some(session_id) = &filter.session_id {
            query.push(" AND session_id = ").push_bind(session_id.clone());
        }
        if let Some(user_id) = &filter.user_id {
            query.push(" AND user_id = ").push_bind(user_id.clone());
        }

        query
            .push(" ORDER BY timestamp ASC, created_at ASC, rowid ASC LIMIT ")
            .push_bind(pagination.limit())
            .push(" OFFSET ")
            .push_bind(pagination.offset());

        let rows = query
            .build_query_as::<MessageRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_message()).collect())
    }

    async fn create(&self, message: &Message) -> Result<Message, AppError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, session_id, user_id, content, timestamp, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.session_id)
        .bind(&message.user_id)
        .bind(&message.content)
        .bind(message.timestamp)
        .bind(message.created_at)
        .bind(message.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(message.clone())
    }

    /// Only content can be edited; the row is read back in the same
    /// transaction.
    async fn update(&self, message: &Message) -> Result<Message, AppError> {
        with_transaction(&self.pool, |mut tx| async move {
            let result = sqlx::query("UPDATE messages SET content = ?, updated_at = ? WHERE id = ?")
                .bind(&message.content)
                .bind(message.updated_at)
                .bind(&message.id)
                .execute(tx.conn())
                .await?;

            if result.rows_affected() == 0 {
                return Err(AppError::NotFound("Message not found".to_string()));
            }

            let row = sqlx::query_as::<_, MessageRow>(&format!(
                "SELECT {MESSAGE_COLUMNS} FROM messages WHERE id = ?"
            ))
            .bind(&message.id)
            .fetch_one(tx.conn())
            .await?;

            Ok::<_, AppError>((row.into_message(), tx))
        })
        .await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Message not found".to_string()));
        }

        Ok(())
    }
}
