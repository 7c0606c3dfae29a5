//! User Repository Implementation
//!
//! SQLite implementation of the UserRepository trait.
//! Maps between the database schema and domain User entity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::{User, UserRepository};
use crate::infrastructure::database::with_transaction;
use crate::shared::error::{AppError, ErrorCode};

const USER_COLUMNS: &str =
    "id, email, password_hash, first_name, last_name, is_user, created_at, updated_at";

/// Database row representation matching the users table schema.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    password_hash: String,
    first_name: Option<String>,
    last_name: Option<String>,
    is_user: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert database row to domain User entity.
    fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            is_user: self.is_user,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// SQLite user repository implementation.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new SqliteUserRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn list_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_user()).collect())
    }

    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, first_name, last_name, is_user, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.is_user)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => AppError::Conflict(
                ErrorCode::DuplicateEmail,
                "user already exists".to_string(),
            ),
            _ => AppError::Database(e),
        })?;

        Ok(user.clone())
    }

    /// Write the mutable columns and read the row back in one transaction.
    async fn update(&self, user: &User) -> Result<User, AppError> {
        with_transaction(&self.pool, |mut tx| async move {
            let result = sqlx::query(
                r#"
                UPDATE users
                SET email = ?,
                    password_hash = ?,
                    first_name = ?,
                    last_name = ?,
                    updated_at = ?
                WHERE id = ?
                "#,
            )
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.updated_at)
            .bind(&user.id)
            .execute(tx.conn())
            .await?;

            if result.rows_affected() == 0 {
                return Err(AppError::NotFound("User not found".to_string()));
            }

            let row = sqlx::query_as::<_, UserRow>(&format!(
                "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
            ))
            .bind(&user.id)
            .fetch_one(tx.conn())
            .await?;

            Ok::<_, AppError>((row.into_user(), tx))
        })
        .await
    }

    /// Delete a user and, in the same transaction, every message they wrote.
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        with_transaction(&self.pool, |mut tx| async move {
            let messages = sqlx::query("DELETE FROM messages WHERE user_id = ?")
                .bind(id)
                .execute(tx.conn())
                .await?;

            let result = sqlx::query("DELETE FROM users WHERE id = ?")
                .bind(id)
                .execute(tx.conn())
                .await?;

            if result.rows_affected() == 0 {
                tx.rollback().await?;
                return Err(AppError::NotFound("User not found".to_string()));
            }

            tracing::debug!(
                user_id = %id,
                messages_removed = messages.rows_affected(),
                "User deleted"
            );
            Ok::<_, AppError>(((), tx))
        })
        .await
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
