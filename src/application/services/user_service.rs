//! User Service
//!
//! Handles user management operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{User, UserChanges, UserRepository};
use crate::shared::error::AppError;
use crate::shared::password::hash_password;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, user_id: &str) -> Result<User, UserError>;

    /// All users
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Apply a partial update
    async fn update_user(&self, user_id: &str, update: UpdateUserDto) -> Result<User, UserError>;

    /// Delete user account together with its messages
    async fn delete_user(&self, user_id: &str) -> Result<(), UserError>;
}

/// Fields a caller may change on an account.
///
/// The password arrives in plaintext and is hashed before it reaches the
/// entity. `Some(None)` clears a profile name.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub password: Option<String>,
}

impl UpdateUserDto {
    fn into_changes(self) -> Result<UserChanges, AppError> {
        let UpdateUserDto {
            email,
            first_name,
            last_name,
            password,
        } = self;

        Ok(UserChanges {
            email,
            first_name,
            last_name,
            password_hash: password.as_deref().map(hash_password).transpose()?,
        })
    }
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error(transparent)]
    Storage(#[from] AppError),
}

/// UserService implementation
pub struct UserServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UserServiceImpl<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn get_user(&self, user_id: &str) -> Result<User, UserError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(self.user_repo.list_all().await?)
    }

    async fn update_user(&self, user_id: &str, update: UpdateUserDto) -> Result<User, UserError> {
        let mut user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)?;

        if !user.apply_changes(update.into_changes()?) {
            return Ok(user);
        }

        let updated = self.user_repo.update(&user).await.map_err(|e| match e {
            AppError::NotFound(_) => UserError::NotFound,
            other => UserError::Storage(other),
        })?;

        tracing::info!(user_id = %updated.id, "User updated");
        Ok(updated)
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), UserError> {
        self.user_repo.delete(user_id).await.map_err(|e| match e {
            AppError::NotFound(_) => UserError::NotFound,
            other => UserError::Storage(other),
        })?;

        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
