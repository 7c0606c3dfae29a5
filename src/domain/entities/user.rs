//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a user account in the chat system.
///
/// Maps to the `users` table:
/// - id: TEXT PRIMARY KEY (UUIDv4)
/// - email: VARCHAR(128) NOT NULL UNIQUE
/// - password_hash: VARCHAR(256) NOT NULL
/// - first_name: VARCHAR(128) NULL
/// - last_name: VARCHAR(128) NULL
/// - is_user: BOOLEAN NOT NULL DEFAULT 1
/// - created_at: TEXT NOT NULL
/// - updated_at: TEXT NOT NULL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// UUIDv4 (primary key)
    pub id: String,

    /// Email address (unique)
    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    /// Regular account flag
    pub is_user: bool,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new account with a generated id and fresh timestamps.
    pub fn new(
        email: String,
        password_hash: String,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
            first_name,
            last_name,
            is_user: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, refreshing `updated_at`.
    ///
    /// Returns `false` when `changes` carried nothing to apply.
    pub fn apply_changes(&mut self, changes: UserChanges) -> bool {
        let UserChanges {
            email,
            first_name,
            last_name,
            password_hash,
        } = changes;

        let mut changed = false;
        if let Some(email) = email {
            self.email = email;
            changed = true;
        }
        if let Some(first_name) = first_name {
            self.first_name = first_name;
            changed = true;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
            changed = true;
        }
        if let Some(password_hash) = password_hash {
            self.password_hash = password_hash;
            changed = true;
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}

/// The mutable subset of a [`User`].
///
/// The password is carried already hashed; plaintext never reaches the entity.
/// For the profile names, `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub password_hash: Option<String>,
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// All users, oldest first.
    async fn list_all(&self) -> Result<Vec<User>, AppError>;

    /// Create a new user in the database.
    async fn create(&self, user: &User) -> Result<User, AppError>;

    /// Persist the mutable columns of an existing user.
    async fn update(&self, user: &User) -> Result<User, AppError>;

    /// Delete a user together with their messages.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Check if an email address is already registered.
    async fn email_exists(&self, email: &str) -> Result<bool, AppError>;
}
