//! Repository Implementations
//!
//! SQLite implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - User account management
//! - **MessageRepository** - Message CRUD with filtered offset pagination
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::SqlitePool;
//! use crate::infrastructure::repositories::{SqliteMessageRepository, SqliteUserRepository};
//!
//! async fn setup_repositories(pool: SqlitePool) {
//!     let user_repo = SqliteUserRepository::new(pool.clone());
//!     let message_repo = SqliteMessageRepository::new(pool);
//! }
//! ```

pub mod message_repository;
pub mod user_repository;

pub use message_repository::SqliteMessageRepository;
pub use user_repository::SqliteUserRepository;
