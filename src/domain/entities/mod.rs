//! # Domain Entities
//!
//! Core domain entities, each mapping directly to a database table.
//!
//! - **User**: account with credentials and profile
//! - **Message**: a chat message grouped by session
//!
//! Each entity has an associated repository trait defining data access
//! operations. These traits are implemented in the infrastructure layer.

mod message;
mod user;

pub use message::{Message, MessageFilter, MessageRepository, MAX_CONTENT_LENGTH};
pub use user::{User, UserChanges, UserRepository};

#[cfg(test)]
pub use message::MockMessageRepository;
#[cfg(test)]
pub use user::MockUserRepository;
