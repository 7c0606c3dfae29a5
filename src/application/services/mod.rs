//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Registration, login, JWT access tokens
//! - **UserService**: Account reads, partial updates and deletion
//! - **MessageService**: Message CRUD operations

pub mod auth_service;
pub mod message_service;
pub mod user_service;

// Re-export auth service types
pub use auth_service::{AuthError, AuthService, AuthServiceImpl, Claims, TokenIssuer};

// Re-export user service types
pub use user_service::{UpdateUserDto, UserError, UserService, UserServiceImpl};

// Re-export message service types
pub use message_service::{
    CreateMessageDto, MessageError, MessageQueryDto, MessageService, MessageServiceImpl,
};
