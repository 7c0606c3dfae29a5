//! Request DTOs
//!
//! Data structures for API request bodies and query strings. Unknown fields
//! are ignored. A JSON `null` counts as absent except where a field is read
//! through `nullable`, which tells an explicit `null` apart from a missing
//! key.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::application::services::{CreateMessageDto, MessageQueryDto, UpdateUserDto};

/// `None` for a missing key, `Some(None)` for an explicit `null`.
///
/// Pair with `#[serde(default)]` so that a missing key reaches `Default`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "missing data"),
        length(min = 1, message = "missing data")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "missing data"),
        length(min = 1, message = "missing data")
    )]
    pub password: Option<String>,
}

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "missing data: email or password"),
        length(min = 1, message = "missing data: email or password")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "missing data: email or password"),
        length(min = 1, message = "missing data: email or password")
    )]
    pub password: Option<String>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Update user request
///
/// `null` clears the optional profile names.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub last_name: Option<Option<String>>,
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password: req.password,
        }
    }
}

/// Create message request
#[derive(Debug, Default, Deserialize)]
pub struct CreateMessageRequest {
    pub session_id: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub sender: Option<Option<String>>,
    pub timestamp: Option<String>,
}

impl From<CreateMessageRequest> for CreateMessageDto {
    fn from(req: CreateMessageRequest) -> Self {
        Self {
            session_id: req.session_id,
            content: req.content,
            sender: req.sender,
            timestamp: req.timestamp,
        }
    }
}

/// Update message request
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMessageRequest {
    pub content: Option<String>,
}

/// Query string of `GET /messages`
#[derive(Debug, Default, Deserialize)]
pub struct MessageListQuery {
    pub session_id: Option<String>,
    pub user_id: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl From<MessageListQuery> for MessageQueryDto {
    fn from(query: MessageListQuery) -> Self {
        Self {
            session_id: query.session_id,
            user_id: query.user_id,
            limit: query.limit,
            offset: query.offset,
        }
    }
}
