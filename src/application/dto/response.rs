//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::services::ContentMetadata;
use crate::domain::{Message, User};

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Success envelope used by the message endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// `GET /status` body
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// User response. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_user: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_user: user.is_user,
            created_at: format_time(user.created_at),
            updated_at: format_time(user.updated_at),
        }
    }
}

/// Registration response (includes user and token)
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: UserResponse,
    pub access_token: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub is_user: bool,
    pub access_token: String,
}

/// `PUT /users/{id}` body
#[derive(Debug, Serialize)]
pub struct UpdateUserResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub logout: bool,
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub session_id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            session_id: message.session_id,
            user_id: message.user_id,
            content: message.content,
            timestamp: format_time(message.timestamp),
            created_at: format_time(message.created_at),
            updated_at: format_time(message.updated_at),
        }
    }
}

/// A freshly created message with its derived metadata
#[derive(Debug, Serialize)]
pub struct CreatedMessageResponse {
    #[serde(flatten)]
    pub message: MessageResponse,
    pub metadata: ContentMetadata,
}

/// `DELETE /messages/{id}` body
#[derive(Debug, Serialize)]
pub struct DeleteMessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}
