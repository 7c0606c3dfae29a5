//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod auth;
pub mod message;
pub mod status;
pub mod user;
