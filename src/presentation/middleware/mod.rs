//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod logging;

pub use auth::{auth_middleware, AuthUser};
pub use logging::create_trace_layer;
