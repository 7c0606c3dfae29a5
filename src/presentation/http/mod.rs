//! HTTP API
//!
//! Routes, handlers and extractors for the REST endpoints under `/api/v1`.

pub mod extractors;
pub mod handlers;
pub mod routes;

pub use routes::create_router;
