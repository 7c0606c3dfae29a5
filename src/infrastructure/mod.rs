//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - SQLite connection pool and migrations
//! - Repository implementations of the domain traits

pub mod database;
pub mod repositories;
