//! # Chat API Library
//!
//! This crate provides a REST API for a chat application with:
//! - User registration, login and account management
//! - Chat messages grouped by session, with content rules
//! - Bearer JWT authentication on message endpoints
//! - SQLite for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core business entities, rules and repository traits
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: Database pool, migrations and repositories
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! chat_api/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities, value objects, and traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database and repository implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, password hashing)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
