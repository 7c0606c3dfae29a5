//! # Domain Services
//!
//! Domain services encapsulate business rules that don't naturally belong to
//! a single entity.
//!
//! ## Services
//!
//! - **MessageValidationService**: Message content validation rules

mod message_validation_service;

pub use message_validation_service::*;
