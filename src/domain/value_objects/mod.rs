//! Value Objects
//!
//! Immutable value types with their own invariants.

mod pagination;

pub use pagination::{Pagination, PaginationError, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
