//! Offset pagination for message listings.

use std::num::IntErrorKind;

/// Largest page a caller can request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// A clamped `LIMIT`/`OFFSET` pair.
///
/// `limit` always lies in `0..=MAX_PAGE_SIZE` and `offset` is never negative,
/// whatever the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    offset: i64,
}

/// Raised when a pagination parameter is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{param} must be an integer, got {value:?}")]
pub struct PaginationError {
    pub param: &'static str,
    pub value: String,
}

impl Pagination {
    /// Clamp already-parsed values.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(0, MAX_PAGE_SIZE),
            offset: offset.max(0),
        }
    }

    /// Parse raw query-string values. Absent values take the defaults.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Result<Self, PaginationError> {
        let limit = match limit {
            Some(raw) => parse_integer("limit", raw)?,
            None => DEFAULT_PAGE_SIZE,
        };
        let offset = match offset {
            Some(raw) => parse_integer("offset", raw)?,
            None => 0,
        };

        Ok(Self::new(limit, offset))
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

/// Parse a signed integer, saturating on overflow so oversized values clamp
/// like any other out-of-range value.
fn parse_integer(param: &'static str, raw: &str) -> Result<i64, PaginationError> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(PaginationError {
                param,
                value: raw.to_string(),
            }),
        },
    }
}
