//! Validation Utilities

use validator::ValidationErrors;

use super::error::{AppError, ErrorCode};

/// Convert validation errors to a 400 carrying `code`.
///
/// The message of the first field error is used, falling back to a generic
/// text when the field carries none.
pub fn validation_error(errors: ValidationErrors, code: ErrorCode) -> AppError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: invalid value", field))
            })
        })
        .next()
        .unwrap_or_else(|| "Validation failed".into());

    AppError::bad_request(code, message)
}
