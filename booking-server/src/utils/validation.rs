//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Limits match
//! the column widths in the schema; SQLite TEXT has no built-in length
//! enforcement, so the check happens here.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest names, document numbers, emails
pub const MAX_NAME_LEN: usize = 100;

/// Guest email addresses
pub const MAX_EMAIL_LEN: usize = 100;

/// Guest document types (e.g. PASSPORT, ID_CARD)
pub const MAX_DOCUMENT_TYPE_LEN: usize = 20;

/// Canonical textual UUID length
pub const UUID_TEXT_LEN: usize = 36;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!(
            "The {field} must not be NULL or EMPTY"
        )));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "The {field} must be lower than {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "The {field} must be lower than {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate that an identifier has the canonical 36-char UUID shape.
///
/// Syntactic parsing happens later in the resolver; this is the cheap
/// field-level check the API applies to request bodies.
pub fn validate_uuid_text(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, UUID_TEXT_LEN)?;
    if value.len() != UUID_TEXT_LEN {
        return Err(AppError::validation(format!(
            "The {field} must have {UUID_TEXT_LEN} characters"
        )));
    }
    Ok(())
}
