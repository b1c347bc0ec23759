//! Request input checks
//!
//! Handlers reject blank text and malformed identifiers before any store
//! call is made.

use uuid::Uuid;

/// Returns the trimmed value, or `None` when it is absent or blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Returns `true` when the candidate is present and a well-formed identifier
pub fn is_valid_identifier(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    !trimmed.is_empty() && Uuid::parse_str(trimmed).is_ok()
}
