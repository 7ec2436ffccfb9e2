//! Input validation helpers
//!
//! Text length limits for order fields and the helpers that enforce them.
//! SQLite TEXT has no built-in length enforcement, so every write path
//! goes through here first.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;

// ── Text length limits ──────────────────────────────────────────────

/// Customer full name
pub const MAX_NAME_LEN: usize = 100;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 20;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Delivery addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// City, product category
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Product names
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Free-form notes
pub const MAX_NOTE_LEN: usize = 1000;

/// Admin passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Admin search terms
pub const MAX_SEARCH_LEN: usize = 100;

// Static pattern, covered by tests
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());

// ── Normalization ───────────────────────────────────────────────────

/// Trim and drop blank strings.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    check_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Loose email shape check (`something@something.something`).
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    check_len(value, field, MAX_EMAIL_LEN)?;
    if !EMAIL_RE.is_match(value) {
        return Err(AppError::validation("Please enter a valid email").with_detail("field", field));
    }
    Ok(())
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn required_text_rejects_blank() {
        let err = validate_required_text("   ", "city", MAX_SHORT_TEXT_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("city"));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let name = "é".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&name, "name", MAX_NAME_LEN).is_ok());
        let name = "é".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&name, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_limits() {
        assert!(validate_optional_text(&None, "notes", 3).is_ok());
        assert!(validate_optional_text(&Some("abc".into()), "notes", 3).is_ok());
        assert!(validate_optional_text(&Some("abcd".into()), "notes", 3).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("ama@example.com", "email").is_ok());
        assert!(validate_email("ama@example", "email").is_err());
        assert!(validate_email("ama example@x.com", "email").is_err());
    }

    #[test]
    fn normalize_drops_blank() {
        assert_eq!(normalize_optional(Some("  ".into())), None);
        assert_eq!(normalize_optional(Some(" x ".into())), Some("x".into()));
        assert_eq!(normalize_optional(None), None);
    }
}
