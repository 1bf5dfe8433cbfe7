//! Centralized validation and helper functions.

use crate::core::types::CHECKSUM_PREFIX;

/// Maximum number of primer records allowed in a single BED file
pub const MAX_RECORDS: usize = 100_000;

/// Length of a hex-encoded SHA-256 digest
pub const SHA256_HEX_LENGTH: usize = 64;

/// Validate that a string is a lowercase hex SHA-256 digest (64 characters).
///
/// # Examples
///
/// ```
/// use primaschema::utils::validation::is_valid_hex_digest;
///
/// assert!(is_valid_hex_digest(&"a".repeat(64)));
/// assert!(!is_valid_hex_digest(&"A".repeat(64)));
/// assert!(!is_valid_hex_digest("b1acd7163146bf17")); // 16 chars
/// ```
#[must_use]
pub fn is_valid_hex_digest(s: &str) -> bool {
    s.len() == SHA256_HEX_LENGTH && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

/// Normalize a checksum string to lowercase with surrounding whitespace removed.
/// Returns None if the input is not `primaschema:` followed by a SHA-256 hex digest.
#[must_use]
pub fn normalize_checksum(s: &str) -> Option<String> {
    let normalized = s.trim().to_lowercase();
    let digest = normalized.strip_prefix(CHECKSUM_PREFIX)?;
    if is_valid_hex_digest(digest) {
        Some(normalized)
    } else {
        None
    }
}

/// Validate a scheme name or version: non-empty, `[a-z0-9_.-]` only.
///
/// # Examples
///
/// ```
/// use primaschema::utils::validation::is_valid_identifier;
///
/// assert!(is_valid_identifier("artic-v4.1"));
/// assert!(!is_valid_identifier("ARTIC"));
/// assert!(!is_valid_identifier(""));
/// ```
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-'))
}

/// Check if adding another record would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new record.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_record_limit(count: usize) -> Option<String> {
    if count >= MAX_RECORDS {
        Some(format!(
            "Too many records: adding another would exceed maximum of {MAX_RECORDS}"
        ))
    } else {
        None
    }
}
