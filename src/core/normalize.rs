//! Field-level text normalization
//!
//! Pure functions, no I/O. A free-text value has every line feed replaced
//! by one space and every carriage return removed. Line feeds are handled
//! first, so a `\r\n` pair collapses to a single space.

use crate::types::MissingPolicy;

/// Replace `\n` with a space and drop `\r`, leaving every other character
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize_text(value: &str) -> String {
    value
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

/// Normalize one free-text field
///
/// An empty field is an absent value and becomes the policy's placeholder.
/// Anything else goes through [`normalize_text`], even when that leaves it
/// empty (a value made only of carriage returns).
pub fn normalize_field(value: &str, missing: MissingPolicy) -> String {
    if value.is_empty() {
        return missing.placeholder().to_string();
    }
    if !needs_normalization(value) {
        return value.to_string();
    }
    normalize_text(value)
}

/// Whether a value contains anything [`normalize_text`] would change
pub fn needs_normalization(value: &str) -> bool {
    value.contains(['\n', '\r'])
}
