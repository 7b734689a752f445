//! Lenient positional field extraction
//!
//! The source sheet is human-edited, so every accessor here substitutes a
//! default instead of propagating an error: absent columns, stray text in
//! numeric cells and negative counts all collapse to the documented
//! fallback for the field.

use super::super::sheet_parser::RawRow;
use tracing::debug;

/// Get the trimmed field at a column position, or empty string if the row
/// is too short
pub fn field_at(row: &RawRow, index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Parse a non-negative count from a column position, defaulting to 0
///
/// Thousands separators are tolerated ("1,200" in a quoted cell). Anything
/// that fails to parse as a non-negative integer yields 0.
pub fn parse_count(row: &RawRow, index: usize) -> u32 {
    parse_count_or(row, index, 0)
}

/// Parse a non-negative count from a column position with an explicit
/// fallback, used for threshold columns with non-zero defaults
pub fn parse_count_or(row: &RawRow, index: usize, default: u32) -> u32 {
    let raw = field_at(row, index);
    if raw.is_empty() {
        return default;
    }

    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<u32>() {
        Ok(value) => value,
        Err(_) => {
            debug!(
                "Failed to parse count at column {}: '{}', using {}",
                index, raw, default
            );
            default
        }
    }
}
