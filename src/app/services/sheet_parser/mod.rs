//! Tabular parser for delimited sheet exports
//!
//! This module splits raw sheet text into rows of trimmed string fields.
//! The parser is deliberately minimal: a two-state scanner (unquoted,
//! quoted) whose only transition trigger is the quote character. That is
//! sufficient for the hand-edited exports it targets, but it is not fully
//! RFC-4180 compliant (no escaped-quote doubling inside quoted fields).
//!
//! ## Failure policy
//!
//! The parser never rejects a row. Malformed input simply yields fewer or
//! misaligned fields; the record builder is responsible for discarding or
//! defaulting those downstream.

pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{RawRow, TabularParser};
