//! Core tabular parser implementation

use crate::constants::QUOTE_CHAR;
use tracing::debug;

/// One parsed row: an ordered sequence of trimmed string fields
///
/// No schema is enforced at this stage; downstream code tolerates short or
/// misaligned rows by substituting defaults.
pub type RawRow = Vec<String>;

/// Quote-aware splitter for delimited sheet text
///
/// Splits on line terminators first, then scans each line character by
/// character with a toggled inside-quoted-field flag. The delimiter is
/// literal while the flag is set and a field boundary otherwise. Every
/// field is trimmed of surrounding whitespace.
#[derive(Debug, Clone)]
pub struct TabularParser {
    delimiter: char,
}

impl TabularParser {
    /// Create a parser for the given field delimiter
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parse raw sheet text into rows
    ///
    /// Blank lines produce no row. Rows are returned in input order,
    /// including any header row; excluding the header is the caller's
    /// concern.
    pub fn parse(&self, text: &str) -> Vec<RawRow> {
        let rows: Vec<RawRow> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.split_line(line))
            .collect();

        debug!("Parsed {} rows from sheet text", rows.len());
        rows
    }

    /// Split a single line into trimmed fields
    ///
    /// Two states only: a quote character toggles between them and is not
    /// itself emitted. There is no escaped-quote support.
    pub fn split_line(&self, line: &str) -> RawRow {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in line.chars() {
            if ch == QUOTE_CHAR {
                in_quotes = !in_quotes;
            } else if ch == self.delimiter && !in_quotes {
                fields.push(current.trim().to_string());
                current.clear();
            } else {
                current.push(ch);
            }
        }
        fields.push(current.trim().to_string());

        fields
    }
}

impl Default for TabularParser {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_DELIMITER)
    }
}
