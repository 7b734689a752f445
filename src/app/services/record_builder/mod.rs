//! Record reconstruction for parsed sheet rows
//!
//! This module walks parsed rows top to bottom and produces one
//! [`InventoryRecord`](crate::app::models::InventoryRecord) per data row:
//! forward-filling blank hierarchical fields from the last non-blank value
//! seen, decoding SKU-embedded metadata, parsing numeric fields with
//! documented fallbacks, and computing the derived forecast and
//! classification fields.
//!
//! ## Architecture
//!
//! - [`builder`] - Row-by-row reconstruction with the forward-fill accumulator
//! - [`sku`] - SKU metadata decoding and seasonal-fit evaluation
//! - [`field_parsers`] - Lenient positional field extraction with defaults
//! - [`forecast`] - Sales arithmetic, stock-out forecasting and classification
//! - [`stats`] - Reconstruction statistics and result structures
//!
//! ## Failure policy
//!
//! Reconstruction never raises on malformed data. Rows below the minimum
//! field count are discarded, unparseable numerics are defaulted per field,
//! undersized SKUs decode to generic metadata, and records whose product
//! name never resolves are excluded from the output set. All drops are
//! counted in the build statistics.

pub mod builder;
pub mod field_parsers;
pub mod forecast;
pub mod sku;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use builder::RecordBuilder;
pub use stats::{BuildResult, BuildStats};
