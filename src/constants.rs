//! Application constants for stockpilot
//!
//! This module contains the positional column contract, derivation
//! thresholds, SKU code tables, and default values used throughout the
//! ingestion pipeline.

// =============================================================================
// Sheet Layout Contract
// =============================================================================

/// Default field delimiter for sheet exports
pub const DEFAULT_DELIMITER: char = ',';

/// Quote character toggling the quoted-field state in the parser
pub const QUOTE_CHAR: char = '"';

/// Minimum number of fields a row must carry to be treated as data.
///
/// Rows shorter than this are discarded outright (section headers, blank
/// spacer lines, trailing notes). Rows at or above the minimum may still be
/// missing trailing numeric columns, which are defaulted per field.
pub const MIN_DATA_FIELDS: usize = 6;

/// Default 0-indexed column positions for the sheet export.
///
/// This positional schema is a fixed contract with whatever produces the
/// export; see [`crate::config::ColumnLayout`] for the runtime form.
pub mod columns {
    pub const CATEGORY: usize = 0;
    pub const BRAND: usize = 1;
    pub const PRODUCT_NAME: usize = 2;
    pub const BARCODE: usize = 3;
    pub const SKU: usize = 4;
    pub const CURRENT_STOCK: usize = 5;
    pub const IN_PRODUCTION_STOCK: usize = 6;
    pub const SAFETY_STOCK: usize = 7;
    pub const REORDER_POINT: usize = 8;
    pub const CURRENT_WEEK_SALES: usize = 9;
    pub const LAST_WEEK_SALES: usize = 10;
    pub const UNIT_COST: usize = 11;
}

// =============================================================================
// SKU Code Tables
// =============================================================================

/// Full SKU length produced by the upstream catalogue system
pub const SKU_FULL_LEN: usize = 15;

/// Minimum SKU length that still carries decodable metadata.
///
/// Codes shorter than this yield the generic fallback: item type "general",
/// lead time [`FALLBACK_LEAD_TIME_DAYS`], always in season.
pub const SKU_MIN_DECODE_LEN: usize = 7;

/// 0-indexed position of the season code character within the SKU
pub const SKU_SEASON_POS: usize = 3;

/// 0-indexed range of the sub-category code within the SKU (chars 5-6)
pub const SKU_SUBCATEGORY_START: usize = 5;
pub const SKU_SUBCATEGORY_END: usize = 7;

/// Lead time used when the SKU is too short to decode, in days
pub const FALLBACK_LEAD_TIME_DAYS: u32 = 14;

/// Lead time for sub-category codes with no table entry, in days
pub const GENERAL_LEAD_TIME_DAYS: u32 = 21;

/// Sub-category codes that map to the padding item type
pub const PADDING_SUBCATEGORY_CODES: &[&str] = &["PD", "DW", "LD"];

/// Lead time for padding items, in days
pub const PADDING_LEAD_TIME_DAYS: u32 = 50;

/// Sub-category codes that map to the outer item type
pub const OUTER_SUBCATEGORY_CODES: &[&str] = &["JK", "CT", "JP", "VT"];

/// Lead time for outer items, in days
pub const OUTER_LEAD_TIME_DAYS: u32 = 35;

/// Season code characters as embedded in the SKU
pub mod season_codes {
    pub const SPRING: char = 'S';
    pub const SUMMER: char = 'U';
    pub const FALL: char = 'F';
    pub const WINTER: char = 'W';
    pub const ALL_SEASON: char = 'A';
    pub const CARRYOVER: char = 'C';
    pub const COLLAB: char = 'X';
}

// =============================================================================
// Derivation Thresholds
// =============================================================================

/// Days in the trailing sales window used for the daily average
pub const SALES_WINDOW_DAYS: f64 = 7.0;

/// Sentinel stock-out horizon when current sales velocity is zero, in days
pub const STOCKOUT_SENTINEL_DAYS: i64 = 365;

/// Horizon beyond which no stock-out forecast date is produced, in days
pub const STABLE_HORIZON_DAYS: i64 = 360;

/// Stock-out horizon at or below which a record is Critical, in days
pub const CRITICAL_HORIZON_DAYS: i64 = 10;

/// Stock-out horizon at or below which a record is at least Warning, in days
pub const WARNING_HORIZON_DAYS: i64 = 20;

/// Fraction of the reorder point at or below which stock is Critical
pub const CRITICAL_STOCK_RATIO: f64 = 0.5;

/// Default safety stock when the field is absent or unparseable
pub const DEFAULT_SAFETY_STOCK: u32 = 10;

/// Default reorder point when the field is absent or unparseable
pub const DEFAULT_REORDER_POINT: u32 = 20;

// =============================================================================
// Derived Views and Advisor Context
// =============================================================================

/// Number of records in the best-seller slice
pub const BEST_SELLER_LIMIT: usize = 5;

/// Number of records in the urgent-reorder slice
pub const URGENT_REORDER_LIMIT: usize = 5;

/// Exponent over-weighting sales velocity in the urgency score
pub const URGENCY_SALES_EXPONENT: f64 = 1.5;

/// Multiplier applied to the urgency score for in-season items
pub const URGENCY_SEASONAL_BOOST: f64 = 1.5;

/// Week-over-week growth (percent) above which a record enters the advisor
/// context even when its status is not Critical
pub const ADVISOR_GROWTH_THRESHOLD: f64 = 30.0;

/// Maximum number of records handed to the recommendation service
pub const ADVISOR_CONTEXT_CAP: usize = 10;

/// Label carried in place of a date when no forecast is needed
pub const STABLE_FORECAST_LABEL: &str = "stable";
