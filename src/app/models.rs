//! Data models for inventory reconstruction
//!
//! This module contains the core data structures for representing
//! reconstructed inventory records and the SKU-derived metadata attached to
//! them: season codes, item types, stock status and forecast values.

use crate::constants::{self, season_codes};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

// =============================================================================
// SKU-Derived Metadata
// =============================================================================

/// Season encoded at a fixed position within the SKU
///
/// Three of the codes (AllSeason, Carryover, Collab) are season-agnostic and
/// count as in-season for every calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    AllSeason,
    Carryover,
    Collab,
}

impl Season {
    /// Map a SKU season-code character to a season
    ///
    /// Returns `None` for characters outside the catalogue alphabet; callers
    /// decide the fallback (the decoder treats unknown codes as AllSeason).
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            season_codes::SPRING => Some(Self::Spring),
            season_codes::SUMMER => Some(Self::Summer),
            season_codes::FALL => Some(Self::Fall),
            season_codes::WINTER => Some(Self::Winter),
            season_codes::ALL_SEASON => Some(Self::AllSeason),
            season_codes::CARRYOVER => Some(Self::Carryover),
            season_codes::COLLAB => Some(Self::Collab),
            _ => None,
        }
    }

    /// Whether this season is a fit for the given calendar month (1-12)
    ///
    /// Month bands: Feb-Apr Spring, May-Jul Summer, Aug-Oct Fall, Nov-Jan
    /// Winter. Season-agnostic codes fit every month.
    pub fn is_fit_for_month(&self, month: u32) -> bool {
        match self {
            Self::AllSeason | Self::Carryover | Self::Collab => true,
            Self::Spring => (2..=4).contains(&month),
            Self::Summer => (5..=7).contains(&month),
            Self::Fall => (8..=10).contains(&month),
            Self::Winter => month >= 11 || month == 1,
        }
    }
}

/// Item type derived from the SKU sub-category code
///
/// Each type carries an associated replenishment lead time; the mapping
/// tables live in [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Padding,
    Outer,
    General,
}

impl ItemType {
    /// Lowercase label used in reports and the advisor context
    pub fn label(&self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Outer => "outer",
            Self::General => "general",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata decoded from a single SKU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkuMeta {
    /// Season encoded in the SKU
    pub season: Season,

    /// Item type from the sub-category lookup tables
    pub item_type: ItemType,

    /// Replenishment lead time in days (always positive)
    pub lead_time_days: u32,
}

// =============================================================================
// Derived Classification
// =============================================================================

/// Reorder-risk classification of a record
///
/// Always derived from stock level, reorder point and stock-out horizon;
/// never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Safe,
    Warning,
    Critical,
}

impl StockStatus {
    /// Label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A forecast date, or the stable marker when no forecast is needed
///
/// Records whose stock-out horizon exceeds the stable threshold carry the
/// marker instead of a far-future date that would only mislead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forecast {
    /// Concrete forecast date
    Date(NaiveDate),
    /// No imminent risk under current sales, no forecast produced
    Stable,
}

impl Forecast {
    /// The forecast date, if one was produced
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Stable => None,
        }
    }

    /// Whether this forecast is the stable marker
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable)
    }
}

impl fmt::Display for Forecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Stable => f.write_str(constants::STABLE_FORECAST_LABEL),
        }
    }
}

// Forecasts serialize as their display form so exports and the advisor
// context carry either an ISO date or the stable label.
impl Serialize for Forecast {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

// =============================================================================
// Inventory Record
// =============================================================================

/// One reconstructed inventory record
///
/// Created fresh on every ingestion pass and immutable once produced. All
/// derived fields (averages, growth, forecasts, status) are computed by the
/// record builder; consumers never recompute or mutate them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRecord {
    /// Stable row-position derived identifier (`row-{N}`)
    pub id: String,

    /// Forward-filled product category
    pub category: String,

    /// Forward-filled brand
    pub brand: String,

    /// Forward-filled product name (never blank in the output set)
    pub product_name: String,

    /// Raw barcode as exported
    pub barcode: String,

    /// Raw SKU; the 15-character identifier used for metadata decoding
    pub sku: String,

    /// On-hand plus in-transit reorder stock
    pub current_stock: u32,

    /// Stock currently in production
    pub in_production_stock: u32,

    /// Safety stock threshold (defaulted when absent)
    pub safety_stock: u32,

    /// Reorder point threshold (defaulted when absent)
    pub reorder_point: u32,

    /// Sales count for the current trailing week
    pub current_week_sales: u32,

    /// Sales count for the previous week
    pub last_week_sales: u32,

    /// Current week sales spread over the sales window
    pub daily_sales_avg: f64,

    /// Week-over-week sales change in percent (may be negative)
    pub sales_growth: f64,

    /// Replenishment lead time in days, decoded from the SKU
    pub lead_time_days: u32,

    /// Unit cost
    pub unit_cost: u32,

    /// Projected days until on-hand stock reaches zero
    pub days_to_stockout: i64,

    /// Forecast stock-out date, or stable
    pub expected_stockout: Forecast,

    /// Suggested reorder date (stock-out minus lead time), or stable
    pub suggested_order: Forecast,

    /// Derived reorder-risk classification
    pub status: StockStatus,

    /// Item type label derived from the SKU sub-category code
    pub item_type: ItemType,

    /// Whether the SKU season code matches the as-of month
    pub is_seasonal_fit: bool,
}

impl InventoryRecord {
    /// Validate invariants the builder is expected to uphold
    ///
    /// Used by tests and the sample generator as a safety net; production
    /// reconstruction enforces these by construction.
    pub fn validate(&self) -> Result<()> {
        if self.product_name.trim().is_empty() {
            return Err(Error::data_validation(format!(
                "Record {} has a blank product name",
                self.id
            )));
        }

        if self.lead_time_days == 0 {
            return Err(Error::data_validation(format!(
                "Record {} has a zero lead time",
                self.id
            )));
        }

        if self.expected_stockout.is_stable() != self.suggested_order.is_stable() {
            return Err(Error::data_validation(format!(
                "Record {} has mismatched forecast markers",
                self.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_from_code() {
        assert_eq!(Season::from_code('S'), Some(Season::Spring));
        assert_eq!(Season::from_code('u'), Some(Season::Summer));
        assert_eq!(Season::from_code('F'), Some(Season::Fall));
        assert_eq!(Season::from_code('W'), Some(Season::Winter));
        assert_eq!(Season::from_code('A'), Some(Season::AllSeason));
        assert_eq!(Season::from_code('C'), Some(Season::Carryover));
        assert_eq!(Season::from_code('X'), Some(Season::Collab));
        assert_eq!(Season::from_code('Z'), None);
    }

    #[test]
    fn test_season_month_bands() {
        // Spring band is Feb-Apr
        assert!(Season::Spring.is_fit_for_month(3));
        assert!(!Season::Spring.is_fit_for_month(11));

        // Winter band wraps the year end
        assert!(Season::Winter.is_fit_for_month(11));
        assert!(Season::Winter.is_fit_for_month(12));
        assert!(Season::Winter.is_fit_for_month(1));
        assert!(!Season::Winter.is_fit_for_month(2));

        // Season-agnostic codes fit every month
        for month in 1..=12 {
            assert!(Season::AllSeason.is_fit_for_month(month));
            assert!(Season::Carryover.is_fit_for_month(month));
            assert!(Season::Collab.is_fit_for_month(month));
        }
    }

    #[test]
    fn test_forecast_display() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(Forecast::Date(date).to_string(), "2025-03-14");
        assert_eq!(Forecast::Stable.to_string(), "stable");
        assert!(Forecast::Stable.is_stable());
        assert_eq!(Forecast::Date(date).date(), Some(date));
        assert_eq!(Forecast::Stable.date(), None);
    }

    #[test]
    fn test_item_type_labels() {
        assert_eq!(ItemType::Padding.to_string(), "padding");
        assert_eq!(ItemType::Outer.to_string(), "outer");
        assert_eq!(ItemType::General.to_string(), "general");
    }
}
