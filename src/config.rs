//! Configuration management and validation.
//!
//! Provides configuration structures for the sheet layout contract,
//! derivation defaults, and derived-view sizing. Defaults mirror the
//! positional schema the upstream spreadsheet export is committed to.

use crate::constants::{self, columns};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// 0-indexed column positions within a data row.
///
/// The sheet export is a fixed positional contract; this structure exists so
/// the contract is explicit, serializable and testable rather than scattered
/// through the reconstruction code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Hierarchical descriptor columns (forward-filled)
    pub category: usize,
    pub brand: usize,
    pub product_name: usize,

    /// Raw code columns
    pub barcode: usize,
    pub sku: usize,

    /// Stock count columns
    pub current_stock: usize,
    pub in_production_stock: usize,

    /// Threshold columns
    pub safety_stock: usize,
    pub reorder_point: usize,

    /// Trailing weekly sales columns
    pub current_week_sales: usize,
    pub last_week_sales: usize,

    /// Unit cost column
    pub unit_cost: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            category: columns::CATEGORY,
            brand: columns::BRAND,
            product_name: columns::PRODUCT_NAME,
            barcode: columns::BARCODE,
            sku: columns::SKU,
            current_stock: columns::CURRENT_STOCK,
            in_production_stock: columns::IN_PRODUCTION_STOCK,
            safety_stock: columns::SAFETY_STOCK,
            reorder_point: columns::REORDER_POINT,
            current_week_sales: columns::CURRENT_WEEK_SALES,
            last_week_sales: columns::LAST_WEEK_SALES,
            unit_cost: columns::UNIT_COST,
        }
    }
}

impl ColumnLayout {
    /// Highest column index the layout addresses
    pub fn max_index(&self) -> usize {
        [
            self.category,
            self.brand,
            self.product_name,
            self.barcode,
            self.sku,
            self.current_stock,
            self.in_production_stock,
            self.safety_stock,
            self.reorder_point,
            self.current_week_sales,
            self.last_week_sales,
            self.unit_cost,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Pipeline configuration
///
/// Covers the parser contract (delimiter, header), the reconstruction
/// defaults, and the sizes of the derived views. All values have working
/// defaults; the CLI overrides individual fields from flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Field delimiter used by the sheet export
    pub delimiter: char,

    /// Whether the first row is a header row (excluded from reconstruction)
    pub has_header: bool,

    /// Minimum field count for a row to be treated as data
    pub min_data_fields: usize,

    /// Column positions within a data row
    pub layout: ColumnLayout,

    /// Safety stock substituted when the field is absent or unparseable
    pub default_safety_stock: u32,

    /// Reorder point substituted when the field is absent or unparseable
    pub default_reorder_point: u32,

    /// Size of the best-seller slice
    pub best_seller_limit: usize,

    /// Size of the urgent-reorder slice
    pub urgent_reorder_limit: usize,

    /// Substitute the built-in sample sheet when ingestion fails.
    ///
    /// When false, an unreachable or unreadable source is a hard error
    /// instead; the caller always learns which of the two happened from
    /// the outcome's data source marker.
    pub fallback_to_sample: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: constants::DEFAULT_DELIMITER,
            has_header: true,
            min_data_fields: constants::MIN_DATA_FIELDS,
            layout: ColumnLayout::default(),
            default_safety_stock: constants::DEFAULT_SAFETY_STOCK,
            default_reorder_point: constants::DEFAULT_REORDER_POINT,
            best_seller_limit: constants::BEST_SELLER_LIMIT,
            urgent_reorder_limit: constants::URGENT_REORDER_LIMIT,
            fallback_to_sample: true,
        }
    }
}

impl Config {
    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == constants::QUOTE_CHAR {
            return Err(Error::configuration(
                "Delimiter cannot be the quote character".to_string(),
            ));
        }

        if self.min_data_fields == 0 {
            return Err(Error::configuration(
                "Minimum data field count must be greater than 0".to_string(),
            ));
        }

        // The hierarchical and code columns must fall inside the minimum
        // field count, otherwise every data row would be discarded before
        // those fields could be read.
        let required = [
            self.layout.category,
            self.layout.brand,
            self.layout.product_name,
            self.layout.sku,
        ];
        if let Some(&bad) = required.iter().find(|&&i| i >= self.min_data_fields) {
            return Err(Error::configuration(format!(
                "Column index {} is outside the minimum data field count {}",
                bad, self.min_data_fields
            )));
        }

        if self.best_seller_limit == 0 || self.urgent_reorder_limit == 0 {
            return Err(Error::configuration(
                "Derived view limits must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
