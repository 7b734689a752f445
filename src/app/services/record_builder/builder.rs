//! Row-by-row record reconstruction
//!
//! Walks parsed rows top to bottom, threading a forward-fill accumulator
//! through the pass to reproduce spreadsheet merged-cell semantics: a
//! hierarchical value is only written on the first row of a visually merged
//! block, so blank cells inherit the last non-blank value seen above them.

use chrono::NaiveDate;
use tracing::{debug, info};

use super::super::sheet_parser::RawRow;
use super::field_parsers::{field_at, parse_count, parse_count_or};
use super::forecast;
use super::sku;
use super::stats::{BuildResult, BuildStats};
use crate::app::models::InventoryRecord;
use crate::config::Config;

/// Forward-fill accumulator for the hierarchical columns
///
/// Transient state scoped to one reconstruction pass; each pass starts
/// empty and no state crosses passes.
#[derive(Debug, Default)]
struct ForwardFill {
    category: String,
    brand: String,
    product_name: String,
}

impl ForwardFill {
    /// Update the held value when the cell is non-blank, then return the
    /// effective value for this row
    fn resolve(held: &mut String, cell: &str) -> String {
        if !cell.is_empty() {
            *held = cell.to_string();
        }
        held.clone()
    }
}

/// Reconstructs inventory records from parsed sheet rows
///
/// One builder serves one ingestion pass. The as-of date is injected at
/// construction so every date-dependent derivation (seasonal fit, forecast
/// dates) is deterministic and testable.
#[derive(Debug)]
pub struct RecordBuilder {
    config: Config,
    as_of: NaiveDate,
}

impl RecordBuilder {
    /// Create a builder for the given configuration and as-of date
    pub fn new(config: Config, as_of: NaiveDate) -> Self {
        Self { config, as_of }
    }

    /// Reconstruct records from data rows (header already excluded)
    ///
    /// Rows are processed in order. Per-row policy: discard rows below the
    /// minimum field count, forward-fill the hierarchical fields, decode the
    /// SKU, parse numerics with defaults, derive forecast and status, and
    /// finally drop any record whose product name never resolved.
    pub fn build(&self, rows: &[RawRow]) -> BuildResult {
        let mut stats = BuildStats::new();
        let mut records = Vec::with_capacity(rows.len());
        let mut fill = ForwardFill::default();

        for (index, row) in rows.iter().enumerate() {
            stats.rows_seen += 1;
            // Ordinal is position-stable: dropped rows still consume one,
            // so ids survive re-ingestion of an unchanged sheet.
            let ordinal = index + 1;

            if row.len() < self.config.min_data_fields {
                debug!(
                    "Row {} has {} fields (minimum {}), discarding",
                    ordinal,
                    row.len(),
                    self.config.min_data_fields
                );
                stats.short_rows_dropped += 1;
                continue;
            }

            let record = self.build_record(ordinal, row, &mut fill);

            if record.product_name.is_empty() {
                debug!("Row {} has no resolvable product name, dropping", ordinal);
                stats.nameless_rows_dropped += 1;
                continue;
            }

            records.push(record);
            stats.records_built += 1;
        }

        info!(
            "Reconstructed {} records from {} rows ({} short, {} nameless)",
            stats.records_built, stats.rows_seen, stats.short_rows_dropped,
            stats.nameless_rows_dropped
        );

        BuildResult { records, stats }
    }

    /// Build a single record from one data row
    fn build_record(&self, ordinal: usize, row: &RawRow, fill: &mut ForwardFill) -> InventoryRecord {
        let layout = &self.config.layout;

        let category = ForwardFill::resolve(&mut fill.category, field_at(row, layout.category));
        let brand = ForwardFill::resolve(&mut fill.brand, field_at(row, layout.brand));
        let product_name =
            ForwardFill::resolve(&mut fill.product_name, field_at(row, layout.product_name));

        let barcode = field_at(row, layout.barcode).to_string();
        let sku_code = field_at(row, layout.sku).to_string();

        let meta = sku::decode_sku(&sku_code);
        let is_seasonal_fit = sku::seasonal_fit(meta.season, self.as_of);

        let current_stock = parse_count(row, layout.current_stock);
        let in_production_stock = parse_count(row, layout.in_production_stock);
        let safety_stock =
            parse_count_or(row, layout.safety_stock, self.config.default_safety_stock);
        let reorder_point =
            parse_count_or(row, layout.reorder_point, self.config.default_reorder_point);
        let current_week_sales = parse_count(row, layout.current_week_sales);
        let last_week_sales = parse_count(row, layout.last_week_sales);
        let unit_cost = parse_count(row, layout.unit_cost);

        let daily_sales_avg = forecast::daily_sales_avg(current_week_sales);
        let sales_growth = forecast::sales_growth(current_week_sales, last_week_sales);
        let days_to_stockout = forecast::days_to_stockout(current_stock, daily_sales_avg);
        let expected_stockout = forecast::stockout_forecast(self.as_of, days_to_stockout);
        let suggested_order = forecast::order_forecast(expected_stockout, meta.lead_time_days);
        let status = forecast::classify(current_stock, reorder_point, days_to_stockout);

        InventoryRecord {
            id: format!("row-{}", ordinal),
            category,
            brand,
            product_name,
            barcode,
            sku: sku_code,
            current_stock,
            in_production_stock,
            safety_stock,
            reorder_point,
            current_week_sales,
            last_week_sales,
            daily_sales_avg,
            sales_growth,
            lead_time_days: meta.lead_time_days,
            unit_cost,
            days_to_stockout,
            expected_stockout,
            suggested_order,
            status,
            item_type: meta.item_type,
            is_seasonal_fit,
        }
    }
}
