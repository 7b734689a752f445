//! Report export and advisor context projection
//!
//! Two consumer-facing flattenings of the record set: a delimited-text
//! report carrying every record field, and a filtered, capped projection
//! handed to an external recommendation service as context. The service
//! call itself and its response are outside this crate's contract; only the
//! shape of the context is guaranteed here.

use crate::app::models::{Forecast, InventoryRecord, ItemType, StockStatus};
use crate::constants::{ADVISOR_CONTEXT_CAP, ADVISOR_GROWTH_THRESHOLD};
use crate::{Error, Result};
use serde::Serialize;
use tracing::debug;

/// Flatten records to delimited text, header row first
pub fn export_csv(records: &[InventoryRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::report_export(format!("Failed to flush CSV writer: {}", e), None))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::report_export(format!("Report was not valid UTF-8: {}", e), None))
}

/// One record as presented to the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisorItem {
    pub id: String,
    pub product_name: String,
    pub sku: String,
    pub status: StockStatus,
    pub item_type: ItemType,
    pub current_stock: u32,
    pub current_week_sales: u32,
    pub sales_growth: f64,
    pub days_to_stockout: i64,
    pub lead_time_days: u32,
    pub suggested_order: Forecast,
    pub is_seasonal_fit: bool,
}

impl From<&InventoryRecord> for AdvisorItem {
    fn from(record: &InventoryRecord) -> Self {
        Self {
            id: record.id.clone(),
            product_name: record.product_name.clone(),
            sku: record.sku.clone(),
            status: record.status,
            item_type: record.item_type,
            current_stock: record.current_stock,
            current_week_sales: record.current_week_sales,
            sales_growth: record.sales_growth,
            days_to_stockout: record.days_to_stockout,
            lead_time_days: record.lead_time_days,
            suggested_order: record.suggested_order,
            is_seasonal_fit: record.is_seasonal_fit,
        }
    }
}

/// Build the capped advisor context
///
/// Records enter the context when Critical or when week-over-week growth
/// exceeds the threshold. Critical records sort first, then by growth
/// descending, so the cap keeps the highest-signal rows.
pub fn advisor_context(records: &[InventoryRecord]) -> Vec<AdvisorItem> {
    let mut selected: Vec<&InventoryRecord> = records
        .iter()
        .filter(|r| r.status == StockStatus::Critical || r.sales_growth > ADVISOR_GROWTH_THRESHOLD)
        .collect();

    selected.sort_by(|a, b| {
        let a_critical = a.status == StockStatus::Critical;
        let b_critical = b.status == StockStatus::Critical;
        b_critical
            .cmp(&a_critical)
            .then_with(|| {
                b.sales_growth
                    .partial_cmp(&a.sales_growth)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
    selected.truncate(ADVISOR_CONTEXT_CAP);

    debug!("Advisor context: {} records selected", selected.len());
    selected.into_iter().map(AdvisorItem::from).collect()
}

/// Serialize the advisor context as pretty JSON
pub fn advisor_context_json(records: &[InventoryRecord]) -> Result<String> {
    let context = advisor_context(records);
    serde_json::to_string_pretty(&context)
        .map_err(|e| Error::serialization("Failed to serialize advisor context", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Forecast;

    fn record(id: &str, status: StockStatus, sales_growth: f64) -> InventoryRecord {
        InventoryRecord {
            id: id.to_string(),
            category: "Outerwear".to_string(),
            brand: "Northfield".to_string(),
            product_name: format!("Product {}", id),
            barcode: "8800001".to_string(),
            sku: "NFDA5TS00110001".to_string(),
            current_stock: 10,
            in_production_stock: 0,
            safety_stock: 10,
            reorder_point: 20,
            current_week_sales: 15,
            last_week_sales: 10,
            daily_sales_avg: 15.0 / 7.0,
            sales_growth,
            lead_time_days: 21,
            unit_cost: 50,
            days_to_stockout: 4,
            expected_stockout: Forecast::Stable,
            suggested_order: Forecast::Stable,
            status,
            item_type: ItemType::General,
            is_seasonal_fit: true,
        }
    }

    #[test]
    fn test_advisor_context_selection() {
        let records = vec![
            record("row-1", StockStatus::Safe, 10.0),     // excluded
            record("row-2", StockStatus::Critical, 5.0),  // critical
            record("row-3", StockStatus::Safe, 55.0),     // high growth
            record("row-4", StockStatus::Warning, 30.0),  // exactly at threshold: excluded
        ];

        let context = advisor_context(&records);
        let ids: Vec<&str> = context.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["row-2", "row-3"]);
    }

    #[test]
    fn test_advisor_context_critical_first_then_growth() {
        let records = vec![
            record("row-1", StockStatus::Safe, 90.0),
            record("row-2", StockStatus::Critical, 0.0),
            record("row-3", StockStatus::Safe, 40.0),
            record("row-4", StockStatus::Critical, 60.0),
        ];

        let context = advisor_context(&records);
        let ids: Vec<&str> = context.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["row-4", "row-2", "row-1", "row-3"]);
    }

    #[test]
    fn test_advisor_context_capped_at_ten() {
        let records: Vec<InventoryRecord> = (0..15)
            .map(|i| record(&format!("row-{}", i), StockStatus::Critical, 50.0))
            .collect();

        let context = advisor_context(&records);
        assert_eq!(context.len(), ADVISOR_CONTEXT_CAP);
    }

    #[test]
    fn test_export_csv_shape() {
        let records = vec![record("row-1", StockStatus::Critical, 50.0)];
        let csv = export_csv(&records).unwrap();
        let mut lines = csv.lines();

        let header = lines.next().unwrap();
        assert!(header.contains("product_name"));
        assert!(header.contains("suggested_order"));

        let data = lines.next().unwrap();
        assert!(data.contains("Product row-1"));
        assert!(data.contains("critical"));
        assert!(data.contains("stable"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_advisor_json_is_valid() {
        let records = vec![record("row-1", StockStatus::Critical, 50.0)];
        let json = advisor_context_json(&records).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["id"], "row-1");
        assert_eq!(parsed[0]["status"], "critical");
    }
}
