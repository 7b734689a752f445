//! Integration tests for the full ingestion pipeline
//!
//! These exercise the public API end to end: raw sheet text through parsing,
//! forward-fill reconstruction, SKU decoding, forecasting, classification
//! and the derived views, plus file ingestion with the fallback policy.

use chrono::NaiveDate;
use std::collections::HashSet;
use std::io::Write;
use stockpilot::app::services::insights::{best_sellers, urgent_reorders, InventorySummary};
use stockpilot::app::services::pipeline::{self, DataSource};
use stockpilot::app::services::report;
use stockpilot::{Config, StockStatus};

/// A realistic export: merged-cell hierarchy, a quoted brand with an
/// embedded comma, a section-note row, a short SKU and a nameless first row
const SHEET: &str = "\
Category,Brand,Product,Barcode,SKU,Stock,In Production,Safety,Reorder Pt,Sales (wk),Sales (prev wk),Unit Cost
Outerwear,Northfield,Alpine Parka,8800001,NFDS5JK00420001,40,20,10,20,12,10,189
,,Ridge Coat,8800002,NFDS5CT00430002,9,0,10,20,14,9,220
,,,8800003,NFDW5PD00980003,55,30,10,20,3,6,260
weekly ops note
Accessories,\"Acme, Inc\",Canvas Tote,8800006,NFDA5BG00610006,70,0,10,20,70,35,35
,,Trail Cap,8800007,NFD007,500,0,10,20,0,0,25";

fn march() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

#[test]
fn test_end_to_end_reconstruction() {
    let outcome = pipeline::ingest_text(SHEET, &Config::default(), march());
    assert_eq!(outcome.source, DataSource::Live);

    // Six data rows: one note row dropped short, five records built
    assert_eq!(outcome.stats.rows_seen, 6);
    assert_eq!(outcome.stats.short_rows_dropped, 1);
    assert_eq!(outcome.records.len(), 5);

    // Forward-fill across the merged block
    let second_coat_row = &outcome.records[2];
    assert_eq!(second_coat_row.category, "Outerwear");
    assert_eq!(second_coat_row.brand, "Northfield");
    assert_eq!(second_coat_row.product_name, "Ridge Coat");

    // Quoted brand with embedded comma survives as one field
    let tote = outcome
        .records
        .iter()
        .find(|r| r.product_name == "Canvas Tote")
        .unwrap();
    assert_eq!(tote.brand, "Acme, Inc");

    // Ids are position-stable: the note row consumed an ordinal
    assert_eq!(tote.id, "row-5");
}

#[test]
fn test_end_to_end_derivations() {
    let outcome = pipeline::ingest_text(SHEET, &Config::default(), march());

    // Ridge Coat: 9 in stock vs reorder point 20 -> under half, Critical
    let coat = &outcome.records[1];
    assert_eq!(coat.status, StockStatus::Critical);

    // Canvas Tote: 70 stock, 70/wk -> 7-day horizon, Critical, dated forecasts
    let tote = outcome
        .records
        .iter()
        .find(|r| r.product_name == "Canvas Tote")
        .unwrap();
    assert_eq!(tote.days_to_stockout, 7);
    assert_eq!(tote.status, StockStatus::Critical);
    assert_eq!(tote.sales_growth, 100.0);
    assert_eq!(
        tote.expected_stockout.date(),
        Some(NaiveDate::from_ymd_opt(2025, 3, 22).unwrap())
    );

    // Trail Cap: short SKU decodes generically and zero sales is stable
    let cap = outcome
        .records
        .iter()
        .find(|r| r.product_name == "Trail Cap")
        .unwrap();
    assert_eq!(cap.lead_time_days, 14);
    assert_eq!(cap.item_type.label(), "general");
    assert!(cap.is_seasonal_fit);
    assert!(cap.expected_stockout.is_stable());
    assert_eq!(cap.status, StockStatus::Safe);

    // Spring SKUs are in season in March, the Winter padding row is not
    assert!(outcome.records[0].is_seasonal_fit);
    assert!(!outcome.records[2].is_seasonal_fit);

    for record in &outcome.records {
        record.validate().expect("record should satisfy invariants");
    }
}

#[test]
fn test_views_over_reconstructed_set() {
    let outcome = pipeline::ingest_text(SHEET, &Config::default(), march());
    let actioned = HashSet::new();

    let summary = InventorySummary::from_records(&outcome.records, &actioned);
    assert_eq!(summary.total_records, 5);
    assert_eq!(
        summary.safe_count + summary.warning_count + summary.critical_count,
        5
    );
    assert_eq!(summary.total_weekly_sales, 12 + 14 + 3 + 70);

    let top = best_sellers(&outcome.records, 3);
    assert_eq!(top[0].product_name, "Canvas Tote");

    // Urgency: in-season sellers only; the Winter padding row is filtered
    let urgent = urgent_reorders(&outcome.records, &actioned, 10);
    assert!(urgent.iter().all(|r| r.is_seasonal_fit));
    assert!(urgent.iter().all(|r| r.current_week_sales > 0));
    assert_eq!(urgent[0].product_name, "Canvas Tote");

    // Excluding the leader promotes the runner-up
    let actioned: HashSet<String> = [urgent[0].id.clone()].into_iter().collect();
    let filtered = urgent_reorders(&outcome.records, &actioned, 10);
    assert!(filtered.iter().all(|r| r.id != urgent[0].id));
}

#[test]
fn test_report_and_advisor_outputs() {
    let outcome = pipeline::ingest_text(SHEET, &Config::default(), march());

    let csv = report::export_csv(&outcome.records).unwrap();
    // Header plus one line per record
    assert_eq!(csv.lines().count(), outcome.records.len() + 1);
    assert!(csv.lines().next().unwrap().contains("product_name"));
    // The quoted brand is re-quoted on the way out
    assert!(csv.contains("\"Acme, Inc\""));

    let json = report::advisor_context_json(&outcome.records).unwrap();
    let context: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = context.as_array().unwrap();
    assert!(items.len() <= 10);
    // Critical records lead the context
    assert_eq!(items[0]["status"], "critical");
}

#[tokio::test]
async fn test_file_ingestion_live_and_fallback() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHEET.as_bytes()).unwrap();

    let config = Config::default();
    let live = pipeline::ingest_file(file.path(), &config, march())
        .await
        .unwrap();
    assert_eq!(live.source, DataSource::Live);
    assert_eq!(live.records.len(), 5);

    let fallback = pipeline::ingest_file(std::path::Path::new("/missing.csv"), &config, march())
        .await
        .unwrap();
    assert!(fallback.source.is_sample());
    assert!(!fallback.records.is_empty());

    let strict = Config {
        fallback_to_sample: false,
        ..Config::default()
    };
    let err = pipeline::ingest_file(std::path::Path::new("/missing.csv"), &strict, march()).await;
    assert!(err.is_err());
}

#[test]
fn test_repeated_passes_are_identical() {
    let config = Config::default();
    let first = pipeline::ingest_text(SHEET, &config, march());
    let second = pipeline::ingest_text(SHEET, &config, march());

    assert_eq!(first.records, second.records);
}
