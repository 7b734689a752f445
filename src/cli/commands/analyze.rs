//! Analyze command: ingest a sheet export and print the derived views

use colored::Colorize;
use std::time::Instant;
use tracing::info;

use super::shared::{self, RunStats};
use crate::app::models::{InventoryRecord, StockStatus};
use crate::app::services::insights::{best_sellers, urgent_reorders, InventorySummary};
use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::Result;

/// Run the analyze command
pub async fn run_analyze(args: AnalyzeArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let outcome = shared::acquire(&args.ingest).await?;
    info!(
        "Working set: {} records ({} rows seen)",
        outcome.records.len(),
        outcome.stats.rows_seen
    );

    let actioned = args.actioned_ids();
    let summary = InventorySummary::from_records(&outcome.records, &actioned);
    let top_sellers = best_sellers(&outcome.records, args.top);
    let urgent = urgent_reorders(&outcome.records, &actioned, args.top);

    match args.output_format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "source": outcome.source,
                "summary": summary,
                "best_sellers": top_sellers,
                "urgent_reorders": urgent,
                "records": outcome.records,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Human => {
            if !args.quiet {
                print_human_report(&outcome, &summary, &top_sellers, &urgent);
            }
        }
    }

    Ok(RunStats::from_outcome(&outcome, start_time.elapsed()))
}

/// Print the human-readable analysis report
fn print_human_report(
    outcome: &crate::app::services::pipeline::IngestOutcome,
    summary: &InventorySummary,
    top_sellers: &[&InventoryRecord],
    urgent: &[&InventoryRecord],
) {
    println!("{}", "Stockpilot inventory analysis".bold());
    println!("=============================");

    match &outcome.source {
        crate::app::services::pipeline::DataSource::Live => {
            println!("Source: live data");
        }
        crate::app::services::pipeline::DataSource::Sample { reason } => {
            println!(
                "Source: {} ({})",
                "sample data".yellow().bold(),
                reason
            );
        }
    }

    println!();
    println!(
        "Records: {}   {} safe: {}   {} warning: {}   {} critical: {}",
        summary.total_records,
        "●".green(),
        summary.safe_count,
        "●".yellow(),
        summary.warning_count,
        "●".red(),
        summary.critical_count
    );
    println!(
        "Weekly sales: {}   Already actioned: {}",
        summary.total_weekly_sales, summary.actioned_count
    );

    println!();
    println!("{}", "Urgent reorders".bold());
    if urgent.is_empty() {
        println!("  (none)");
    }
    for record in urgent {
        println!(
            "  {}  {}  [{}] stock {}, {}/wk, stock-out {}, order by {}",
            colored_status(record.status),
            record.product_name,
            record.sku,
            record.current_stock,
            record.current_week_sales,
            record.expected_stockout,
            record.suggested_order
        );
    }

    println!();
    println!("{}", "Best sellers".bold());
    for record in top_sellers {
        println!(
            "  {:>4}/wk  {}  ({} in stock, growth {:+.0}%)",
            record.current_week_sales, record.product_name, record.current_stock,
            record.sales_growth
        );
    }

    println!();
    println!(
        "Rows seen: {}, dropped: {} short / {} nameless",
        outcome.stats.rows_seen,
        outcome.stats.short_rows_dropped,
        outcome.stats.nameless_rows_dropped
    );
}

/// Status label with terminal coloring
fn colored_status(status: StockStatus) -> colored::ColoredString {
    match status {
        StockStatus::Safe => status.label().green(),
        StockStatus::Warning => status.label().yellow(),
        StockStatus::Critical => status.label().red().bold(),
    }
}
