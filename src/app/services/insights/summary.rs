//! Aggregate status partition and totals

use crate::app::models::{InventoryRecord, StockStatus};
use serde::Serialize;
use std::collections::HashSet;

/// Status partition counts and aggregate totals for a record set
///
/// A simple reduction; recomputed whenever the record set or the actioned
/// set changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    /// Total number of records in the set
    pub total_records: usize,

    /// Records classified Safe
    pub safe_count: usize,

    /// Records classified Warning
    pub warning_count: usize,

    /// Records classified Critical
    pub critical_count: usize,

    /// Sum of current-week sales across all records
    pub total_weekly_sales: u64,

    /// Records whose id appears in the actioned set
    pub actioned_count: usize,
}

impl InventorySummary {
    /// Compute the summary for a record set and actioned-id set
    pub fn from_records(records: &[InventoryRecord], actioned: &HashSet<String>) -> Self {
        let mut summary = Self {
            total_records: records.len(),
            ..Self::default()
        };

        for record in records {
            match record.status {
                StockStatus::Safe => summary.safe_count += 1,
                StockStatus::Warning => summary.warning_count += 1,
                StockStatus::Critical => summary.critical_count += 1,
            }
            summary.total_weekly_sales += record.current_week_sales as u64;
            if actioned.contains(&record.id) {
                summary.actioned_count += 1;
            }
        }

        summary
    }
}
