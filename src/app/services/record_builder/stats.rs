//! Reconstruction statistics and result structures

use crate::app::models::InventoryRecord;

/// Reconstruction result with records and statistics
#[derive(Debug, Clone)]
pub struct BuildResult {
    /// Reconstructed records in row order
    pub records: Vec<InventoryRecord>,

    /// Reconstruction statistics
    pub stats: BuildStats,
}

/// Counters for one reconstruction pass
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct BuildStats {
    /// Total number of data rows encountered (header excluded)
    pub rows_seen: usize,

    /// Number of records produced
    pub records_built: usize,

    /// Rows discarded for falling below the minimum field count
    pub short_rows_dropped: usize,

    /// Rows discarded because no product name resolved after forward-fill
    pub nameless_rows_dropped: usize,
}

impl BuildStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of rows dropped for any reason
    pub fn rows_dropped(&self) -> usize {
        self.short_rows_dropped + self.nameless_rows_dropped
    }

    /// Fraction of data rows that produced a record, as a percentage
    pub fn yield_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            0.0
        } else {
            self.records_built as f64 / self.rows_seen as f64 * 100.0
        }
    }
}
