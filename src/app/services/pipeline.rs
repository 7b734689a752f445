//! Ingestion pipeline orchestration
//!
//! Wires the stages together: raw text -> rows -> records. Data flows
//! strictly forward and each pass owns its own accumulator state, so
//! ingestion is a pure function of (text, config, as-of date).
//!
//! File ingestion adds the acquisition boundary and the fallback policy:
//! when the source cannot be read (or contains nothing parseable) the
//! pipeline substitutes the built-in sample sheet, and the outcome carries
//! a [`DataSource`] marker so callers can always distinguish live data,
//! fallback data, and (with fallback disabled) hard failure. A sheet that
//! parses but yields zero records is live data: real empty inventory is not
//! an error.

use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use super::record_builder::{BuildResult, BuildStats, RecordBuilder};
use super::sample_data;
use super::sheet_parser::TabularParser;
use crate::app::models::InventoryRecord;
use crate::config::Config;
use crate::{Error, Result};

/// Where an outcome's records came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    /// Records were reconstructed from the requested source
    Live,
    /// The source was unusable and the built-in sample was substituted
    Sample { reason: String },
}

impl DataSource {
    /// Whether this outcome carries substituted sample data
    pub fn is_sample(&self) -> bool {
        matches!(self, Self::Sample { .. })
    }
}

/// Result of one ingestion pass
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    /// Reconstructed records in row order
    pub records: Vec<InventoryRecord>,

    /// Reconstruction statistics
    pub stats: BuildStats,

    /// Provenance of the records
    pub source: DataSource,
}

/// Run the derivation pipeline over raw sheet text
///
/// Parses, strips the header row when configured, and reconstructs records.
/// Never fails: malformed rows are dropped or defaulted per the
/// reconstruction policy.
pub fn run_pipeline(text: &str, config: &Config, as_of: NaiveDate) -> BuildResult {
    let parser = TabularParser::new(config.delimiter);
    let rows = parser.parse(text);

    let data_rows = if config.has_header && !rows.is_empty() {
        &rows[1..]
    } else {
        &rows[..]
    };

    RecordBuilder::new(config.clone(), as_of).build(data_rows)
}

/// Ingest raw sheet text as live data
pub fn ingest_text(text: &str, config: &Config, as_of: NaiveDate) -> IngestOutcome {
    let result = run_pipeline(text, config, as_of);
    IngestOutcome {
        records: result.records,
        stats: result.stats,
        source: DataSource::Live,
    }
}

/// Ingest a sheet export from a file, applying the fallback policy
///
/// Acquisition failure (unreadable file, or a file with no rows at all)
/// either substitutes the sample sheet or, when fallback is disabled,
/// returns a hard ingestion error.
pub async fn ingest_file(path: &Path, config: &Config, as_of: NaiveDate) -> Result<IngestOutcome> {
    info!("Ingesting sheet export: {}", path.display());

    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) => {
            return fall_back_or_fail(
                path,
                config,
                as_of,
                format!("failed to read source: {}", e),
            );
        }
    };

    if text.trim().is_empty() {
        return fall_back_or_fail(path, config, as_of, "source contains no rows".to_string());
    }

    Ok(ingest_text(&text, config, as_of))
}

/// Apply the configured fallback policy for a failed acquisition
fn fall_back_or_fail(
    path: &Path,
    config: &Config,
    as_of: NaiveDate,
    reason: String,
) -> Result<IngestOutcome> {
    if !config.fallback_to_sample {
        return Err(Error::ingestion(path.display().to_string(), reason));
    }

    warn!(
        "Ingestion of '{}' failed ({}), substituting sample data",
        path.display(),
        reason
    );

    let result = sample_data::sample_records(config, as_of);
    Ok(IngestOutcome {
        records: result.records,
        stats: result.stats,
        source: DataSource::Sample { reason },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    const SHEET: &str = "\
Category,Brand,Product,Barcode,SKU,Stock,In Production,Safety,Reorder Pt,Sales (wk),Sales (prev wk),Unit Cost
Outerwear,Northfield,Alpine Parka,8800001,NFDW5JK00420001,40,20,10,20,12,10,189
,,Ridge Coat,8800002,NFDW5CT00430002,25,0,10,20,8,9,220";

    #[test]
    fn test_ingest_text_is_live() {
        let outcome = ingest_text(SHEET, &Config::default(), as_of());
        assert_eq!(outcome.source, DataSource::Live);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.stats.rows_seen, 2);
    }

    #[test]
    fn test_header_only_sheet_is_live_and_empty() {
        // Real empty inventory, not an ingestion failure
        let header_only = SHEET.lines().next().unwrap();
        let outcome = ingest_text(header_only, &Config::default(), as_of());
        assert_eq!(outcome.source, DataSource::Live);
        assert!(outcome.records.is_empty());
    }

    #[tokio::test]
    async fn test_ingest_missing_file_falls_back_to_sample() {
        let config = Config::default();
        let outcome = ingest_file(Path::new("/nonexistent/export.csv"), &config, as_of())
            .await
            .unwrap();

        assert!(outcome.source.is_sample());
        assert!(!outcome.records.is_empty());
    }

    #[tokio::test]
    async fn test_ingest_missing_file_hard_error_without_fallback() {
        let config = Config {
            fallback_to_sample: false,
            ..Config::default()
        };
        let result = ingest_file(Path::new("/nonexistent/export.csv"), &config, as_of()).await;

        assert!(matches!(result, Err(Error::Ingestion { .. })));
    }

    #[tokio::test]
    async fn test_ingest_file_live_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SHEET.as_bytes()).unwrap();

        let outcome = ingest_file(file.path(), &Config::default(), as_of())
            .await
            .unwrap();
        assert_eq!(outcome.source, DataSource::Live);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[1].category, "Outerwear");
    }

    #[tokio::test]
    async fn test_ingest_blank_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"   \n  \n").unwrap();

        let outcome = ingest_file(file.path(), &Config::default(), as_of())
            .await
            .unwrap();
        assert!(outcome.source.is_sample());
    }
}
