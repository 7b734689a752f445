//! Shared components for CLI commands
//!
//! Logging setup and the run statistics reported back to `main`.

use crate::Result;
use crate::app::services::pipeline::{self, DataSource, IngestOutcome};
use crate::app::services::sample_data;
use crate::cli::args::IngestArgs;
use crate::config::Config;
use tracing::{debug, info};

/// Statistics reported by a command run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of records in the working set
    pub records: usize,
    /// Number of data rows seen during reconstruction
    pub rows_seen: usize,
    /// Number of rows dropped (short or nameless)
    pub rows_dropped: usize,
    /// Whether the sample fallback was substituted for the requested source
    pub fallback_used: bool,
    /// Total command time
    pub duration: std::time::Duration,
}

impl RunStats {
    /// Build run statistics from an ingestion outcome
    pub fn from_outcome(outcome: &IngestOutcome, duration: std::time::Duration) -> Self {
        Self {
            records: outcome.records.len(),
            rows_seen: outcome.stats.rows_seen,
            rows_dropped: outcome.stats.rows_dropped(),
            fallback_used: outcome.source.is_sample(),
            duration,
        }
    }
}

/// Build the pipeline configuration from ingestion arguments
pub fn config_from(args: &IngestArgs) -> Config {
    Config {
        delimiter: args.delimiter,
        has_header: !args.no_header,
        fallback_to_sample: !args.no_fallback,
        ..Config::default()
    }
}

/// Acquire the working record set per the ingestion arguments
///
/// With an input path, runs file ingestion (fallback policy included).
/// Without one, the built-in sample sheet is used directly and the outcome
/// says so.
pub async fn acquire(args: &IngestArgs) -> Result<IngestOutcome> {
    let config = config_from(args);
    config.validate()?;
    let as_of = args.resolve_as_of();

    match &args.input_path {
        Some(path) => pipeline::ingest_file(path, &config, as_of).await,
        None => {
            info!("No input path provided, analyzing the built-in sample sheet");
            let result = sample_data::sample_records(&config, as_of);
            Ok(IngestOutcome {
                records: result.records,
                stats: result.stats,
                source: DataSource::Sample {
                    reason: "no input path provided".to_string(),
                },
            })
        }
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stockpilot={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
