//! Export command: write the flattened report or the advisor context

use std::time::Instant;
use tracing::info;

use super::shared::{self, RunStats};
use crate::app::services::report;
use crate::cli::args::{ExportArgs, ExportKind};
use crate::{Error, Result};

/// Run the export command
pub async fn run_export(args: ExportArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    shared::setup_logging(args.ingest.get_log_level())?;
    args.validate()?;

    let outcome = shared::acquire(&args.ingest).await?;

    let payload = match args.kind {
        ExportKind::Report => report::export_csv(&outcome.records)?,
        ExportKind::Advisor => report::advisor_context_json(&outcome.records)?,
    };

    match &args.output_file {
        Some(path) => {
            tokio::fs::write(path, payload.as_bytes())
                .await
                .map_err(|e| {
                    Error::io(format!("Failed to write export to {}", path.display()), e)
                })?;
            info!("Export written to {}", path.display());
        }
        None => {
            print!("{}", payload);
        }
    }

    Ok(RunStats::from_outcome(&outcome, start_time.elapsed()))
}
