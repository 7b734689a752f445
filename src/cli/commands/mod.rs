//! Command implementations for the stockpilot CLI
//!
//! Each command is implemented in its own module:
//! - `analyze`: ingest a sheet export and print the derived views
//! - `export`: ingest and write the report CSV or advisor context JSON

pub mod analyze;
pub mod export;
pub mod shared;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for stockpilot
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Analyze(analyze_args) => analyze::run_analyze(analyze_args).await,
        Commands::Export(export_args) => export::run_export(export_args).await,
    }
}
