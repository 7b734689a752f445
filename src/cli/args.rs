//! Command-line argument definitions for stockpilot
//!
//! This module defines the CLI interface using the clap derive API. Each
//! subcommand carries its own validation and log-level mapping.

use crate::constants;
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the stockpilot inventory analyzer
///
/// Ingests an inventory sheet export and derives reorder-risk
/// classifications, stock-out forecasts and suggested reorder dates.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stockpilot",
    version,
    about = "Derive reorder risk, stock-out forecasts and reorder dates from inventory sheet exports",
    long_about = "Ingests a human-maintained inventory spreadsheet export (delimited text with \
                  merged-cell style hierarchical columns and metadata-bearing SKUs) and derives, \
                  per product, a reorder-risk classification, a sales-growth signal, a forecast \
                  stock-out date and a recommended reorder date, plus best-seller and \
                  urgent-reorder rankings."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze a sheet export and print the derived views (default command)
    Analyze(AnalyzeArgs),
    /// Export the flattened report or the advisor context
    Export(ExportArgs),
}

/// Arguments shared by ingestion-driven commands
#[derive(Debug, Clone, Parser)]
pub struct IngestArgs {
    /// Input path to the sheet export
    ///
    /// Delimited text with an optional header row. If not specified, the
    /// built-in sample sheet is analyzed instead.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input path to the sheet export"
    )]
    pub input_path: Option<PathBuf>,

    /// Field delimiter used by the export
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value = ",",
        help = "Field delimiter used by the export"
    )]
    pub delimiter: char,

    /// Treat the first row as data instead of a header
    #[arg(long = "no-header", help = "Treat the first row as data, not a header")]
    pub no_header: bool,

    /// Disable the sample-data fallback
    ///
    /// By default an unreadable or empty source substitutes the built-in
    /// sample sheet (and the output says so). With this flag, acquisition
    /// failure is a hard error instead.
    #[arg(long = "no-fallback", help = "Fail hard instead of substituting sample data")]
    pub no_fallback: bool,

    /// Evaluation date for seasonal fit and forecasts
    ///
    /// Defaults to today. Injected rather than read from the clock inside
    /// the pipeline, so results are reproducible.
    #[arg(
        long = "as-of",
        value_name = "YYYY-MM-DD",
        help = "Evaluation date for seasonal fit and forecasts (defaults to today)"
    )]
    pub as_of: Option<NaiveDate>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl IngestArgs {
    /// Validate ingestion arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == constants::QUOTE_CHAR {
            return Err(Error::configuration(
                "Delimiter cannot be the quote character".to_string(),
            ));
        }

        // With fallback enabled a missing input simply substitutes the
        // sample; without it, catch the mistake before running.
        if self.no_fallback {
            match &self.input_path {
                None => {
                    return Err(Error::configuration(
                        "--no-fallback requires an input path".to_string(),
                    ));
                }
                Some(path) if !path.exists() => {
                    return Err(Error::configuration(format!(
                        "Input path does not exist: {}",
                        path.display()
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// The evaluation date: explicit --as-of, or today
    pub fn resolve_as_of(&self) -> NaiveDate {
        self.as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,

    /// Size of the best-seller and urgent-reorder slices
    #[arg(
        long = "top",
        value_name = "COUNT",
        default_value_t = constants::URGENT_REORDER_LIMIT,
        help = "Number of records shown in each ranking"
    )]
    pub top: usize,

    /// Record ids already actioned (excluded from the urgent ranking)
    ///
    /// Comma-separated list, e.g. `row-3,row-7`. Ownership of this state
    /// lives with the caller; it is accepted here only as a filter input.
    #[arg(
        long = "actioned",
        value_name = "LIST",
        help = "Comma-separated record ids to exclude from the urgent ranking"
    )]
    pub actioned: Option<IdList>,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments
    pub fn validate(&self) -> Result<()> {
        self.ingest.validate()?;

        if self.top == 0 {
            return Err(Error::configuration(
                "Ranking size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            self.ingest.get_log_level()
        }
    }

    /// The actioned-id exclusion set
    pub fn actioned_ids(&self) -> std::collections::HashSet<String> {
        self.actioned
            .as_ref()
            .map(|list| list.ids.iter().cloned().collect())
            .unwrap_or_default()
    }
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    #[command(flatten)]
    pub ingest: IngestArgs,

    /// What to export
    #[arg(
        long = "kind",
        value_enum,
        default_value = "report",
        help = "What to export: the flattened report CSV or the advisor context JSON"
    )]
    pub kind: ExportKind,

    /// Output file for the export
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the export"
    )]
    pub output_file: Option<PathBuf>,
}

impl ExportArgs {
    /// Validate the export command arguments
    pub fn validate(&self) -> Result<()> {
        self.ingest.validate()?;

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Output format options for the analyze command
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Export kinds for the export command
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    /// Flattened delimited-text report, one line per record
    Report,
    /// Capped advisor-context JSON for the recommendation service
    Advisor,
}

/// Wrapper for parsing comma-separated record-id lists
#[derive(Debug, Clone)]
pub struct IdList {
    pub ids: Vec<String>,
}

impl FromStr for IdList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let ids: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if ids.is_empty() {
            return Err(Error::configuration(
                "Actioned id list cannot be empty".to_string(),
            ));
        }

        Ok(IdList { ids })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}
