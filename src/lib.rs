//! Stockpilot Library
//!
//! A Rust library for turning semi-structured inventory spreadsheet exports
//! into actionable reorder intelligence.
//!
//! This library provides tools for:
//! - Parsing delimited sheet exports with quoted fields and embedded delimiters
//! - Reconstructing records from merged-cell style sheets via forward-fill
//! - Decoding SKU-embedded metadata (season fit, item type, lead time)
//! - Forecasting stock-out and suggested reorder dates per product
//! - Ranking best sellers and urgent reorders over the reconstructed set
//! - Exporting flat reports and a capped advisor context for downstream
//!   recommendation services

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod insights;
        pub mod pipeline;
        pub mod record_builder;
        pub mod report;
        pub mod sample_data;
        pub mod sheet_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Forecast, InventoryRecord, ItemType, Season, StockStatus};
pub use app::services::pipeline::{DataSource, IngestOutcome};
pub use config::Config;

/// Result type alias for stockpilot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for stockpilot operations
///
/// The derivation core itself never fails on malformed data (rows are
/// defaulted or dropped, per the ingestion policy); these variants cover
/// I/O, configuration, export, and hard ingestion failures when the sample
/// fallback has been disabled.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Sheet could not be ingested and fallback was disabled
    #[error("Ingestion failed for '{source_name}': {reason}")]
    Ingestion { source_name: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Report export error
    #[error("Report export error: {message}")]
    ReportExport {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an ingestion error with source context
    pub fn ingestion(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Ingestion {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a report export error with optional CSV source
    pub fn report_export(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::ReportExport {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::ReportExport {
            message: "CSV export failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
