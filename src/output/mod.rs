//! Output formatting for sync results
//!
//! This module provides:
//! - The markdown governance report used as a pull request body
//! - Text output for human-readable display
//! - JSON output for machine processing

mod json;
mod report;
mod text;

pub use json::JsonFormatter;
pub use report::{render_report, write_report, REPORT_TIMESTAMP_FORMAT};
pub use text::{ChangeKind, TextFormatter};

use crate::orchestrator::SyncOutcome;
use std::io::{IsTerminal, Write};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No console summary
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with file locations
    Verbose,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Whether this is a dry-run
    pub dry_run: bool,
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, verbose: bool, quiet: bool, dry_run: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Self {
            format,
            verbosity,
            dry_run,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the outcome of a sync run
    fn format(&self, outcome: &SyncOutcome, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(
            config.verbosity,
            config.dry_run,
            std::io::stdout().is_terminal(),
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
