//! Text output formatter for human-readable display
//!
//! This module provides:
//! - The console summary of a sync run
//! - Semantic version change indication (major/minor/patch) in verbose mode
//! - File locations in verbose mode

use crate::domain::{ImageUpdate, StableVersion};
use crate::orchestrator::SyncOutcome;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Kind of tag bump between two stable releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Downgrade, or a tag that is not a stable release
    Unknown,
}

impl ChangeKind {
    /// Classify the change between two tags
    pub fn from_tags(from: &str, to: &str) -> Self {
        match (StableVersion::parse_tag(from), StableVersion::parse_tag(to)) {
            (Some(old), Some(new)) if new > old => {
                if new.major() != old.major() {
                    ChangeKind::Major
                } else if new.minor() != old.minor() {
                    ChangeKind::Minor
                } else {
                    ChangeKind::Patch
                }
            }
            _ => ChangeKind::Unknown,
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Major => "major",
            ChangeKind::Minor => "minor",
            ChangeKind::Patch => "patch",
            ChangeKind::Unknown => "?",
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            ChangeKind::Major => self.label().red().bold().to_string(),
            ChangeKind::Minor => self.label().yellow().to_string(),
            ChangeKind::Patch => self.label().green().to_string(),
            ChangeKind::Unknown => self.label().dimmed().to_string(),
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    fn dry_run_prefix(&self) -> String {
        if !self.dry_run {
            String::new()
        } else if self.color {
            format!("{} ", "(dry-run)".cyan())
        } else {
            "(dry-run) ".to_string()
        }
    }

    fn format_update_line(&self, update: &ImageUpdate, writer: &mut dyn Write) -> std::io::Result<()> {
        let kind = ChangeKind::from_tags(&update.from_tag, &update.to_tag);
        let suffix = match (self.verbosity, self.color) {
            (Verbosity::Verbose, true) => format!(" [{}]", kind.colored_label()),
            (Verbosity::Verbose, false) => format!(" [{}]", kind.label()),
            _ => String::new(),
        };

        if self.color {
            writeln!(
                writer,
                "- {}: {} -> {}{}",
                update.name.bold(),
                update.from_tag.dimmed(),
                update.to_tag.bright_white().bold(),
                suffix
            )
        } else {
            writeln!(
                writer,
                "- {}: {} -> {}{}",
                update.name, update.from_tag, update.to_tag, suffix
            )
        }
    }

    fn format_locations(&self, outcome: &SyncOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let state = if outcome.write_result.file_modified {
            "modified"
        } else {
            "unchanged"
        };
        writeln!(writer)?;
        writeln!(
            writer,
            "Images file: {} ({})",
            outcome.write_result.path.display(),
            state
        )?;
        match &outcome.report_path {
            Some(path) => writeln!(writer, "Report: {}", path.display()),
            None => writeln!(writer, "Report: not written (dry-run)"),
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &SyncOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }

        let prefix = self.dry_run_prefix();
        if !outcome.has_updates() {
            writeln!(writer, "{}No scanner image updates found.", prefix)?;
        } else {
            writeln!(writer, "{}Scanner images updated:", prefix)?;
            for update in &outcome.updates {
                self.format_update_line(update, writer)?;
            }
        }

        if self.verbosity == Verbosity::Verbose {
            self.format_locations(outcome, writer)?;
        }

        Ok(())
    }
}
