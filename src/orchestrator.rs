//! Sync orchestrator for coordinating the entire update workflow
//!
//! This module provides:
//! - Workflow coordination: read → parse → plan → patch → report
//! - Registry lookups with optional concurrency
//! - Dry-run mode support
//! - All-or-nothing error handling: files are only written once the whole
//!   plan has succeeded

use crate::cli::CliArgs;
use crate::constants::{parse_constants, read_lines, ConstantsWriter, WriteResult};
use crate::domain::{ImageUpdate, TrackedImage, TRACKED_IMAGES};
use crate::error::{AppError, RegistryError};
use crate::output::write_report;
use crate::progress::Progress;
use crate::registry::{DockerHubAdapter, HttpClient, TagSource};
use crate::update::UpdatePlanner;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Orchestrator for coordinating the sync workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Registry tag source
    source: Arc<dyn TagSource>,
    /// Tracked constants and their repositories
    tracked: &'static [TrackedImage],
}

/// Result of a successful sync run
#[derive(Debug)]
pub struct SyncOutcome {
    /// Required updates, sorted by constant name
    pub updates: Vec<ImageUpdate>,
    /// What happened to the images file
    pub write_result: WriteResult,
    /// Where the report was written (None in dry-run mode)
    pub report_path: Option<PathBuf>,
    /// Whether this was a dry-run
    pub dry_run: bool,
}

impl SyncOutcome {
    /// Returns true if any image tag changed
    pub fn has_updates(&self) -> bool {
        !self.updates.is_empty()
    }
}

impl Orchestrator {
    /// Create a new orchestrator querying the configured registry
    pub fn new(args: CliArgs) -> Result<Self, RegistryError> {
        let client = HttpClient::with_timeout(args.timeout)?;
        let source = Arc::new(DockerHubAdapter::with_base_url(client, &args.registry_url));
        Ok(Self::with_source(args, source))
    }

    /// Create an orchestrator with a custom tag source
    pub fn with_source(args: CliArgs, source: Arc<dyn TagSource>) -> Self {
        Self {
            args,
            source,
            tracked: TRACKED_IMAGES,
        }
    }

    /// Replace the tracked image table
    pub fn with_tracked(mut self, tracked: &'static [TrackedImage]) -> Self {
        self.tracked = tracked;
        self
    }

    /// Run the sync workflow
    pub async fn run(&self) -> Result<SyncOutcome, AppError> {
        self.run_with_progress(self.args.show_progress()).await
    }

    /// Run the sync workflow with optional progress display
    pub async fn run_with_progress(&self, show_progress: bool) -> Result<SyncOutcome, AppError> {
        let mut progress = Progress::new(show_progress);
        let images_file = &self.args.images_file;

        // Step 1: Read and scan the constants file
        let lines = read_lines(images_file)?;
        let constants = parse_constants(&lines);
        debug!(
            path = %images_file.display(),
            lines = lines.len(),
            constants = constants.len(),
            "parsed images file"
        );

        // Step 2: Plan updates against the registry
        progress.start(self.tracked.len() as u64, "Checking scanner images");
        let planner = UpdatePlanner::new(Arc::clone(&self.source)).with_concurrency(self.args.jobs);
        let planned = planner
            .plan_with_progress(self.tracked, &constants, &progress)
            .await;
        progress.finish_and_clear();
        let updates = planned?;

        // Step 3: Patch the images file (only when something changed)
        let writer = ConstantsWriter::new(self.args.dry_run);
        let write_result = writer.apply(images_file, &lines, &constants, &updates)?;

        // Step 4: Write the report
        let report_path = if self.args.dry_run {
            None
        } else {
            write_report(&self.args.report_file, &updates, Utc::now())?;
            Some(self.args.report_file.clone())
        };

        Ok(SyncOutcome {
            updates,
            write_result,
            report_path,
            dry_run: self.args.dry_run,
        })
    }
}
