//! Update planning for tracked scanner images
//!
//! This module provides:
//! - Latest stable tag selection from registry tags
//! - The update planner deciding which constants need a new tag
//!
//! Planning is all-or-nothing: the first failure aborts the plan, and the
//! resulting updates are always sorted by constant name.

mod selector;

pub use selector::latest_stable;

use crate::constants::ConstantTable;
use crate::domain::{ImageReference, ImageUpdate, StableVersion, TrackedImage};
use crate::error::{AppError, ConstantsError, PlanError};
use crate::progress::Progress;
use crate::registry::TagSource;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Default number of concurrent registry lookups
pub const DEFAULT_CONCURRENCY: usize = 1;

/// A tracked constant whose current tag is known, awaiting its registry lookup
#[derive(Debug)]
struct PendingLookup {
    name: &'static str,
    repository: &'static str,
    current_tag: String,
}

impl PendingLookup {
    fn into_update(self, latest_tag: String) -> Option<ImageUpdate> {
        if self.current_tag == latest_tag {
            debug!(name = self.name, tag = %latest_tag, "already at latest");
            return None;
        }
        Some(ImageUpdate::new(
            self.name,
            self.repository,
            self.current_tag,
            latest_tag,
        ))
    }
}

/// Planner that compares recorded tags against the registry
pub struct UpdatePlanner {
    /// Registry tag source
    source: Arc<dyn TagSource>,
    /// Maximum registry lookups in flight
    concurrency: usize,
}

impl UpdatePlanner {
    /// Create a planner performing one lookup at a time
    pub fn new(source: Arc<dyn TagSource>) -> Self {
        Self {
            source,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Allow up to `concurrency` registry lookups in flight (minimum 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Compute the sorted list of required updates
    pub async fn plan(
        &self,
        tracked: &[TrackedImage],
        constants: &ConstantTable,
    ) -> Result<Vec<ImageUpdate>, AppError> {
        self.plan_with_progress(tracked, constants, &Progress::disabled())
            .await
    }

    /// Compute the sorted list of required updates, reporting each lookup
    pub async fn plan_with_progress(
        &self,
        tracked: &[TrackedImage],
        constants: &ConstantTable,
        progress: &Progress,
    ) -> Result<Vec<ImageUpdate>, AppError> {
        // Local checks first so malformed files fail before any request
        let lookups = tracked
            .iter()
            .map(|image| -> Result<PendingLookup, ConstantsError> {
                Ok(PendingLookup {
                    name: image.name,
                    repository: image.repository,
                    current_tag: current_tag(constants, image.name)?.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut pending = lookups.into_iter();
        let mut tasks = JoinSet::new();
        let mut updates = Vec::new();

        loop {
            while tasks.len() < self.concurrency {
                let Some(lookup) = pending.next() else {
                    break;
                };
                progress.set_message(&format!("Checking {}", lookup.repository));
                let source = Arc::clone(&self.source);
                tasks.spawn(async move {
                    let latest = fetch_latest_tag(source.as_ref(), lookup.repository).await?;
                    Ok::<_, AppError>(lookup.into_update(latest))
                });
            }

            let Some(joined) = tasks.join_next().await else {
                break;
            };
            let outcome = joined.map_err(|e| PlanError::TaskFailed {
                message: e.to_string(),
            })?;
            if let Some(update) = outcome? {
                updates.push(update);
            }
            progress.inc();
        }

        updates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(updates)
    }
}

/// Extract the tag currently recorded for a tracked constant
pub fn current_tag<'a>(constants: &'a ConstantTable, name: &str) -> Result<&'a str, ConstantsError> {
    let entry = constants
        .get(name)
        .ok_or_else(|| ConstantsError::missing_constant(name))?;
    let reference = ImageReference::parse(&entry.value)
        .ok_or_else(|| ConstantsError::invalid_image_reference(name, &entry.value))?;
    Ok(reference.tag())
}

/// Resolve the latest stable tag published for a repository
pub async fn fetch_latest_tag(source: &dyn TagSource, repository: &str) -> Result<String, AppError> {
    let tags = source.fetch_tags(repository).await?;
    let latest = latest_stable(&tags)
        .ok_or_else(|| PlanError::no_stable_version(repository))?
        .to_tag();

    if !StableVersion::is_stable_tag(&latest) {
        return Err(PlanError::unstable_latest_tag(repository, latest).into());
    }

    info!(repository, latest = %latest, "resolved latest stable tag");
    Ok(latest)
}
