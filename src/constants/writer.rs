//! Constants file patching and writing
//!
//! This module provides:
//! - Tag patching that rewrites only the tag suffix of each updated value
//! - ConstantsWriter applying a plan to the file on disk
//! - Dry-run mode support (no actual file modifications)
//!
//! The file is replaced as a whole buffer, and only when at least one
//! update exists.

use super::{join_lines, split_lines, ConstantTable};
use crate::domain::{ImageReference, ImageUpdate};
use crate::error::ConstantsError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Return a copy of the line buffer with every update's tag replaced
///
/// Only the first occurrence of the original value on its line changes;
/// indentation, quoting and trailing content are preserved byte for byte.
pub fn apply_updates(
    lines: &[String],
    constants: &ConstantTable,
    updates: &[ImageUpdate],
) -> Result<Vec<String>, ConstantsError> {
    let mut updated = lines.to_vec();

    for update in updates {
        let entry = constants
            .get(&update.name)
            .ok_or_else(|| ConstantsError::missing_constant(&update.name))?;
        let reference = ImageReference::parse(&entry.value)
            .ok_or_else(|| ConstantsError::invalid_image_reference(&update.name, &entry.value))?;
        let new_value = reference.with_tag(&update.to_tag);

        let line = updated
            .get_mut(entry.line)
            .ok_or_else(|| ConstantsError::missing_constant(&update.name))?;
        *line = line.replacen(&entry.value, &new_value, 1);
    }

    Ok(updated)
}

/// Read the constants file into a line buffer
pub fn read_lines(path: &Path) -> Result<Vec<String>, ConstantsError> {
    if !path.exists() {
        return Err(ConstantsError::not_found(path));
    }
    let content = fs::read_to_string(path).map_err(|e| ConstantsError::read_error(path, e))?;
    Ok(split_lines(&content))
}

/// Replace the constants file with a line buffer
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), ConstantsError> {
    fs::write(path, join_lines(lines)).map_err(|e| ConstantsError::write_error(path, e))
}

/// Writer for the constants file that applies tag updates
pub struct ConstantsWriter {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

/// Result of applying updates to the constants file
#[derive(Debug)]
pub struct WriteResult {
    /// Path to the constants file
    pub path: PathBuf,
    /// Number of updates applied to the buffer
    pub updates_applied: usize,
    /// Whether the file was actually rewritten
    pub file_modified: bool,
}

impl WriteResult {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            updates_applied: 0,
            file_modified: false,
        }
    }
}

impl ConstantsWriter {
    /// Create a new ConstantsWriter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Patch the buffer and rewrite the file if anything changed
    pub fn apply(
        &self,
        path: &Path,
        lines: &[String],
        constants: &ConstantTable,
        updates: &[ImageUpdate],
    ) -> Result<WriteResult, ConstantsError> {
        let mut result = WriteResult::new(path);
        if updates.is_empty() {
            return Ok(result);
        }

        let patched = apply_updates(lines, constants, updates)?;
        result.updates_applied = updates.len();

        if !self.dry_run {
            write_lines(path, &patched)?;
            result.file_modified = true;
            info!(path = %path.display(), updates = updates.len(), "rewrote images file");
        }

        Ok(result)
    }
}
