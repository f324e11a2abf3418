//! Markdown governance report
//!
//! Rendered on every successful run and used as the pull request body
//! when image tags changed.

use crate::domain::ImageUpdate;
use crate::error::ReportError;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

/// Timestamp format of the `Generated at` line
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%SZ";

/// Render the report for a list of updates
pub fn render_report(updates: &[ImageUpdate], generated_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        "## Scanner Governance".to_string(),
        String::new(),
        format!(
            "Generated at: `{}`",
            generated_at.format(REPORT_TIMESTAMP_FORMAT)
        ),
        String::new(),
    ];

    if updates.is_empty() {
        lines.push("No scanner image updates were detected.".to_string());
        lines.push(String::new());
    } else {
        lines.push("Updated image tags:".to_string());
        lines.push(String::new());
        lines.extend(updates.iter().map(|update| {
            format!(
                "- `{}`: `{}` -> `{}`",
                update.qualified_repository(),
                update.from_tag,
                update.to_tag
            )
        }));
        lines.push(String::new());
        lines.push("Regression validation is executed by CI before opening this PR.".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the report and write it to disk, replacing any previous report
pub fn write_report(
    path: &Path,
    updates: &[ImageUpdate],
    generated_at: DateTime<Utc>,
) -> Result<(), ReportError> {
    fs::write(path, render_report(updates, generated_at)).map_err(|source| {
        ReportError::WriteError {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!(path = %path.display(), "wrote governance report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap()
    }

    #[test]
    fn test_render_no_updates() {
        let report = render_report(&[], timestamp());
        assert_eq!(
            report,
            "## Scanner Governance\n\
             \n\
             Generated at: `2026-03-04 05:06:07Z`\n\
             \n\
             No scanner image updates were detected.\n"
        );
    }

    #[test]
    fn test_render_with_updates_in_given_order() {
        let updates = vec![
            ImageUpdate::new("Go", "horusec-go", "v1.0.0", "v1.2.0"),
            ImageUpdate::new("Shell", "horusec-shell", "v1.0.0", "v1.0.1"),
        ];

        let report = render_report(&updates, timestamp());

        assert_eq!(
            report,
            "## Scanner Governance\n\
             \n\
             Generated at: `2026-03-04 05:06:07Z`\n\
             \n\
             Updated image tags:\n\
             \n\
             - `horuszup/horusec-go`: `v1.0.0` -> `v1.2.0`\n\
             - `horuszup/horusec-shell`: `v1.0.0` -> `v1.0.1`\n\
             \n\
             Regression validation is executed by CI before opening this PR.\n"
        );
    }

    #[test]
    fn test_write_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.md");

        write_report(&path, &[], timestamp()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("No scanner image updates were detected."));
    }

    #[test]
    fn test_write_report_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.md");

        let err = write_report(&path, &[], timestamp()).unwrap_err();
        assert!(err.to_string().contains("failed to write report file"));
    }
}
