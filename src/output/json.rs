//! JSON output formatter for machine processing

use crate::orchestrator::SyncOutcome;
use crate::output::text::ChangeKind;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a sync run
#[derive(Serialize)]
struct JsonOutput {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Path to the images file
    images_file: String,
    /// Whether the images file was rewritten
    file_modified: bool,
    /// Path to the report, absent in dry-run mode
    #[serde(skip_serializing_if = "Option::is_none")]
    report_file: Option<String>,
    /// Required updates sorted by constant name
    updates: Vec<JsonUpdate>,
}

/// JSON representation of an update
#[derive(Serialize)]
struct JsonUpdate {
    /// Constant name
    name: String,
    /// Fully qualified repository
    repository: String,
    /// Previous tag
    from: String,
    /// New tag
    to: String,
    /// major, minor, patch or ?
    change: &'static str,
}

impl JsonFormatter {
    fn to_json(outcome: &SyncOutcome) -> JsonOutput {
        JsonOutput {
            dry_run: outcome.dry_run,
            images_file: outcome.write_result.path.display().to_string(),
            file_modified: outcome.write_result.file_modified,
            report_file: outcome
                .report_path
                .as_ref()
                .map(|path| path.display().to_string()),
            updates: outcome
                .updates
                .iter()
                .map(|update| JsonUpdate {
                    name: update.name.clone(),
                    repository: update.qualified_repository(),
                    from: update.from_tag.clone(),
                    to: update.to_tag.clone(),
                    change: ChangeKind::from_tags(&update.from_tag, &update.to_tag).label(),
                })
                .collect(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &SyncOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = Self::to_json(outcome);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WriteResult;
    use crate::domain::ImageUpdate;
    use std::path::PathBuf;

    fn create_outcome(dry_run: bool) -> SyncOutcome {
        SyncOutcome {
            updates: vec![ImageUpdate::new("Go", "horusec-go", "v1.0.0", "v1.0.1")],
            write_result: WriteResult {
                path: PathBuf::from("images.go"),
                updates_applied: 1,
                file_modified: !dry_run,
            },
            report_path: (!dry_run).then(|| PathBuf::from("report.md")),
            dry_run,
        }
    }

    fn render(outcome: &SyncOutcome) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(outcome, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_format_json() {
        let json = render(&create_outcome(false));

        assert_eq!(json["dry_run"], false);
        assert_eq!(json["images_file"], "images.go");
        assert_eq!(json["file_modified"], true);
        assert_eq!(json["report_file"], "report.md");
        assert_eq!(json["updates"][0]["name"], "Go");
        assert_eq!(json["updates"][0]["repository"], "horuszup/horusec-go");
        assert_eq!(json["updates"][0]["from"], "v1.0.0");
        assert_eq!(json["updates"][0]["to"], "v1.0.1");
        assert_eq!(json["updates"][0]["change"], "patch");
    }

    #[test]
    fn test_format_json_dry_run_omits_report() {
        let json = render(&create_outcome(true));

        assert_eq!(json["dry_run"], true);
        assert_eq!(json["file_modified"], false);
        assert!(json.get("report_file").is_none());
    }
}
