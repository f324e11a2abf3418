//! CLI argument parsing module for scanner-governance

use crate::registry::DOCKER_HUB_URL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Default location of the images constants file
pub const DEFAULT_IMAGES_FILE: &str = "internal/enums/images/images.go";

/// Default location of the markdown report
pub const DEFAULT_REPORT_FILE: &str = ".scanner-governance-report.md";

/// Parse an HTTP timeout given in whole seconds (at least 1)
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let seconds: u64 = s
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    if seconds == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(seconds))
}

/// Parse the registry lookup concurrency (at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let jobs: usize = s
        .parse()
        .map_err(|_| format!("invalid number of jobs: {}", s))?;
    if jobs == 0 {
        return Err("jobs must be at least 1".to_string());
    }
    Ok(jobs)
}

/// Bump scanner image tags to the latest stable registry release
#[derive(Parser, Debug, Clone)]
#[command(
    name = "scanner-governance",
    version,
    about = "Update scanner image tags to the latest stable release"
)]
pub struct CliArgs {
    /// Path to the images constants file
    #[arg(long, default_value = DEFAULT_IMAGES_FILE)]
    pub images_file: PathBuf,

    /// Path to the markdown report used as pull request body
    #[arg(long, default_value = DEFAULT_REPORT_FILE)]
    pub report_file: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, value_parser = parse_timeout, default_value = "15")]
    pub timeout: Duration,

    /// Registry base URL
    #[arg(long, default_value = DOCKER_HUB_URL)]
    pub registry_url: String,

    /// Maximum number of concurrent registry lookups
    #[arg(long, value_parser = parse_jobs, default_value = "1")]
    pub jobs: usize,

    // General options
    /// Dry run mode - show what would be updated without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - no progress or summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Whether the progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["scanner-governance"]);
        assert_eq!(args.images_file, PathBuf::from(DEFAULT_IMAGES_FILE));
        assert_eq!(args.report_file, PathBuf::from(DEFAULT_REPORT_FILE));
        assert_eq!(args.timeout, Duration::from_secs(15));
        assert_eq!(args.registry_url, "https://hub.docker.com");
        assert_eq!(args.jobs, 1);
        assert!(!args.dry_run);
        assert!(!args.json);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_file_arguments() {
        let args = CliArgs::parse_from([
            "scanner-governance",
            "--images-file",
            "/tmp/images.go",
            "--report-file",
            "/tmp/report.md",
        ]);
        assert_eq!(args.images_file, PathBuf::from("/tmp/images.go"));
        assert_eq!(args.report_file, PathBuf::from("/tmp/report.md"));
    }

    #[test]
    fn test_timeout() {
        let args = CliArgs::parse_from(["scanner-governance", "--timeout", "30"]);
        assert_eq!(args.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_timeout_rejects_zero_and_garbage() {
        assert!(CliArgs::try_parse_from(["scanner-governance", "--timeout", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["scanner-governance", "--timeout", "abc"]).is_err());
        assert!(CliArgs::try_parse_from(["scanner-governance", "--timeout", "-1"]).is_err());
    }

    #[test]
    fn test_jobs() {
        let args = CliArgs::parse_from(["scanner-governance", "--jobs", "4"]);
        assert_eq!(args.jobs, 4);
        assert!(CliArgs::try_parse_from(["scanner-governance", "--jobs", "0"]).is_err());
    }

    #[test]
    fn test_registry_url() {
        let args =
            CliArgs::parse_from(["scanner-governance", "--registry-url", "http://127.0.0.1:9"]);
        assert_eq!(args.registry_url, "http://127.0.0.1:9");
    }

    #[test]
    fn test_dry_run_flags() {
        let args = CliArgs::parse_from(["scanner-governance", "-n"]);
        assert!(args.dry_run);

        let args = CliArgs::parse_from(["scanner-governance", "--dry-run"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_quiet_flags() {
        let args = CliArgs::parse_from(["scanner-governance", "-q"]);
        assert!(args.quiet);
        assert!(!args.show_progress());
    }

    #[test]
    fn test_json_disables_progress() {
        let args = CliArgs::parse_from(["scanner-governance", "--json"]);
        assert!(args.json);
        assert!(!args.show_progress());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["scanner-governance", "--verbose", "--quiet"]).is_err());
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout(" 5 "), Ok(Duration::from_secs(5)));
        assert!(parse_timeout("").is_err());
        assert!(parse_timeout("1.5").is_err());
    }

    #[test]
    fn test_parse_jobs() {
        assert_eq!(parse_jobs("2"), Ok(2));
        assert!(parse_jobs("0").is_err());
    }
}
