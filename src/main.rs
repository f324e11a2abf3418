//! scanner-governance - Scanner image tag updater CLI tool
//!
//! Bumps every tracked scanner image constant to the latest stable tag on
//! Docker Hub and writes a markdown report for the pull request body.

use clap::Parser;
use scanner_governance::cli::CliArgs;
use scanner_governance::orchestrator::Orchestrator;
use scanner_governance::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr diagnostics subscriber
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "scanner_governance=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    if args.verbose {
        eprintln!("scanner-governance v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Images file: {}", args.images_file.display());
        eprintln!("Registry: {}", args.registry_url);
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let orchestrator = Orchestrator::new(args.clone())?;
    let outcome = orchestrator.run().await?;

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.dry_run);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&outcome, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
