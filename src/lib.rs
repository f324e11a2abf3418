//! scanner-governance - Scanner image tag updater library
//!
//! This library keeps the scanner image constants of a source file pinned
//! to the latest stable release published on the container registry:
//! - Scans the constants file for tracked image references
//! - Resolves the highest `vMAJOR.MINOR.PATCH` tag of each repository
//! - Rewrites only the outdated tags and renders a markdown report

pub mod cli;
pub mod constants;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod registry;
pub mod update;
