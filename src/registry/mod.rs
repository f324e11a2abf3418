//! Registry adapters for fetching image tags
//!
//! This module provides:
//! - HTTP client shared foundation
//! - Docker Hub tag listing adapter (paginated)

mod client;
mod docker_hub;

pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use docker_hub::{DockerHubAdapter, DOCKER_HUB_URL};

use crate::error::RegistryError;
use async_trait::async_trait;

/// Source of published tags for repositories under the tracked namespace
#[async_trait]
pub trait TagSource: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch every tag ever published for a repository, across all pages
    ///
    /// The result is unordered and may contain duplicates.
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError>;
}
