//! Docker Hub adapter
//!
//! Lists repository tags through the Docker Hub v2 API.
//! API endpoint: https://hub.docker.com/v2/namespaces/{namespace}/repositories/{repository}/tags
//!
//! Results are paginated: each page carries a `results` array and a `next`
//! URL that is followed until it is absent or null.

use crate::domain::REGISTRY_NAMESPACE;
use crate::error::RegistryError;
use crate::registry::{HttpClient, TagSource};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// Docker Hub base URL
pub const DOCKER_HUB_URL: &str = "https://hub.docker.com";

/// Tags requested per page
const PAGE_SIZE: usize = 100;

/// Docker Hub adapter
pub struct DockerHubAdapter {
    client: HttpClient,
    base_url: String,
    namespace: String,
}

/// One page of the tag listing
#[derive(Debug, Deserialize)]
struct TagPage {
    /// Tag objects; only their `name` is used
    #[serde(default)]
    results: Option<Vec<serde_json::Value>>,
    /// URL of the following page
    #[serde(default)]
    next: Option<String>,
}

impl TagPage {
    fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .flatten()
            .filter_map(|result| result.get("name").and_then(serde_json::Value::as_str))
    }

    fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|url| !url.is_empty())
    }
}

impl DockerHubAdapter {
    /// Create a new Docker Hub adapter for the tracked namespace
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DOCKER_HUB_URL)
    }

    /// Create an adapter against another registry host speaking the same API
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            namespace: REGISTRY_NAMESPACE.to_string(),
        }
    }

    /// Build the URL of the first tag page for a repository
    fn build_first_page_url(&self, repository: &str) -> String {
        format!(
            "{}/v2/namespaces/{}/repositories/{}/tags?page_size={}",
            self.base_url, self.namespace, repository, PAGE_SIZE
        )
    }
}

#[async_trait]
impl TagSource for DockerHubAdapter {
    fn registry_name(&self) -> &'static str {
        "Docker Hub"
    }

    async fn fetch_tags(&self, repository: &str) -> Result<Vec<String>, RegistryError> {
        let mut tags = Vec::new();
        let mut visited = HashSet::new();
        let mut next_url = Some(self.build_first_page_url(repository));

        while let Some(url) = next_url.take() {
            if !visited.insert(url.clone()) {
                return Err(RegistryError::invalid_response(
                    repository,
                    self.registry_name(),
                    format!("pagination loops back to {}", url),
                ));
            }

            debug!(repository, page = visited.len(), %url, "fetching tag page");
            let page: TagPage = self
                .client
                .get_json(&url, repository, self.registry_name())
                .await?;

            tags.extend(page.tag_names().map(str::to_string));
            next_url = page.next_url().map(str::to_string);
        }

        debug!(repository, count = tags.len(), "fetched tags");
        Ok(tags)
    }
}
