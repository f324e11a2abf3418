//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable per-request timeout and User-Agent
//! - Status code mapping to registry errors (404, 429, other failures)
//! - JSON decoding of response bodies
//!
//! Requests are never retried here; a failed request fails the lookup.

use crate::error::RegistryError;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Default timeout for HTTP requests (15 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("scanner-governance/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP client with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, RegistryError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                RegistryError::network_error(
                    "",
                    "HTTP client",
                    format!("failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request with error context
    pub async fn get_with_context(
        &self,
        url: &str,
        repository: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Self::request_error(e, repository, registry))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(RegistryError::repository_not_found(repository, registry)),
            StatusCode::TOO_MANY_REQUESTS => Err(RegistryError::rate_limit_exceeded(registry)),
            status if !status.is_success() => Err(RegistryError::network_error(
                repository,
                registry,
                format!("HTTP {}", status),
            )),
            _ => Ok(response),
        }
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        repository: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get_with_context(url, repository, registry).await?;

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                RegistryError::invalid_response(
                    repository,
                    registry,
                    format!("failed to parse JSON: {}", e),
                )
            } else {
                Self::request_error(e, repository, registry)
            }
        })
    }

    fn request_error(error: reqwest::Error, repository: &str, registry: &str) -> RegistryError {
        if error.is_timeout() {
            RegistryError::timeout(repository, registry)
        } else {
            RegistryError::network_error(repository, registry, error.to_string())
        }
    }
}
