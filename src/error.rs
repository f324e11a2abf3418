//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConstantsError: Issues with the constants file (missing, unreadable, malformed entries)
//! - RegistryError: Issues with registry communication
//! - PlanError: Issues while resolving the latest stable tag per repository
//! - ReportError: Failures writing the markdown report
//!
//! Every error is fatal to a run; nothing is written once one occurs.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Constants file related errors
    #[error(transparent)]
    Constants(#[from] ConstantsError),

    /// Registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Update planning errors
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Report writing errors
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors related to the constants file holding the image references
#[derive(Error, Debug)]
pub enum ConstantsError {
    /// Constants file not found
    #[error("images file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read the constants file
    #[error("failed to read images file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the constants file
    #[error("failed to write images file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tracked constant has no assignment line in the file
    #[error("constant {name} not found in images file")]
    MissingConstant { name: String },

    /// The constant's value is not of the form `<image>:<tag>`
    #[error("invalid image reference format for {name}: {value}")]
    InvalidImageReference { name: String, value: String },
}

/// Errors related to registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Repository not found in registry
    #[error("repository '{repository}' not found in {registry}")]
    RepositoryNotFound {
        repository: String,
        registry: String,
    },

    /// Network request failed
    #[error("failed to fetch tags for '{repository}' from {registry}: {message}")]
    NetworkError {
        repository: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{repository}': {message}")]
    InvalidResponse {
        repository: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching tags for '{repository}' from {registry}")]
    Timeout {
        repository: String,
        registry: String,
    },
}

/// Errors raised while computing the update plan
#[derive(Error, Debug)]
pub enum PlanError {
    /// No tag of the repository matches `vMAJOR.MINOR.PATCH`
    #[error("no stable semantic tag found for {repository}")]
    NoStableVersion { repository: String },

    /// The resolved latest tag failed stable re-validation
    #[error("latest tag is not stable semver: {repository}:{tag}")]
    UnstableLatestTag { repository: String, tag: String },

    /// A registry lookup task panicked or was cancelled
    #[error("registry lookup task failed: {message}")]
    TaskFailed { message: String },
}

/// Errors related to the markdown report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to write the report file
    #[error("failed to write report file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConstantsError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConstantsError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConstantsError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConstantsError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new MissingConstant error
    pub fn missing_constant(name: impl Into<String>) -> Self {
        ConstantsError::MissingConstant { name: name.into() }
    }

    /// Creates a new InvalidImageReference error
    pub fn invalid_image_reference(name: impl Into<String>, value: impl Into<String>) -> Self {
        ConstantsError::InvalidImageReference {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new RepositoryNotFound error
    pub fn repository_not_found(repository: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::RepositoryNotFound {
            repository: repository.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        repository: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            repository: repository.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        repository: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            repository: repository.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new RateLimitExceeded error
    pub fn rate_limit_exceeded(registry: impl Into<String>) -> Self {
        RegistryError::RateLimitExceeded {
            registry: registry.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(repository: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            repository: repository.into(),
            registry: registry.into(),
        }
    }
}

impl PlanError {
    /// Creates a new NoStableVersion error
    pub fn no_stable_version(repository: impl Into<String>) -> Self {
        PlanError::NoStableVersion {
            repository: repository.into(),
        }
    }

    /// Creates a new UnstableLatestTag error
    pub fn unstable_latest_tag(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        PlanError::UnstableLatestTag {
            repository: repository.into(),
            tag: tag.into(),
        }
    }
}
