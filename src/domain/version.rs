//! Stable semantic version tags
//!
//! A registry tag is a stable release iff it reads exactly
//! `v<major>.<minor>.<patch>` with decimal components. Pre-release and
//! build-metadata suffixes (`v2.0.0-rc1`, `v1.0.0+build`) and non-version
//! tags (`latest`) never qualify.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// v1.2.3 only, no suffix of any kind
static STABLE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v(\d+)\.(\d+)\.(\d+)$").unwrap());

/// A stable release version, ordered by (major, minor, patch)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StableVersion(semver::Version);

impl StableVersion {
    /// Create a version from its components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(semver::Version::new(major, minor, patch))
    }

    /// Parse a registry tag, returning None unless it is a stable release tag
    pub fn parse_tag(tag: &str) -> Option<Self> {
        let caps = STABLE_TAG_RE.captures(tag)?;
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = caps.get(3)?.as_str().parse().ok()?;
        Some(Self::new(major, minor, patch))
    }

    /// Returns true if the tag is a stable release tag
    pub fn is_stable_tag(tag: &str) -> bool {
        Self::parse_tag(tag).is_some()
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Render back as a registry tag (`v1.2.3`)
    pub fn to_tag(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.0.major, self.0.minor, self.0.patch)
    }
}
