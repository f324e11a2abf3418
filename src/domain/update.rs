//! Image tag update records

use super::tracked::REGISTRY_NAMESPACE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A required tag change for one tracked constant
///
/// Only created when the current tag differs from the latest stable one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpdate {
    /// Constant name in the images file
    pub name: String,
    /// Registry repository (without namespace)
    pub repository: String,
    /// Tag currently recorded in the images file
    pub from_tag: String,
    /// Latest stable tag published in the registry
    pub to_tag: String,
}

impl ImageUpdate {
    /// Create a new update record
    pub fn new(
        name: impl Into<String>,
        repository: impl Into<String>,
        from_tag: impl Into<String>,
        to_tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            repository: repository.into(),
            from_tag: from_tag.into(),
            to_tag: to_tag.into(),
        }
    }

    /// Repository path including the namespace
    pub fn qualified_repository(&self) -> String {
        format!("{}/{}", REGISTRY_NAMESPACE, self.repository)
    }
}

impl fmt::Display for ImageUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.from_tag, self.to_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let update = ImageUpdate::new("Go", "horusec-go", "v1.0.0", "v1.1.0");
        assert_eq!(update.to_string(), "Go: v1.0.0 -> v1.1.0");
    }

    #[test]
    fn test_qualified_repository() {
        let update = ImageUpdate::new("Go", "horusec-go", "v1.0.0", "v1.1.0");
        assert_eq!(update.qualified_repository(), "horuszup/horusec-go");
    }

    #[test]
    fn test_serde_round_trip() {
        let update = ImageUpdate::new("Shell", "horusec-shell", "v1.0.0", "v1.0.1");
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("\"from_tag\":\"v1.0.0\""));
        let parsed: ImageUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, update);
    }
}
