//! Tracked scanner images
//!
//! Fixed table mapping each constant name in the images file to the
//! registry repository that publishes its image.

/// Registry namespace all tracked repositories live under
pub const REGISTRY_NAMESPACE: &str = "horuszup";

/// A constant name in the images file and the repository behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedImage {
    /// Constant name as assigned in the images file
    pub name: &'static str,
    /// Repository name under [`REGISTRY_NAMESPACE`]
    pub repository: &'static str,
}

impl TrackedImage {
    pub const fn new(name: &'static str, repository: &'static str) -> Self {
        Self { name, repository }
    }

    /// Repository path including the namespace (`horuszup/horusec-go`)
    pub fn qualified_repository(&self) -> String {
        format!("{}/{}", REGISTRY_NAMESPACE, self.repository)
    }
}

/// Scanner images kept in sync, in definition order
pub const TRACKED_IMAGES: &[TrackedImage] = &[
    TrackedImage::new("C", "horusec-c"),
    TrackedImage::new("Csharp", "horusec-csharp"),
    TrackedImage::new("Elixir", "horusec-elixir"),
    TrackedImage::new("Generic", "horusec-generic"),
    TrackedImage::new("Go", "horusec-go"),
    TrackedImage::new("HCL", "horusec-hcl"),
    TrackedImage::new("Javascript", "horusec-js"),
    TrackedImage::new("Leaks", "horusec-leaks"),
    TrackedImage::new("PHP", "horusec-php"),
    TrackedImage::new("Python", "horusec-python"),
    TrackedImage::new("Ruby", "horusec-ruby"),
    TrackedImage::new("Shell", "horusec-shell"),
];
