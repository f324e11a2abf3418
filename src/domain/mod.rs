//! Core domain models
//!
//! This module contains the fundamental types used throughout the application:
//! - The fixed table of tracked scanner images
//! - Stable semantic version tags
//! - `<image>:<tag>` image references
//! - Update records produced by the planner

mod image;
mod tracked;
mod update;
mod version;

pub use image::ImageReference;
pub use tracked::{TrackedImage, REGISTRY_NAMESPACE, TRACKED_IMAGES};
pub use update::ImageUpdate;
pub use version::StableVersion;
