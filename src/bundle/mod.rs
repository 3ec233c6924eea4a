//! Bundle descriptors and package metadata.

pub mod descriptor;
pub mod package;

// Re-export main types
pub use descriptor::{BundleArtifacts, BundleDescriptor, MainBundle};
pub use package::{read_package, read_version, PackageMeta};
