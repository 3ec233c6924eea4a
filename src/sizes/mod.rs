//! Bundle size measurement.
//!
//! This module reads built bundles and reports:
//! - Raw and minified byte lengths
//! - Gzipped size of the minified bundle
//! - Size of the with-meta variant, when one exists

pub mod pretty;
pub mod report;

// Re-export main types and functions
pub use pretty::PrettySize;
pub use report::{find_sizes, gzip_size, SizeReport};
