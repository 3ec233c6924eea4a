//! README generation output.
//!
//! This module handles:
//! - Rendering the markdown blocks (usage notes, bundle tables, footer)
//! - Writing the assembled README to disk

pub mod markdown;
pub mod writer;

// Re-export main functions
pub use markdown::{
    footer, format_bundle_info, info_content, main_bundle_info, make_bundle_header_info,
    make_bundle_info,
};
pub use writer::{validate_path, write_readme};
