//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod stats;

// Re-export main command functions
pub use models::StatsArgs;
pub use stats::{build_readme, execute_stats};
