use std::path::PathBuf;

/// Arguments for the stats command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// Project root that default paths are relative to
    pub root: PathBuf,

    /// Optional JSON file overriding configuration values
    pub config: Option<PathBuf>,

    /// Output path override for the README
    pub output: Option<PathBuf>,

    /// Print the README to stdout instead of writing it
    pub stdout: bool,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config: None,
            output: None,
            stdout: false,
        }
    }
}
