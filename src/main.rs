//! Bundle Stats CLI
//!
//! Writes the dist README describing the built plotly.js bundles.

use anyhow::Result;
use bundle_stats::commands::{execute_stats, StatsArgs};
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

/// Bundle Stats - dist README generator
#[derive(Parser, Debug)]
#[command(name = "bundle-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Project root containing package.json, dist/ and lib/
    #[arg(short, long, default_value = ".", env = "BUNDLE_STATS_ROOT")]
    root: PathBuf,

    /// JSON file overriding version, CDN root, core modules, bundles or output
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output path for the README (defaults to <root>/dist/README.md)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the README to stdout instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = StatsArgs {
        root: cli.root,
        config: cli.config,
        output: cli.output,
        stdout: cli.stdout,
    };

    execute_stats(args)
}
