//! Stats command implementation.
//!
//! The stats command:
//! 1. Resolves configuration (package version, bundle list)
//! 2. Measures the main bundle
//! 3. Measures and scrapes every partial bundle
//! 4. Writes the assembled README

use super::models::StatsArgs;
use crate::bundle::BundleDescriptor;
use crate::output::{
    footer, info_content, main_bundle_info, make_bundle_info, write_readme,
};
use crate::parser::scrape_modules;
use crate::sizes::find_sizes;
use crate::utils::config::StatsConfig;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the stats command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or invalid `package.json` / override file
/// * Missing bundle or entry file
/// * Entry file that cannot be tokenized
/// * README write errors
pub fn execute_stats(args: StatsArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/4: Resolving configuration for {}", args.root.display());
    let mut config = StatsConfig::load(&args.root, args.config.as_deref())
        .context("Failed to resolve configuration")?;
    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    debug!(
        "Version {}, {} partial bundles",
        config.version,
        config.partial_bundles.len()
    );

    let content = build_readme(&config)?;

    if args.stdout {
        println!("{}", content);
    } else {
        info!("Step 4/4: Writing README...");
        write_readme(&content, &config.output).context("Failed to write README")?;
        info!("✓ README written to: {}", config.output.display());
    }

    let elapsed = start_time.elapsed();
    info!("Stats completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Assemble the full README text
///
/// **Public** - usable without touching the output file
///
/// Blocks are joined with `\n` in fixed order: usage notes, main bundle,
/// one section per partial bundle, footer. The first failing read aborts.
pub fn build_readme(config: &StatsConfig) -> Result<String> {
    info!("Step 2/4: Measuring main bundle...");
    let main_sizes = find_sizes(config.main.artifacts()).context("Failed to measure main bundle")?;

    let mut content = info_content();
    content.extend(main_bundle_info(&main_sizes, config));

    info!(
        "Step 3/4: Measuring {} partial bundles...",
        config.partial_bundles.len()
    );
    for bundle in &config.partial_bundles {
        content.push(partial_bundle_section(bundle, config)?);
    }

    content.extend(footer());

    Ok(content.join("\n"))
}

/// Measure, scrape and render one partial bundle
///
/// **Private** - internal helper for build_readme
fn partial_bundle_section(bundle: &BundleDescriptor, config: &StatsConfig) -> Result<String> {
    let sizes = find_sizes(bundle.artifacts())
        .with_context(|| format!("Failed to measure partial bundle '{}'", bundle.name))?;

    let modules = scrape_modules(&bundle.index)
        .with_context(|| format!("Failed to scrape entry file of partial bundle '{}'", bundle.name))?;

    if modules.is_empty() {
        warn!(
            "No trace modules found in {} for bundle '{}'",
            bundle.index.display(),
            bundle.name
        );
    } else {
        debug!("Bundle '{}': {}", bundle.name, modules.join(", "));
    }

    Ok(make_bundle_info(bundle, &sizes, &modules, config))
}
