//! Measure bundle files: raw, minified, gzipped and with-meta sizes.

use super::pretty::PrettySize;
use crate::bundle::BundleArtifacts;
use crate::utils::error::SizeError;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use std::io::Write;
use std::path::Path;

/// Sizes of one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub raw: PrettySize,
    pub minified: PrettySize,
    pub gzipped: PrettySize,
    pub with_meta: Option<PrettySize>,
}

/// Measure the files of a bundle
///
/// **Public** - main entry point for size measurement
///
/// # Arguments
/// * `artifacts` - Paths of the raw, minified and (optional) with-meta bundles
///
/// # Errors
/// * `SizeError::ReadFailed` - a bundle file is missing or not UTF-8 text
/// * `SizeError::CompressionFailed` - gzip stream could not be produced
pub fn find_sizes(artifacts: BundleArtifacts<'_>) -> Result<SizeReport, SizeError> {
    let code_dist = read_bundle(artifacts.dist)?;
    let code_dist_min = read_bundle(artifacts.dist_min)?;

    let with_meta = match artifacts.with_meta {
        Some(path) => Some(PrettySize::from(read_bundle(path)?.len())),
        None => None,
    };

    let report = SizeReport {
        raw: PrettySize::from(code_dist.len()),
        minified: PrettySize::from(code_dist_min.len()),
        gzipped: PrettySize::new(gzip_size(code_dist_min.as_bytes())?),
        with_meta,
    };

    debug!(
        "Sizes for {}: raw {}, minified {}, gzipped {}",
        artifacts.dist.display(),
        report.raw,
        report.minified,
        report.gzipped
    );

    Ok(report)
}

/// Size in bytes of the input after gzip at maximum compression
pub fn gzip_size(data: &[u8]) -> Result<u64, SizeError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(data)
        .map_err(SizeError::CompressionFailed)?;
    let compressed = encoder.finish().map_err(SizeError::CompressionFailed)?;

    Ok(compressed.len() as u64)
}

/// Read a bundle as text
///
/// **Private** - internal helper
fn read_bundle(path: &Path) -> Result<String, SizeError> {
    debug!("Reading bundle: {}", path.display());

    std::fs::read_to_string(path).map_err(|source| SizeError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}
