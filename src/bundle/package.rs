//! Package metadata loader (`package.json`).

use crate::utils::error::ConfigError;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// The fields of `package.json` the README needs
#[derive(Debug, Clone, Deserialize)]
pub struct PackageMeta {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

/// Read package metadata from a `package.json` file
pub fn read_package(path: impl AsRef<Path>) -> Result<PackageMeta, ConfigError> {
    let path = path.as_ref();

    debug!("Reading package metadata from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the semantic version from a `package.json` file
pub fn read_version(path: impl AsRef<Path>) -> Result<String, ConfigError> {
    let path = path.as_ref();
    read_package(path)?
        .version
        .ok_or_else(|| ConfigError::MissingVersion(path.to_path_buf()))
}
