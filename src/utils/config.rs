//! Configuration and constants for the README generator.

use crate::bundle::descriptor::resolve_path;
use crate::bundle::{read_version, BundleDescriptor, MainBundle};
use crate::utils::error::ConfigError;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CDN prefix; bundle names and versions are appended directly
pub const DEFAULT_CDN_ROOT: &str = "https://cdn.plot.ly/plotly-";

/// Trace modules every bundle contains regardless of its entry file
pub const DEFAULT_CORE_MODULES: &[&str] = &["scatter"];

/// Partial bundles shipped next to the main bundle
pub const PARTIAL_BUNDLE_NAMES: &[&str] =
    &["basic", "cartesian", "geo", "gl3d", "gl2d", "mapbox", "finance"];

pub const JS: &str = ".js";
pub const MINJS: &str = ".min.js";

pub const DIST_DIR: &str = "dist";
pub const LIB_DIR: &str = "lib";
pub const PACKAGE_JSON: &str = "package.json";
pub const README_NAME: &str = "README.md";

/// Everything the README assembler needs, passed explicitly
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Package version used in tagged CDN URLs
    pub version: String,

    pub cdn_root: String,

    /// Modules prepended to every scraped module list
    pub core_modules: Vec<String>,

    pub main: MainBundle,

    pub partial_bundles: Vec<BundleDescriptor>,

    /// Generated README path
    pub output: PathBuf,
}

impl StatsConfig {
    /// Default layout under `root` with an explicit version
    pub fn with_defaults(root: &Path, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            cdn_root: DEFAULT_CDN_ROOT.to_string(),
            core_modules: DEFAULT_CORE_MODULES.iter().map(|m| m.to_string()).collect(),
            main: MainBundle::standard(root),
            partial_bundles: PARTIAL_BUNDLE_NAMES
                .iter()
                .map(|name| BundleDescriptor::partial(root, name))
                .collect(),
            output: root.join(DIST_DIR).join(README_NAME),
        }
    }

    /// Default layout under `root`, version read from `<root>/package.json`
    pub fn from_root(root: &Path) -> Result<Self, ConfigError> {
        let version = read_version(root.join(PACKAGE_JSON))?;
        Ok(Self::with_defaults(root, version))
    }

    /// Resolve configuration for `root`, applying an optional JSON override file.
    ///
    /// `package.json` is only consulted when the override file does not pin a version.
    pub fn load(root: &Path, overrides: Option<&Path>) -> Result<Self, ConfigError> {
        let overrides = match overrides {
            Some(path) => ConfigOverrides::read(path)?,
            None => ConfigOverrides::default(),
        };

        let version = match overrides.version.clone() {
            Some(version) => version,
            None => read_version(root.join(PACKAGE_JSON))?,
        };

        Ok(Self::with_defaults(root, version).apply(root, overrides))
    }

    fn apply(mut self, root: &Path, overrides: ConfigOverrides) -> Self {
        if let Some(cdn_root) = overrides.cdn_root {
            self.cdn_root = cdn_root;
        }
        if let Some(core_modules) = overrides.core_modules {
            self.core_modules = core_modules;
        }
        if let Some(entries) = overrides.partial_bundles {
            self.partial_bundles = entries
                .into_iter()
                .map(|entry| match entry {
                    PartialBundleEntry::Name(name) => BundleDescriptor::partial(root, &name),
                    PartialBundleEntry::Full(bundle) => bundle.resolve(root),
                })
                .collect();
        }
        if let Some(output) = overrides.output {
            self.output = resolve_path(root, output);
        }
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

/// Optional fields of a JSON override file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub version: Option<String>,
    pub cdn_root: Option<String>,
    pub core_modules: Option<Vec<String>>,
    pub partial_bundles: Option<Vec<PartialBundleEntry>>,
    pub output: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading config overrides from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A partial bundle given either by name (standard layout) or in full
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PartialBundleEntry {
    Name(String),
    Full(BundleDescriptor),
}
