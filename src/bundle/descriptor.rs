//! Bundle descriptors: where each built artifact lives on disk.

use crate::utils::config::{DIST_DIR, JS, LIB_DIR, MINJS};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A partial bundle and its files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BundleDescriptor {
    /// Bundle identifier (e.g. "geo")
    pub name: String,

    /// Raw (un-minified) bundle
    pub dist: PathBuf,

    /// Minified bundle
    pub dist_min: PathBuf,

    /// Bundle variant carrying attribute meta information
    #[serde(default)]
    pub with_meta: Option<PathBuf>,

    /// Entry file listing the packaged trace modules
    pub index: PathBuf,
}

impl BundleDescriptor {
    /// Descriptor for a partial bundle laid out the standard way under `root`:
    /// `dist/plotly-<name>.js`, `dist/plotly-<name>.min.js`, `lib/index-<name>.js`.
    pub fn partial(root: &Path, name: &str) -> Self {
        let dist_dir = root.join(DIST_DIR);
        Self {
            name: name.to_string(),
            dist: dist_dir.join(format!("plotly-{}{}", name, JS)),
            dist_min: dist_dir.join(format!("plotly-{}{}", name, MINJS)),
            with_meta: None,
            index: root.join(LIB_DIR).join(format!("index-{}{}", name, JS)),
        }
    }

    /// Resolve relative paths against `root`
    pub fn resolve(mut self, root: &Path) -> Self {
        self.dist = resolve_path(root, self.dist);
        self.dist_min = resolve_path(root, self.dist_min);
        self.with_meta = self.with_meta.map(|p| resolve_path(root, p));
        self.index = resolve_path(root, self.index);
        self
    }

    /// The size-related view of this descriptor
    pub fn artifacts(&self) -> BundleArtifacts<'_> {
        BundleArtifacts {
            dist: &self.dist,
            dist_min: &self.dist_min,
            with_meta: self.with_meta.as_deref(),
        }
    }
}

/// The main (full) bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainBundle {
    pub dist: PathBuf,
    pub dist_min: PathBuf,
    pub with_meta: Option<PathBuf>,
}

impl MainBundle {
    /// `dist/plotly.js`, `dist/plotly.min.js` and `dist/plotly-with-meta.js` under `root`
    pub fn standard(root: &Path) -> Self {
        let dist_dir = root.join(DIST_DIR);
        Self {
            dist: dist_dir.join(format!("plotly{}", JS)),
            dist_min: dist_dir.join(format!("plotly{}", MINJS)),
            with_meta: Some(dist_dir.join(format!("plotly-with-meta{}", JS))),
        }
    }

    pub fn artifacts(&self) -> BundleArtifacts<'_> {
        BundleArtifacts {
            dist: &self.dist,
            dist_min: &self.dist_min,
            with_meta: self.with_meta.as_deref(),
        }
    }
}

/// Borrowed paths needed to measure a bundle
#[derive(Debug, Clone, Copy)]
pub struct BundleArtifacts<'a> {
    pub dist: &'a Path,
    pub dist_min: &'a Path,
    pub with_meta: Option<&'a Path>,
}

pub(crate) fn resolve_path(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_layout() {
        let bundle = BundleDescriptor::partial(Path::new("/repo"), "geo");

        assert_eq!(bundle.name, "geo");
        assert_eq!(bundle.dist, PathBuf::from("/repo/dist/plotly-geo.js"));
        assert_eq!(bundle.dist_min, PathBuf::from("/repo/dist/plotly-geo.min.js"));
        assert_eq!(bundle.index, PathBuf::from("/repo/lib/index-geo.js"));
        assert!(bundle.with_meta.is_none());
    }

    #[test]
    fn test_main_bundle_layout() {
        let main = MainBundle::standard(Path::new("/repo"));

        assert_eq!(main.dist, PathBuf::from("/repo/dist/plotly.js"));
        assert_eq!(main.dist_min, PathBuf::from("/repo/dist/plotly.min.js"));
        assert_eq!(
            main.with_meta,
            Some(PathBuf::from("/repo/dist/plotly-with-meta.js"))
        );
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let bundle = BundleDescriptor {
            name: "custom".to_string(),
            dist: PathBuf::from("/abs/custom.js"),
            dist_min: PathBuf::from("build/custom.min.js"),
            with_meta: None,
            index: PathBuf::from("src/index.js"),
        }
        .resolve(Path::new("/repo"));

        assert_eq!(bundle.dist, PathBuf::from("/abs/custom.js"));
        assert_eq!(bundle.dist_min, PathBuf::from("/repo/build/custom.min.js"));
        assert_eq!(bundle.index, PathBuf::from("/repo/src/index.js"));
    }
}
