//! Target file manifest
//!
//! The manifest is the ordered list of files a cleanup run visits. Paths are
//! relative to the directory the run is rooted at. A manifest can be loaded
//! from YAML:
//!
//! ```yaml
//! files:
//!   - Controllers/AnalyticsController.cs
//!   - Controllers/ContentController.cs
//! ```

use crate::errors::{CleanupError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Controllers that still carried feature-flag leftovers
pub const DEFAULT_TARGETS: [&str; 4] = [
    "Controllers/AnalyticsController.cs",
    "Controllers/ContentController.cs",
    "Controllers/PayPalController.cs",
    "Controllers/WorkloadController.cs",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Target files, visited in this order
    pub files: Vec<PathBuf>,
}

impl Manifest {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a manifest from YAML text. `origin` is only used in error messages.
    pub fn from_yaml_str(yaml: &str, origin: &Path) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| CleanupError::Manifest {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a manifest from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CleanupError::Manifest {
            path: path.to_path_buf(),
            message: format!("failed to read manifest: {}", e),
        })?;

        let manifest = Self::from_yaml_str(&content, path)?;
        log::debug!("loaded {} target(s) from {}", manifest.files.len(), path.display());
        Ok(manifest)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new(DEFAULT_TARGETS)
    }
}
