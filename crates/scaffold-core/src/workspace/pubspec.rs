//! `pubspec.yaml` inspection

use super::resolver::{is_project_root, PROJECT_MARKER};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The parts of a Flutter `pubspec.yaml` the generator cares about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pubspec {
    /// Package name
    #[serde(default)]
    pub name: Option<String>,

    /// Runtime dependencies (version constraints are not interpreted)
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_yaml::Value>,
}

impl Pubspec {
    /// Read and parse `<root>/pubspec.yaml`
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(PROJECT_MARKER);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Check if `package` is listed under `dependencies`
    pub fn depends_on(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
    }
}

/// Find the nearest directory at or above `start` that holds a `pubspec.yaml`
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_project_root(dir))
        .map(Path::to_path_buf)
}
