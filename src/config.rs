//! Locations of the reference tables a conversion needs.
//!
//! Paths are resolved, first match wins, from an optional JSON config file,
//! then an explicit catalog directory (flag or `PARTS_JUGGLER_CATALOG_DIR`),
//! then the working directory with the default file names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ToolError};

/// Environment variable naming the directory holding the reference tables.
pub const CATALOG_DIR_ENV_VAR: &str = "PARTS_JUGGLER_CATALOG_DIR";

pub const DEFAULT_COLORS_FILE: &str = "rebrickable-colormapping.csv";
pub const DEFAULT_PARTS_FILE: &str = "rebrickable-parts.csv";
pub const DEFAULT_OVERRIDES_FILE: &str = "missing-parts.csv";

/// Paths of the color mapping, parts catalog, and override tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub colors: PathBuf,
    pub parts: PathBuf,
    pub overrides: PathBuf,
}

/// On-disk shape of the JSON config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogConfig {
    dir: Option<PathBuf>,
    colors: Option<PathBuf>,
    parts: Option<PathBuf>,
    overrides: Option<PathBuf>,
}

impl CatalogPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            colors: dir.join(DEFAULT_COLORS_FILE),
            parts: dir.join(DEFAULT_PARTS_FILE),
            overrides: dir.join(DEFAULT_OVERRIDES_FILE),
        }
    }

    /// Resolves the catalog paths from the CLI inputs and the environment.
    pub fn resolve(config: Option<&Path>, catalog_dir: Option<&Path>) -> Result<Self> {
        let dir = catalog_dir
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CATALOG_DIR_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        match config {
            Some(path) => Self::from_config_file(path, &dir),
            None => Ok(Self::in_dir(&dir)),
        }
    }

    /// Reads a JSON config file. Relative entries are resolved against the
    /// file's `dir` key, which itself is relative to the config file;
    /// without `dir` they resolve against `fallback_dir`.
    pub fn from_config_file(path: &Path, fallback_dir: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToolError::MissingInput(path.to_path_buf()));
        }
        let source = fs::read_to_string(path)?;
        let config: CatalogConfig = serde_json::from_str(&source)?;

        let base = match config.dir {
            Some(dir) => path.parent().unwrap_or(Path::new("")).join(dir),
            None => fallback_dir.to_path_buf(),
        };
        let pick = |entry: Option<PathBuf>, default: &str| match entry {
            Some(file) => base.join(file),
            None => base.join(default),
        };

        Ok(Self {
            colors: pick(config.colors, DEFAULT_COLORS_FILE),
            parts: pick(config.parts, DEFAULT_PARTS_FILE),
            overrides: pick(config.overrides, DEFAULT_OVERRIDES_FILE),
        })
    }
}
