use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::io::csv_reader;

/// Row from the Rebrickable parts catalog.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    part_num: String,
}

/// Row from the manual override table: BrickOwl id → BrickLink id.
#[derive(Debug, Deserialize)]
struct OverrideRow {
    #[serde(rename = "BO")]
    alternate: String,
    #[serde(rename = "BL")]
    canonical: String,
}

/// Canonical BrickLink part numbers plus manual corrections for numbers the
/// catalog does not know.
#[derive(Debug, Default, Clone)]
pub struct PartCatalog {
    parts: HashSet<String>,
    overrides: HashMap<String, String>,
}

impl PartCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds canonical part numbers.
    pub fn with_parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parts
            .extend(parts.into_iter().map(|part| part.as_ref().trim().to_string()));
        self
    }

    /// Adds `(alternate, canonical)` override pairs.
    pub fn with_overrides<I, S, T>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        self.overrides.extend(overrides.into_iter().map(|(alternate, canonical)| {
            (
                alternate.as_ref().trim().to_string(),
                canonical.as_ref().trim().to_string(),
            )
        }));
        self
    }

    /// Loads the `part_num` column of the parts catalog CSV.
    pub fn load_parts(&mut self, path: &Path) -> Result<()> {
        let mut reader = csv_reader(path)?;
        let before = self.parts.len();
        for result in reader.deserialize::<CatalogRow>() {
            let row = result?;
            self.parts.insert(row.part_num.trim().to_string());
        }
        debug!(
            path = %path.display(),
            added = self.parts.len() - before,
            "parts catalog loaded"
        );
        Ok(())
    }

    /// Loads the `BO,BL` override table CSV.
    pub fn load_overrides(&mut self, path: &Path) -> Result<()> {
        let mut reader = csv_reader(path)?;
        let before = self.overrides.len();
        for result in reader.deserialize::<OverrideRow>() {
            let row = result?;
            self.overrides
                .insert(row.alternate.trim().to_string(), row.canonical.trim().to_string());
        }
        debug!(
            path = %path.display(),
            added = self.overrides.len() - before,
            "part overrides loaded"
        );
        Ok(())
    }

    pub fn contains(&self, part_number: &str) -> bool {
        self.parts.contains(part_number)
    }

    /// Returns the canonical replacement for `part_number`, if one was
    /// recorded by hand.
    pub fn override_for(&self, part_number: &str) -> Option<&str> {
        self.overrides.get(part_number).map(String::as_str)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}
