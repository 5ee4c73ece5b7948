use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ToolError};
use crate::io::csv_reader;
use crate::model::{Color, ColorId};

/// Row from the Rebrickable color mapping table. Only the two scheme columns
/// are needed; either may be blank for colors one site does not carry.
#[derive(Debug, Deserialize)]
struct ColorMappingRow {
    #[serde(rename = "BrickOwl", default)]
    brick_owl: String,
    #[serde(rename = "BrickLink", default)]
    brick_link: String,
}

/// Cross-reference between BrickOwl (source) and BrickLink (target) colors.
///
/// Lookups are exact. A missing color is a [`ToolError::CatalogGap`], never a
/// substitute.
#[derive(Debug, Default, Clone)]
pub struct ColorCatalog {
    colors: Vec<Color>,
    by_name: HashMap<String, usize>,
    by_source_id: HashMap<ColorId, usize>,
    by_target_id: HashMap<ColorId, usize>,
}

impl ColorCatalog {
    /// Loads the color mapping CSV at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv_reader(path)?;
        let mut pairs = Vec::new();
        for result in reader.deserialize::<ColorMappingRow>() {
            let row = result?;
            pairs.push((row.brick_owl, row.brick_link));
        }

        let catalog = Self::from_pairs(pairs).map_err(|err| match err {
            ToolError::MalformedInput(message) => ToolError::MalformedCatalog {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), colors = catalog.len(), "color catalog loaded");
        Ok(catalog)
    }

    /// Builds a catalog from `(source, target)` encoded color strings such as
    /// `("36['Trans Clear']", "12['Trans-Clear']")`. Pairs with a blank side
    /// are skipped.
    pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut catalog = Self::default();
        for (source, target) in pairs {
            let (source, target) = (source.as_ref().trim(), target.as_ref().trim());
            if source.is_empty() || target.is_empty() {
                continue;
            }
            let (source_id, source_name) = parse_color_code(source)?;
            let (target_id, target_name) = parse_color_code(target)?;
            catalog.insert(Color {
                source_name,
                source_id,
                target_name,
                target_id,
            });
        }
        Ok(catalog)
    }

    fn insert(&mut self, color: Color) {
        let index = self.colors.len();
        self.by_name.insert(color.source_name.to_lowercase(), index);
        self.by_source_id.insert(color.source_id, index);
        self.by_target_id.insert(color.target_id, index);
        self.colors.push(color);
    }

    /// Finds a color by its source-scheme name, ignoring case.
    pub fn by_name(&self, name: &str) -> Result<&Color> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| &self.colors[index])
            .ok_or_else(|| ToolError::gap("color name", name))
    }

    pub fn by_source_id(&self, id: ColorId) -> Result<&Color> {
        self.by_source_id
            .get(&id)
            .map(|&index| &self.colors[index])
            .ok_or_else(|| ToolError::gap("BrickOwl color id", id))
    }

    pub fn by_target_id(&self, id: ColorId) -> Result<&Color> {
        self.by_target_id
            .get(&id)
            .map(|&index| &self.colors[index])
            .ok_or_else(|| ToolError::gap("BrickLink color id", id))
    }

    /// Every color in load order, including ones shadowed by a later row
    /// sharing a key.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Splits `36['Trans Clear']` into `(36, "Trans Clear")`.
fn parse_color_code(code: &str) -> Result<(ColorId, String)> {
    let (id, rest) = code
        .split_once("['")
        .ok_or_else(|| ToolError::MalformedInput(format!("color code '{code}' lacks ['name']")))?;
    let id = id
        .trim()
        .parse::<ColorId>()
        .map_err(|_| ToolError::MalformedInput(format!("color code '{code}' has no numeric id")))?;
    let name = rest
        .strip_suffix("']")
        .ok_or_else(|| ToolError::MalformedInput(format!("color code '{code}' is not closed by ']")))?;
    Ok((id, name.to_string()))
}
