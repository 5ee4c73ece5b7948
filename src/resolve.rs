//! Extraction of BrickLink part numbers from BrickOwl product names.

use crate::catalog::PartCatalog;
use crate::error::{Result, ToolError};

/// Outcome of resolving a product name to a part number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A candidate had a manual override; holds the override's value.
    Override(String),
    /// A candidate is a known canonical part number.
    Catalog(String),
    /// No candidate is known; holds the last candidate as a best guess.
    Unresolved(String),
}

impl Resolution {
    pub fn part_number(&self) -> &str {
        match self {
            Resolution::Override(part) | Resolution::Catalog(part) | Resolution::Unresolved(part) => {
                part
            }
        }
    }

    pub fn into_part_number(self) -> String {
        match self {
            Resolution::Override(part) | Resolution::Catalog(part) | Resolution::Unresolved(part) => {
                part
            }
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved(_))
    }
}

/// Resolves product names against a [`PartCatalog`].
#[derive(Debug, Clone, Copy)]
pub struct IdentityResolver<'a> {
    catalog: &'a PartCatalog,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(catalog: &'a PartCatalog) -> Self {
        Self { catalog }
    }

    /// Resolves e.g. `"Angle Connector #2 (180) (32034 / 42134)"`.
    ///
    /// Candidates from the last parenthesized group are tried in order; an
    /// override wins over a catalog hit for the same candidate.
    pub fn resolve(&self, product_name: &str) -> Result<Resolution> {
        let candidates = part_number_candidates(product_name)?;
        for candidate in &candidates {
            if let Some(canonical) = self.catalog.override_for(candidate) {
                return Ok(Resolution::Override(canonical.to_string()));
            }
            if self.catalog.contains(candidate) {
                return Ok(Resolution::Catalog(candidate.to_string()));
            }
        }

        let fallback = candidates
            .last()
            .ok_or_else(|| ToolError::MalformedInput(format!("no part number in '{product_name}'")))?;
        Ok(Resolution::Unresolved(fallback.to_string()))
    }
}

/// Splits the last parenthesized group of `name` on `/` into trimmed,
/// non-empty candidates.
pub fn part_number_candidates(name: &str) -> Result<Vec<&str>> {
    let open = name
        .rfind('(')
        .ok_or_else(|| ToolError::MalformedInput(format!("no part number group in '{name}'")))?;
    let group = &name[open + 1..];
    let close = group
        .find(')')
        .ok_or_else(|| ToolError::MalformedInput(format!("unclosed part number group in '{name}'")))?;

    let candidates: Vec<&str> = group[..close]
        .split('/')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .collect();
    if candidates.is_empty() {
        return Err(ToolError::MalformedInput(format!(
            "empty part number group in '{name}'"
        )));
    }
    Ok(candidates)
}
