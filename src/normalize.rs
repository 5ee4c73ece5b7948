use tracing::{trace, warn};

use crate::catalog::Catalogs;
use crate::error::{Result, ToolError};
use crate::io::owl_csv::OwlRow;
use crate::io::standard_csv::StandardRow;
use crate::model::{ColorId, Part};
use crate::resolve::{IdentityResolver, Resolution};

/// A typed input row from one of the supported source formats.
#[derive(Debug, Clone, Copy)]
pub enum SourceRow<'r> {
    Owl(&'r OwlRow),
    Standard(&'r StandardRow),
}

impl<'r> From<&'r OwlRow> for SourceRow<'r> {
    fn from(row: &'r OwlRow) -> Self {
        SourceRow::Owl(row)
    }
}

impl<'r> From<&'r StandardRow> for SourceRow<'r> {
    fn from(row: &'r StandardRow) -> Self {
        SourceRow::Standard(row)
    }
}

/// A product whose part number could only be guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPart {
    pub product: String,
    pub fallback: String,
}

/// Turns source rows into canonical [`Part`]s borrowing colors from the
/// catalogs.
#[derive(Debug)]
pub struct RecordNormalizer<'c> {
    catalogs: &'c Catalogs,
    strict: bool,
    unresolved: Vec<UnresolvedPart>,
}

impl<'c> RecordNormalizer<'c> {
    pub fn new(catalogs: &'c Catalogs) -> Self {
        Self {
            catalogs,
            strict: false,
            unresolved: Vec::new(),
        }
    }

    /// In strict mode an unresolved part number fails the row instead of
    /// falling back to the last candidate.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn normalize(&mut self, row: SourceRow<'_>) -> Result<Part<'c>> {
        match row {
            SourceRow::Owl(row) => self.normalize_owl(row),
            SourceRow::Standard(row) => self.normalize_standard(row),
        }
    }

    /// BrickOwl rows carry a color name and a free-text product name.
    pub fn normalize_owl(&mut self, row: &OwlRow) -> Result<Part<'c>> {
        let catalogs = self.catalogs;
        let color = catalogs.colors.by_name(&row.color_name)?;
        let resolution = IdentityResolver::new(&catalogs.parts).resolve(&row.name)?;
        if let Resolution::Unresolved(fallback) = &resolution {
            if self.strict {
                return Err(ToolError::UnresolvedPart {
                    product: row.name.clone(),
                    fallback: fallback.clone(),
                });
            }
            warn!(
                product = %row.name,
                fallback = %fallback,
                "could not find part in BrickLink catalog; using last candidate"
            );
            self.unresolved.push(UnresolvedPart {
                product: row.name.clone(),
                fallback: fallback.clone(),
            });
        }
        let quantity = parse_quantity(&row.ordered_quantity)?;
        trace!(product = %row.name, %color, quantity, "owl row normalized");
        Ok(Part::new(resolution.into_part_number(), color, quantity))
    }

    /// Standard rows are already canonical apart from the color lookup.
    pub fn normalize_standard(&self, row: &StandardRow) -> Result<Part<'c>> {
        let catalogs = self.catalogs;
        let color_id = row.color.trim().parse::<ColorId>().map_err(|_| {
            ToolError::MalformedInput(format!(
                "color '{}' for part '{}' is not a number",
                row.color, row.part
            ))
        })?;
        let color = catalogs.colors.by_target_id(color_id)?;
        let quantity = parse_quantity(&row.quantity)?;
        Ok(Part::new(row.part.trim(), color, quantity))
    }

    /// Products resolved by fallback so far, in input order.
    pub fn unresolved(&self) -> &[UnresolvedPart] {
        &self.unresolved
    }

    pub fn into_unresolved(self) -> Vec<UnresolvedPart> {
        self.unresolved
    }
}

/// Coerces a quantity field to a non-negative integer.
pub fn parse_quantity(raw: &str) -> Result<u64> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ToolError::MalformedInput(format!("quantity '{raw}' is not a number")))?;
    u64::try_from(value)
        .map_err(|_| ToolError::MalformedInput(format!("quantity '{raw}' is negative")))
}
