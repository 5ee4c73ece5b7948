use std::fmt;

/// Numeric color code in either numbering scheme.
pub type ColorId = i32;

/// A color known to both the retailer (source) and the CAD (target)
/// numbering schemes.
///
/// Colors are created once while the [`ColorCatalog`](crate::catalog::ColorCatalog)
/// loads and are only ever handed out by reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    /// Display name in the source scheme, e.g. `Dark Bluish Gray`.
    pub source_name: String,
    /// Numeric id in the source scheme.
    pub source_id: ColorId,
    /// Display name in the target scheme.
    pub target_name: String,
    /// Numeric id in the target scheme, used by the standard list and XML.
    pub target_id: ColorId,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source_name, self.target_id)
    }
}

/// Immutable identity of a part: canonical part number plus target color id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartKey {
    pub part_number: String,
    pub color_id: ColorId,
}

/// A canonical part in one color together with the quantity carried.
///
/// Two parts with the same [`PartKey`] describe the same physical item and
/// are merged by the [`dedup`](crate::dedup) fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part<'c> {
    pub part_number: String,
    pub color: &'c Color,
    pub quantity: u64,
}

impl<'c> Part<'c> {
    pub fn new(part_number: impl Into<String>, color: &'c Color, quantity: u64) -> Self {
        Self {
            part_number: part_number.into(),
            color,
            quantity,
        }
    }

    /// Returns the identity key for this part.
    pub fn key(&self) -> PartKey {
        PartKey {
            part_number: self.part_number.clone(),
            color_id: self.color.target_id,
        }
    }

    /// Compares identities, ignoring quantity.
    pub fn same_identity(&self, other: &Part<'_>) -> bool {
        self.part_number == other.part_number && self.color.target_id == other.color.target_id
    }
}
