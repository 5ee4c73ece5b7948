use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::io::csv_reader;

/// One line of a BrickOwl order export. Columns other than these are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OwlRow {
    /// Free-text product name, ending in a parenthesized part number group.
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Color Name")]
    pub color_name: String,
    /// Kept as text so that bad values surface as malformed input rather
    /// than as a decode error without context.
    #[serde(rename = "Ordered Quantity")]
    pub ordered_quantity: String,
}

/// Reads every order line from a BrickOwl CSV export.
pub fn read_rows(path: &Path) -> Result<Vec<OwlRow>> {
    let mut reader = csv_reader(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<OwlRow>() {
        rows.push(result?);
    }
    Ok(rows)
}
