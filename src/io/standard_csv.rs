//! The "standard" intermediate list: `part,color,quantity`, where color is
//! the BrickLink color id.

use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Deserialize;

use crate::dedup::PartCollection;
use crate::error::Result;
use crate::io::csv_reader;

/// Header written at the top of every standard list.
pub const HEADER: [&str; 3] = ["part", "color", "quantity"];

/// One line of a standard list, still as raw text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StandardRow {
    pub part: String,
    pub color: String,
    pub quantity: String,
}

/// Reads every line of a standard list.
pub fn read_rows(path: &Path) -> Result<Vec<StandardRow>> {
    let mut reader = csv_reader(path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize::<StandardRow>() {
        rows.push(result?);
    }
    Ok(rows)
}

/// Serialises the collection as a standard list.
///
/// Fields are written without quoting, so part numbers containing commas
/// produce a broken line. Catalog part numbers never contain commas.
pub fn write_parts(parts: &PartCollection<'_>) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for part in parts.iter() {
        writer.write_record([
            part.part_number.clone(),
            part.color.target_id.to_string(),
            part.quantity.to_string(),
        ])?;
    }

    let buffer = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(buffer)
}
