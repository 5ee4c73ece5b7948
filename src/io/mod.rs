pub mod atomic;
pub mod owl_csv;
pub mod standard_csv;
pub mod studio_xml;

use std::fs::File;
use std::path::Path;

use csv::{Reader, ReaderBuilder, Trim};

use crate::error::{Result, ToolError};

/// Opens a header-driven CSV file with whitespace trimmed from every field.
pub(crate) fn csv_reader(path: &Path) -> Result<Reader<File>> {
    if !path.exists() {
        return Err(ToolError::MissingInput(path.to_path_buf()));
    }
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;
    Ok(reader)
}
