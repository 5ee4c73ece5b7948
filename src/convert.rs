use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::catalog::Catalogs;
use crate::dedup::PartCollection;
use crate::error::Result;
use crate::io::atomic::write_atomic;
use crate::io::owl_csv::{self, OwlRow};
use crate::io::standard_csv::{self, StandardRow};
use crate::io::studio_xml::{self, StudioOptions};
use crate::normalize::{RecordNormalizer, UnresolvedPart};

/// Extension used for standard lists.
pub const STANDARD_EXTENSION: &str = "bricks";
/// Extension used for BrickLink XML.
pub const STUDIO_EXTENSION: &str = "xml";

/// Options shared by every conversion direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Fail on part numbers that only resolve by fallback.
    pub strict: bool,
    pub studio: StudioOptions,
}

/// What a conversion read and wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub rows_read: usize,
    pub parts_written: usize,
    pub total_quantity: u128,
    pub unresolved: Vec<UnresolvedPart>,
}

impl ConversionReport {
    fn new(rows_read: usize, parts: &PartCollection<'_>, unresolved: Vec<UnresolvedPart>) -> Self {
        Self {
            rows_read,
            parts_written: parts.len(),
            total_quantity: parts.total_quantity(),
            unresolved,
        }
    }
}

/// `orders.csv` → `orders.bricks`.
pub fn standard_path(input: &Path) -> PathBuf {
    input.with_extension(STANDARD_EXTENSION)
}

/// `orders.bricks` → `orders.xml`.
pub fn studio_path(input: &Path) -> PathBuf {
    input.with_extension(STUDIO_EXTENSION)
}

/// Normalizes BrickOwl rows and merges duplicates.
pub fn collect_owl_rows<'c>(
    rows: &[OwlRow],
    catalogs: &'c Catalogs,
    strict: bool,
) -> Result<(PartCollection<'c>, Vec<UnresolvedPart>)> {
    let mut normalizer = RecordNormalizer::new(catalogs).strict(strict);
    let mut parts = PartCollection::new();
    for row in rows {
        parts.insert(normalizer.normalize(row.into())?)?;
    }
    Ok((parts, normalizer.into_unresolved()))
}

/// Normalizes standard rows and merges duplicates.
pub fn collect_standard_rows<'c>(
    rows: &[StandardRow],
    catalogs: &'c Catalogs,
) -> Result<PartCollection<'c>> {
    let mut normalizer = RecordNormalizer::new(catalogs);
    let mut parts = PartCollection::new();
    for row in rows {
        parts.insert(normalizer.normalize(row.into())?)?;
    }
    Ok(parts)
}

/// Converts a BrickOwl order export into a standard list.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn owl_to_standard(
    input: &Path,
    output: &Path,
    catalogs: &Catalogs,
    options: ConvertOptions,
) -> Result<ConversionReport> {
    let rows = owl_csv::read_rows(input)?;
    debug!(row_count = rows.len(), "read BrickOwl rows");
    let (parts, unresolved) = collect_owl_rows(&rows, catalogs, options.strict)?;
    info!(part_count = parts.len(), "parts merged");
    write_atomic(output, &standard_csv::write_parts(&parts)?)?;
    Ok(ConversionReport::new(rows.len(), &parts, unresolved))
}

/// Converts a standard list into BrickLink XML.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display(), ?options)
)]
pub fn standard_to_studio(
    input: &Path,
    output: &Path,
    catalogs: &Catalogs,
    options: ConvertOptions,
) -> Result<ConversionReport> {
    let rows = standard_csv::read_rows(input)?;
    debug!(row_count = rows.len(), "read standard rows");
    let parts = collect_standard_rows(&rows, catalogs)?;
    info!(part_count = parts.len(), "parts merged");
    write_atomic(output, &studio_xml::write_parts(&parts, options.studio)?)?;
    Ok(ConversionReport::new(rows.len(), &parts, Vec::new()))
}

/// Converts a BrickOwl order export straight into BrickLink XML.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display(), ?options)
)]
pub fn owl_to_studio(
    input: &Path,
    output: &Path,
    catalogs: &Catalogs,
    options: ConvertOptions,
) -> Result<ConversionReport> {
    let rows = owl_csv::read_rows(input)?;
    debug!(row_count = rows.len(), "read BrickOwl rows");
    let (parts, unresolved) = collect_owl_rows(&rows, catalogs, options.strict)?;
    info!(part_count = parts.len(), "parts merged");
    write_atomic(output, &studio_xml::write_parts(&parts, options.studio)?)?;
    Ok(ConversionReport::new(rows.len(), &parts, unresolved))
}
