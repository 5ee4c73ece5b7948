pub mod color;
pub mod part;

pub use color::ColorCatalog;
pub use part::PartCatalog;

use tracing::{info, instrument};

use crate::config::CatalogPaths;
use crate::error::Result;

/// Every reference table a conversion consults, loaded once at startup and
/// lent to the pipeline by reference.
#[derive(Debug, Default, Clone)]
pub struct Catalogs {
    pub colors: ColorCatalog,
    pub parts: PartCatalog,
}

impl Catalogs {
    pub fn new(colors: ColorCatalog, parts: PartCatalog) -> Self {
        Self { colors, parts }
    }

    #[instrument(level = "info", skip_all, fields(colors = %paths.colors.display()))]
    pub fn load(paths: &CatalogPaths) -> Result<Self> {
        let colors = ColorCatalog::load(&paths.colors)?;
        let mut parts = PartCatalog::new();
        parts.load_parts(&paths.parts)?;
        parts.load_overrides(&paths.overrides)?;
        info!(
            colors = colors.len(),
            parts = parts.part_count(),
            overrides = parts.override_count(),
            "catalogs loaded"
        );
        Ok(Self { colors, parts })
    }

    /// Loads only the color mapping. Standard lists already carry canonical
    /// part numbers, so converting them never consults the parts tables.
    #[instrument(level = "info", skip_all, fields(colors = %paths.colors.display()))]
    pub fn load_colors(paths: &CatalogPaths) -> Result<Self> {
        let colors = ColorCatalog::load(&paths.colors)?;
        info!(colors = colors.len(), "color catalog loaded");
        Ok(Self {
            colors,
            parts: PartCatalog::new(),
        })
    }
}
