#![allow(dead_code)]

use std::fs;
use std::path::Path;

use parts_juggler::catalog::{Catalogs, ColorCatalog, PartCatalog};
use parts_juggler::config::CatalogPaths;

pub const COLOR_MAPPING_CSV: &str = "\
BrickOwl,BrickLink,Rebrickable
38['Black'],11['Black'],0
95['Red'],5['Red'],4
86['Dark Bluish Gray'],85['Dark Bluish Gray'],72
,999['BrickLink Only'],999
120['BrickOwl Only'],,998
";

pub const PARTS_CSV: &str = "\
part_num,name
3001,Brick 2 x 4
32034,Technic Angle Connector #2
3069b, Tile 1 x 2 with Groove
";

pub const OVERRIDES_CSV: &str = "\
BO,BL
3069,3069b
";

/// Writes the reference tables into `dir` under their default names.
pub fn write_catalog_files(dir: &Path) -> CatalogPaths {
    let paths = CatalogPaths::in_dir(dir);
    fs::write(&paths.colors, COLOR_MAPPING_CSV).expect("color mapping written");
    fs::write(&paths.parts, PARTS_CSV).expect("parts catalog written");
    fs::write(&paths.overrides, OVERRIDES_CSV).expect("overrides written");
    paths
}

/// The same tables built in memory.
pub fn synthetic_catalogs() -> Catalogs {
    let colors = ColorCatalog::from_pairs([
        ("38['Black']", "11['Black']"),
        ("95['Red']", "5['Red']"),
        ("86['Dark Bluish Gray']", "85['Dark Bluish Gray']"),
    ])
    .expect("color catalog");
    let parts = PartCatalog::new()
        .with_parts(["3001", "32034", "3069b"])
        .with_overrides([("3069", "3069b")]);
    Catalogs::new(colors, parts)
}
