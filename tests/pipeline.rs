mod common;

use parts_juggler::ToolError;
use parts_juggler::catalog::{ColorCatalog, PartCatalog};
use parts_juggler::convert::{collect_owl_rows, collect_standard_rows};
use parts_juggler::dedup::{PartCollection, reduce};
use parts_juggler::io::owl_csv::OwlRow;
use parts_juggler::io::standard_csv::{self, StandardRow};
use parts_juggler::io::studio_xml::{self, StudioOptions};
use parts_juggler::model::{Color, Part};
use parts_juggler::normalize::{RecordNormalizer, parse_quantity};
use parts_juggler::resolve::{IdentityResolver, Resolution};

fn owl_row(name: &str, color: &str, quantity: &str) -> OwlRow {
    OwlRow {
        name: name.to_string(),
        color_name: color.to_string(),
        ordered_quantity: quantity.to_string(),
    }
}

fn standard_row(part: &str, color: &str, quantity: &str) -> StandardRow {
    StandardRow {
        part: part.to_string(),
        color: color.to_string(),
        quantity: quantity.to_string(),
    }
}

fn red() -> Color {
    Color {
        source_name: "Red".to_string(),
        source_id: 95,
        target_name: "Red".to_string(),
        target_id: 5,
    }
}

#[test]
fn resolves_first_catalog_candidate() {
    let catalog = PartCatalog::new().with_parts(["32034"]);
    let resolver = IdentityResolver::new(&catalog);

    let resolution = resolver
        .resolve("LEGO Dark Stone Gray Angle Connector #2 (180) (32034 / 42134)")
        .expect("resolved");

    assert_eq!(resolution, Resolution::Catalog("32034".to_string()));
    assert_eq!(resolution.part_number(), "32034");
}

#[test]
fn unknown_candidates_fall_back_to_the_last_one() {
    let catalog = PartCatalog::new().with_parts(["3001"]);
    let resolver = IdentityResolver::new(&catalog);

    let resolution = resolver
        .resolve("LEGO Mystery Piece (99999 / 88888)")
        .expect("fallback is not an error");

    assert_eq!(resolution, Resolution::Unresolved("88888".to_string()));
    assert!(!resolution.is_resolved());
}

#[test]
fn unresolved_parts_are_reported_and_kept() {
    let catalogs = common::synthetic_catalogs();
    let rows = vec![owl_row("LEGO Mystery Piece (99999 / 88888)", "Red", "2")];

    let (parts, unresolved) = collect_owl_rows(&rows, &catalogs, false).expect("lenient run");

    assert_eq!(parts.len(), 1);
    assert_eq!(parts.iter().next().map(|part| part.part_number.as_str()), Some("88888"));
    assert_eq!(unresolved.len(), 1);
    assert_eq!(unresolved[0].product, "LEGO Mystery Piece (99999 / 88888)");
    assert_eq!(unresolved[0].fallback, "88888");
}

#[test]
fn strict_mode_rejects_unresolved_parts() {
    let catalogs = common::synthetic_catalogs();
    let rows = vec![owl_row("LEGO Mystery Piece (99999 / 88888)", "Red", "2")];

    let error = collect_owl_rows(&rows, &catalogs, true).expect_err("strict run fails");

    match error {
        ToolError::UnresolvedPart { fallback, .. } => assert_eq!(fallback, "88888"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_color_name_is_a_catalog_gap() {
    let catalogs = common::synthetic_catalogs();

    assert!(matches!(
        catalogs.colors.by_name("Nonexistent Color"),
        Err(ToolError::CatalogGap { .. })
    ));

    let rows = vec![
        owl_row("LEGO Brick 2 x 4 (3001)", "Red", "1"),
        owl_row("LEGO Brick 2 x 4 (3001)", "Nonexistent Color", "1"),
    ];
    assert!(matches!(
        collect_owl_rows(&rows, &catalogs, false),
        Err(ToolError::CatalogGap { .. })
    ));
}

#[test]
fn every_color_is_reachable_through_all_three_indexes() {
    let catalog = ColorCatalog::from_pairs([
        ("38['Black']", "11['Black']"),
        ("95['Red']", "5['Red']"),
        ("86['Dark Bluish Gray']", "85['Dark Bluish Gray']"),
        ("", "999['Ignored']"),
    ])
    .expect("color catalog");

    assert_eq!(catalog.len(), 3);
    for color in catalog.iter() {
        let by_name = catalog
            .by_name(&color.source_name.to_lowercase())
            .expect("by name");
        let by_source = catalog.by_source_id(color.source_id).expect("by source id");
        let by_target = catalog.by_target_id(color.target_id).expect("by target id");
        assert_eq!(by_name, color);
        assert_eq!(by_source, color);
        assert_eq!(by_target, color);
    }
    assert!(matches!(
        catalog.by_target_id(999),
        Err(ToolError::CatalogGap { .. })
    ));
}

#[test]
fn color_displays_source_name_and_target_id() {
    assert_eq!(red().to_string(), "Red -> 5");
}

#[test]
fn identity_ignores_quantity() {
    let color = red();
    let few = Part::new("3001", &color, 1);
    let many = Part::new("3001", &color, 40);

    assert!(few.same_identity(&many));
    assert_eq!(few.key(), many.key());

    let merged = reduce([few, many]).expect("merged");
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.total_quantity(), 41);
}

#[test]
fn merged_quantity_is_the_exact_sum() {
    let catalogs = common::synthetic_catalogs();
    let rows = vec![
        owl_row("LEGO Brick 2 x 4 (3001)", "Red", "2"),
        owl_row("LEGO Brick 2 x 4 (3001)", "red", "3"),
        owl_row("LEGO Brick 2 x 4 (3001)", "RED", "5"),
        owl_row("LEGO Brick 2 x 4 (3001)", "Black", "7"),
    ];

    let (parts, unresolved) = collect_owl_rows(&rows, &catalogs, true).expect("converted");

    assert!(unresolved.is_empty());
    let quantities: Vec<(&str, i32, u64)> = parts
        .iter()
        .map(|part| (part.part_number.as_str(), part.color.target_id, part.quantity))
        .collect();
    assert_eq!(quantities, vec![("3001", 5, 10), ("3001", 11, 7)]);
}

#[test]
fn reducing_twice_changes_nothing() {
    let black = Color {
        source_name: "Black".to_string(),
        source_id: 38,
        target_name: "Black".to_string(),
        target_id: 11,
    };
    let red = red();
    let parts = vec![
        Part::new("3001", &red, 2),
        Part::new("3069b", &black, 1),
        Part::new("3001", &red, 4),
        Part::new("3001", &black, 3),
        Part::new("3069b", &black, 6),
    ];

    let once = reduce(parts).expect("merged");
    let twice: PartCollection<'_> = reduce(once.clone().into_parts()).expect("merged again");

    assert_eq!(once, twice);
    assert_eq!(once.len(), 3);
}

#[test]
fn merged_quantity_that_overflows_is_rejected() {
    let color = red();
    let huge = parse_quantity("9000000000000000000").expect("fits in a row");
    let parts = vec![
        Part::new("3001", &color, huge),
        Part::new("3001", &color, huge),
        Part::new("3001", &color, huge),
    ];

    let error = reduce(parts).expect_err("sum does not fit");

    assert!(matches!(error, ToolError::MalformedInput(_)));
}

#[test]
fn overflowing_insert_leaves_the_entry_unchanged() {
    let color = red();
    let mut parts = PartCollection::new();
    parts.insert(Part::new("3001", &color, u64::MAX - 1)).expect("first row");

    assert!(parts.insert(Part::new("3001", &color, 2)).is_err());

    let kept = parts.iter().next().expect("one part");
    assert_eq!(kept.quantity, u64::MAX - 1);
    assert_eq!(parts.total_quantity(), u128::from(u64::MAX - 1));
}

#[test]
fn overflowing_rows_abort_the_conversion() {
    let catalogs = common::synthetic_catalogs();
    let rows = vec![
        owl_row("LEGO Brick 2 x 4 (3001)", "Red", "9000000000000000000"),
        owl_row("LEGO Brick 2 x 4 (3001)", "Red", "9000000000000000000"),
        owl_row("LEGO Brick 2 x 4 (3001)", "Red", "9000000000000000000"),
    ];

    assert!(matches!(
        collect_owl_rows(&rows, &catalogs, false),
        Err(ToolError::MalformedInput(_))
    ));
}

#[test]
fn overrides_replace_retailer_numbers() {
    let catalogs = common::synthetic_catalogs();
    let rows = vec![owl_row("LEGO Black Tile 1 x 2 (3069)", "Black", "4")];

    let (parts, _) = collect_owl_rows(&rows, &catalogs, true).expect("converted");

    let part = parts.iter().next().expect("one part");
    assert_eq!(part.part_number, "3069b");
    assert_eq!(part.color.target_id, 11);
}

#[test]
fn standard_rows_roundtrip_through_the_writer() {
    let catalogs = common::synthetic_catalogs();
    let rows = vec![
        standard_row("3001", "5", "4"),
        standard_row("32034", "85", "1"),
        standard_row("3069b", "11", "12"),
    ];

    let parts = collect_standard_rows(&rows, &catalogs).expect("normalized");
    let written = standard_csv::write_parts(&parts).expect("written");

    assert_eq!(
        String::from_utf8(written).expect("utf-8"),
        "part,color,quantity\n3001,5,4\n32034,85,1\n3069b,11,12\n"
    );
}

#[test]
fn standard_rows_need_numeric_known_colors() {
    let catalogs = common::synthetic_catalogs();
    let normalizer = RecordNormalizer::new(&catalogs);

    assert!(matches!(
        normalizer.normalize_standard(&standard_row("3001", "red", "1")),
        Err(ToolError::MalformedInput(_))
    ));
    assert!(matches!(
        normalizer.normalize_standard(&standard_row("3001", "12345", "1")),
        Err(ToolError::CatalogGap { .. })
    ));
    assert!(matches!(
        normalizer.normalize_standard(&standard_row("3001", "5", "-2")),
        Err(ToolError::MalformedInput(_))
    ));
}

#[test]
fn owl_rows_without_part_group_are_malformed() {
    let catalogs = common::synthetic_catalogs();
    let mut normalizer = RecordNormalizer::new(&catalogs);

    let result = normalizer.normalize_owl(&owl_row("LEGO Brick 2 x 4", "Red", "1"));

    assert!(matches!(result, Err(ToolError::MalformedInput(_))));
    assert!(normalizer.unresolved().is_empty());
}

#[test]
fn studio_item_for_parts_list() {
    let color = red();
    let parts = reduce([Part::new("3001", &color, 4)]).expect("merged");

    let xml = studio_xml::write_parts(&parts, StudioOptions::default()).expect("written");

    assert_eq!(
        String::from_utf8(xml).expect("utf-8"),
        "<INVENTORY>\n\
         <ITEM><ITEMTYPE>P</ITEMTYPE><ITEMID>3001</ITEMID><COLOR>5</COLOR><QTYFILLED>4</QTYFILLED></ITEM>\n\
         </INVENTORY>\n"
    );
}

#[test]
fn studio_item_for_colorless_wishlist() {
    let color = red();
    let parts = reduce([Part::new("3001", &color, 4)]).expect("merged");
    let options = StudioOptions {
        as_wishlist: true,
        ignore_color: true,
    };

    let xml = String::from_utf8(studio_xml::write_parts(&parts, options).expect("written"))
        .expect("utf-8");

    assert!(xml.contains("<ITEM><ITEMTYPE>P</ITEMTYPE><ITEMID>3001</ITEMID><MINQTY>4</MINQTY></ITEM>"));
    assert!(!xml.contains("<COLOR>"));
    assert!(!xml.contains("QTYFILLED"));
}

#[test]
fn empty_collection_still_has_an_inventory_root() {
    let parts = PartCollection::new();

    let xml = studio_xml::write_parts(&parts, StudioOptions::default()).expect("written");

    assert_eq!(String::from_utf8(xml).expect("utf-8"), "<INVENTORY>\n</INVENTORY>\n");
}
