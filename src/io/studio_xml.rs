//! BrickLink inventory XML, as imported by Stud.io parts lists and BrickLink
//! wishlists.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::dedup::PartCollection;
use crate::error::Result;
use crate::model::Part;

const INVENTORY: &str = "INVENTORY";
const ITEM: &str = "ITEM";
/// Item type code for individual parts.
const PART_ITEM_TYPE: &str = "P";

/// Switches controlling how each `<ITEM>` is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudioOptions {
    /// Write `MINQTY` (wishlist) instead of `QTYFILLED` (Stud.io parts list).
    pub as_wishlist: bool,
    /// Leave out the `COLOR` element entirely.
    pub ignore_color: bool,
}

/// Serialises the collection as a single `<INVENTORY>` document with one
/// `<ITEM>` per line.
pub fn write_parts(parts: &PartCollection<'_>, options: StudioOptions) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());

    writer.write_event(Event::Start(BytesStart::new(INVENTORY)))?;
    writer.write_event(Event::Text(BytesText::new("\n")))?;
    for part in parts.iter() {
        write_item(&mut writer, part, options)?;
        writer.write_event(Event::Text(BytesText::new("\n")))?;
    }
    writer.write_event(Event::End(BytesEnd::new(INVENTORY)))?;
    writer.write_event(Event::Text(BytesText::new("\n")))?;

    Ok(writer.into_inner())
}

fn write_item<W: Write>(writer: &mut Writer<W>, part: &Part<'_>, options: StudioOptions) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(ITEM)))?;
    write_text_element(writer, "ITEMTYPE", PART_ITEM_TYPE)?;
    write_text_element(writer, "ITEMID", &part.part_number)?;
    if !options.ignore_color {
        write_text_element(writer, "COLOR", &part.color.target_id.to_string())?;
    }
    let quantity_field = if options.as_wishlist {
        "MINQTY"
    } else {
        "QTYFILLED"
    };
    write_text_element(writer, quantity_field, &part.quantity.to_string())?;
    writer.write_event(Event::End(BytesEnd::new(ITEM)))?;
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
