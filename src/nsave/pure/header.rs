// Header parse: the display-relevant subset of a save document

use super::xml::{attr, child, child_text, child_u64};
use crate::nsave::SaveSummary;
use roxmltree::Document;
use std::path::Path;

/// Extract the save header from a parsed document.
///
/// Reads the `version` section and the `player` section (name, location,
/// credits, time and the nested `ship`). Absent fields stay at their default.
pub fn parse_header(doc: &Document, path: &Path) -> SaveSummary {
    let root = doc.root_element();
    let mut save = SaveSummary::new(path);

    if let Some(version) = child(root, "version") {
        save.version = child_text(version, "naev");
        save.data_version = child_text(version, "data");
    }

    if let Some(player) = child(root, "player") {
        save.name = attr(player, "name");
        save.location = child_text(player, "location");
        save.credits = child_u64(player, "credits");
        save.timestamp = child_u64(player, "time");

        if let Some(ship) = child(player, "ship") {
            save.ship_name = attr(ship, "name");
            save.ship_model = attr(ship, "model");
        }
    }

    save
}
