// Save index construction

use super::SaveIndex;
use super::operations::{list_save_candidates, load_summary};
use std::path::Path;

/// Build a fresh index from every save file in `dir`.
///
/// A file that cannot be read or parsed is logged and left out; it never
/// aborts the scan and never occupies a slot in the index.
pub fn refresh_index(dir: &Path) -> SaveIndex {
    let mut index = SaveIndex::new();

    for path in list_save_candidates(dir) {
        match load_summary(&path) {
            Ok(save) => index.push(save),
            Err(e) => log::warn!("Skipping save: {}", e),
        }
    }

    log::debug!("Indexed {} saves in {}", index.len(), dir.display());
    index
}
