use crate::nsave::SAVE_EXTENSION;

/// Whether a directory entry name looks like a save file.
/// Requires the save extension and a non-empty stem.
pub fn is_save_file_name(name: &str) -> bool {
    name.len() > SAVE_EXTENSION.len() && name.ends_with(SAVE_EXTENSION)
}
