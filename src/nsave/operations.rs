// Filesystem operations for save files

use super::pure::{is_save_file_name, parse_document, parse_header};
use super::{SaveError, SaveSummary};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Read a save file's text, separating "gone" from other I/O failures
pub fn read_save_text(path: &Path) -> Result<String, SaveError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            SaveError::NotFound(path.to_path_buf())
        } else {
            SaveError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Read and header-parse one save file
pub fn load_summary(path: &Path) -> Result<SaveSummary, SaveError> {
    let text = read_save_text(path)?;
    let doc = parse_document(&text, path)?;
    Ok(parse_header(&doc, path))
}

/// List save candidates directly inside `dir`, sorted by file name.
/// A missing directory has no candidates.
pub fn list_save_candidates(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        log::debug!("Save directory {} does not exist", dir.display());
        return Vec::new();
    }

    walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_str().is_some_and(is_save_file_name))
        .map(|e| e.into_path())
        .collect()
}

/// Remove a save file. A save that is already gone counts as removed.
pub fn remove_save(path: &Path) -> Result<(), SaveError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            log::info!("Deleted save {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Save {} was already removed", path.display());
            Ok(())
        }
        Err(source) => Err(SaveError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
