use std::path::PathBuf;
use thiserror::Error;

/// Failure reading, parsing or removing a single save file
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("unable to access save '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse save '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },
    #[error("unable to get root node of save '{}'", .0.display())]
    MissingRoot(PathBuf),
}

impl SaveError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SaveError::NotFound(_))
    }
}
