use std::path::{Path, PathBuf};

/// Suffix every save file carries
pub const SAVE_EXTENSION: &str = ".ns";

/// Display header of one save file.
///
/// Only `path` is guaranteed; everything else is best-effort and stays at its
/// default when the document does not carry it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub path: PathBuf,
    /// Player name
    pub name: Option<String>,
    /// Game version the save was written with
    pub version: Option<String>,
    /// Data version the save was written with
    pub data_version: Option<String>,
    /// Planet or station the player is docked at
    pub location: Option<String>,
    pub credits: u64,
    /// In-game date of the save
    pub timestamp: u64,
    pub ship_name: Option<String>,
    pub ship_model: Option<String>,
}

impl SaveSummary {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            ..Default::default()
        }
    }

    /// Player name, or the file stem when the save carries no name
    pub fn display(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.file_stem(),
        }
    }

    pub fn file_stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// "Model 'Name'" style ship description, if any ship info is present
    pub fn ship_display(&self) -> Option<String> {
        match (&self.ship_model, &self.ship_name) {
            (Some(model), Some(name)) => Some(format!("{} '{}'", model, name)),
            (Some(model), None) => Some(model.clone()),
            (None, Some(name)) => Some(format!("'{}'", name)),
            (None, None) => None,
        }
    }
}

/// Ordered collection of save headers, one per parsable save file
#[derive(Debug, Clone, Default)]
pub struct SaveIndex {
    saves: Vec<SaveSummary>,
}

impl SaveIndex {
    pub fn new() -> Self {
        Self { saves: Vec::new() }
    }

    pub(crate) fn push(&mut self, save: SaveSummary) {
        self.saves.push(save);
    }

    pub fn len(&self) -> usize {
        self.saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&SaveSummary> {
        self.saves.get(pos)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SaveSummary> {
        self.saves.iter()
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.saves.iter().map(|s| s.path.as_path()).collect()
    }
}

impl<'a> IntoIterator for &'a SaveIndex {
    type Item = &'a SaveSummary;
    type IntoIter = std::slice::Iter<'a, SaveSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.saves.iter()
    }
}
