// Load menu session: owns the save index while the menu is open

use crate::nsave::{SaveError, SaveIndex, SaveSummary, refresh_index, remove_save};
use std::path::{Path, PathBuf};

/// Row shown when the saves directory holds nothing loadable
pub const NO_SAVES_ROW: &str = "None";

#[derive(Debug, PartialEq)]
pub enum DeleteOutcome {
    Deleted(PathBuf),
    Cancelled,
    NothingSelected,
}

pub struct LoadMenu {
    saves_dir: PathBuf,
    index: SaveIndex,
    selected: usize,
}

impl LoadMenu {
    /// Open the menu, scanning `saves_dir` for saves
    pub fn open(saves_dir: &Path) -> Self {
        let mut menu = Self {
            saves_dir: saves_dir.to_path_buf(),
            index: SaveIndex::new(),
            selected: 0,
        };
        menu.refresh();
        menu
    }

    /// Drop the current index and rescan the saves directory
    pub fn refresh(&mut self) {
        self.index = refresh_index(&self.saves_dir);
        if self.selected >= self.index.len() {
            self.selected = self.index.len().saturating_sub(1);
        }
        log::debug!(
            "Load menu lists {} saves from {}",
            self.index.len(),
            self.saves_dir.display()
        );
    }

    /// Labels for the save list, one per save or the placeholder row
    pub fn rows(&self) -> Vec<String> {
        if self.index.is_empty() {
            return vec![NO_SAVES_ROW.to_string()];
        }
        self.index.iter().map(|s| s.display()).collect()
    }

    pub fn selected_row(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, row: usize) {
        if row < self.index.len() {
            self.selected = row;
        }
    }

    pub fn select_next(&mut self) {
        self.select(self.selected + 1);
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    /// The save behind the selected row; never the placeholder
    pub fn selected(&self) -> Option<&SaveSummary> {
        self.index.get(self.selected)
    }

    /// Ask `confirm` (title, body) before removing the selected save.
    /// The index is rebuilt after a removal.
    pub fn delete_selected(
        &mut self,
        confirm: impl FnOnce(&str, &str) -> bool,
    ) -> Result<DeleteOutcome, SaveError> {
        let Some(save) = self.selected() else {
            return Ok(DeleteOutcome::NothingSelected);
        };
        let path = save.path.clone();
        let body = format!(
            "Are you sure you want to permanently delete '{}'?",
            save.display()
        );

        if !confirm("Permanently Delete?", &body) {
            return Ok(DeleteOutcome::Cancelled);
        }

        remove_save(&path)?;
        self.refresh();
        Ok(DeleteOutcome::Deleted(path))
    }
}
