use crate::paths::PATH_DATA;
use crate::util::expand_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NsaveConfig {
    /// Directory holding save files. Supports ~ and $HOME.
    /// Defaults to the "saves" folder in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saves_dir: Option<String>,
    /// Force an instrument overlay layout instead of the ship's own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gui: Option<String>,
    /// Show header details of the selected save in the load menu
    #[serde(default = "default_show_details")]
    pub show_details: bool,
}

fn default_show_details() -> bool {
    true
}

impl Default for NsaveConfig {
    fn default() -> Self {
        NsaveConfig {
            saves_dir: None,
            gui: None,
            show_details: true,
        }
    }
}

impl NsaveConfig {
    /// Resolved save directory
    pub fn saves_path(&self) -> PathBuf {
        match self.saves_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => expand_path(dir),
            _ => PATH_DATA.join("saves"),
        }
    }
}
