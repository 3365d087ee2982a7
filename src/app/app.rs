// Core app structure and menu transitions

mod eframe_impl;

use std::path::PathBuf;

use super::load_menu::{DeleteOutcome, LoadMenu};
use crate::config::{NsaveConfig, load_cfg};
use crate::game::GameState;
use crate::load::{LoadReport, load_game};
use crate::util::{msg, yesno};

/// Application page/view
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum MenuPage {
    Main,
    Landed, // Shown after a successful load
}

pub struct NsaveApp {
    pub options: NsaveConfig,
    pub saves_dir: PathBuf,
    pub cur_page: MenuPage,
    pub main_menu_open: bool,
    pub load_menu: Option<LoadMenu>,
    pub game: GameState,
    pub last_load: Option<LoadReport>,
}

impl NsaveApp {
    pub fn new(saves_override: Option<PathBuf>) -> Self {
        let options = load_cfg();
        let saves_dir = saves_override.unwrap_or_else(|| options.saves_path());
        log::info!("Using saves directory {}", saves_dir.display());
        Self::with_options(options, saves_dir)
    }

    pub fn with_options(options: NsaveConfig, saves_dir: PathBuf) -> Self {
        let game = GameState::new(options.gui.clone());

        Self {
            options,
            saves_dir,
            cur_page: MenuPage::Main,
            main_menu_open: true,
            load_menu: None,
            game,
            last_load: None,
        }
    }

    pub fn menu_main(&mut self) {
        self.cur_page = MenuPage::Main;
        self.main_menu_open = true;
    }

    pub fn menu_main_close(&mut self) {
        self.main_menu_open = false;
    }

    pub fn open_load_menu(&mut self) {
        self.load_menu = Some(LoadMenu::open(&self.saves_dir));
    }

    pub fn close_load_menu(&mut self) {
        self.load_menu = None;
    }

    /// Load the selected save. On failure `alert` (title, body) is shown and
    /// both menus come back.
    pub fn load_selected(&mut self, alert: impl FnOnce(&str, &str)) {
        let Some(path) = self
            .load_menu
            .as_ref()
            .and_then(|m| m.selected())
            .map(|s| s.path.clone())
        else {
            return;
        };

        self.close_load_menu();
        self.menu_main_close();

        match load_game(&path, &mut self.game) {
            Ok(report) => {
                self.last_load = Some(report);
                self.cur_page = MenuPage::Landed;
            }
            Err(e) => {
                self.last_load = None;
                alert("Load Game", &e.user_message());
                self.menu_main();
                self.open_load_menu();
            }
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(menu) = &mut self.load_menu else {
            return;
        };
        match menu.delete_selected(yesno) {
            Ok(DeleteOutcome::Deleted(path)) => {
                log::info!("Deleted savegame '{}'", path.display());
            }
            Ok(_) => {}
            Err(e) => msg("Delete failed", &e.to_string()),
        }
    }
}
