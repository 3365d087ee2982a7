// Main menu page

use super::app::NsaveApp;
use crate::config::save_cfg;
use crate::load::{APPNAME, version};
use crate::util::msg;
use eframe::egui::{self, RichText, Ui};

impl NsaveApp {
    pub fn display_page_main(&mut self, ui: &mut Ui) {
        if !self.main_menu_open {
            return;
        }

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new(APPNAME).strong());
            ui.label(RichText::new(format!("v{}", version())).small().weak());
            ui.add_space(16.0);

            let in_load_menu = self.load_menu.is_some();
            ui.add_enabled_ui(!in_load_menu, |ui| {
                if ui.button("Load Game").clicked() {
                    self.open_load_menu();
                }
                ui.add_space(8.0);

                if ui
                    .checkbox(&mut self.options.show_details, "Show save details")
                    .changed()
                    && let Err(e) = save_cfg(&self.options)
                {
                    log::error!("Failed to save settings: {}", e);
                    msg("Error", &format!("Couldn't save settings: {}", e));
                }
                ui.add_space(8.0);

                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}
