// Load Game window - save list with Load/Del/Back

use super::app::NsaveApp;
use crate::nsave::SaveSummary;
use crate::util::msg;
use eframe::egui::{self, RichText, Ui};

enum LoadMenuAction {
    Select(usize),
    Next,
    Prev,
    Load,
    Delete,
    Back,
}

impl NsaveApp {
    pub fn display_load_menu(&mut self, ctx: &egui::Context) {
        let Some(menu) = &self.load_menu else {
            return;
        };
        let rows = menu.rows();
        let selected_row = menu.selected_row();
        let details = match self.options.show_details {
            true => menu.selected().cloned(),
            false => None,
        };
        let has_save = menu.selected().is_some();

        let mut action = None;

        ctx.input(|i| {
            if i.key_pressed(egui::Key::Enter) {
                action = Some(LoadMenuAction::Load);
            } else if i.key_pressed(egui::Key::Escape) {
                action = Some(LoadMenuAction::Back);
            } else if i.key_pressed(egui::Key::ArrowDown) {
                action = Some(LoadMenuAction::Next);
            } else if i.key_pressed(egui::Key::ArrowUp) {
                action = Some(LoadMenuAction::Prev);
            }
        });

        egui::Window::new("Load Game")
            .collapsible(false)
            .resizable(false)
            .fixed_size([400.0, 300.0])
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal_top(|ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("lstSaves")
                        .max_height(240.0)
                        .max_width(180.0)
                        .show(ui, |ui| {
                            ui.set_min_width(180.0);
                            for (i, row) in rows.iter().enumerate() {
                                let response =
                                    ui.selectable_label(i == selected_row, row.as_str());
                                if response.double_clicked() {
                                    action = Some(LoadMenuAction::Load);
                                } else if response.clicked() {
                                    action = Some(LoadMenuAction::Select(i));
                                }
                            }
                        });

                    ui.separator();
                    if let Some(save) = &details {
                        ui.vertical(|ui| display_save_details(ui, save));
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Back").clicked() {
                        action = Some(LoadMenuAction::Back);
                    }
                    ui.add_enabled_ui(has_save, |ui| {
                        if ui.button("Load").clicked() {
                            action = Some(LoadMenuAction::Load);
                        }
                        if ui.button("Del").clicked() {
                            action = Some(LoadMenuAction::Delete);
                        }
                    });
                });
            });

        match action {
            Some(LoadMenuAction::Select(row)) => {
                if let Some(menu) = &mut self.load_menu {
                    menu.select(row);
                }
            }
            Some(LoadMenuAction::Next) => {
                if let Some(menu) = &mut self.load_menu {
                    menu.select_next();
                }
            }
            Some(LoadMenuAction::Prev) => {
                if let Some(menu) = &mut self.load_menu {
                    menu.select_prev();
                }
            }
            Some(LoadMenuAction::Load) => self.load_selected(msg),
            Some(LoadMenuAction::Delete) => self.delete_selected(),
            Some(LoadMenuAction::Back) => self.close_load_menu(),
            None => {}
        }
    }
}

fn display_save_details(ui: &mut Ui, save: &SaveSummary) {
    ui.label(RichText::new(save.display()).strong());
    ui.label(RichText::new(save.file_name()).small().weak());
    ui.add_space(4.0);

    let unknown = "?";
    ui.label(format!(
        "Version: {}",
        save.version.as_deref().unwrap_or(unknown)
    ));
    ui.label(format!(
        "Data: {}",
        save.data_version.as_deref().unwrap_or(unknown)
    ));
    ui.label(format!(
        "Location: {}",
        save.location.as_deref().unwrap_or(unknown)
    ));
    ui.label(format!("Credits: {}", save.credits));
    if let Some(ship) = save.ship_display() {
        ui.label(format!("Ship: {}", ship));
    }
    ui.label(format!("Date: {}", save.timestamp));
}
