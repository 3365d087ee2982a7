// Landed page - summary of the loaded session

use super::app::NsaveApp;
use eframe::egui::{RichText, Ui};

impl NsaveApp {
    pub fn display_page_landed(&mut self, ui: &mut Ui) {
        let game = &self.game;

        match &game.landed {
            Some(location) => ui.heading(format!("Landed at {}", location)),
            None => ui.heading("In space"),
        };
        if let Some(report) = &self.last_load {
            let file = report
                .path
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_default();
            ui.label(RichText::new(format!("Loaded from {}", file)).small().weak());
        }
        ui.separator();

        if let Some(player) = &game.player {
            ui.label(format!("Pilot: {}", player.name));
            ui.label(format!("Credits: {}", player.credits));
            if let Some(ship) = &player.ship {
                ui.label(format!("Ship: {} ({})", ship.name, ship.model));
            }
        }
        if let Some(system) = &game.system {
            ui.label(format!("System: {}", system.name));
        }
        if let Some(overlay) = &game.overlay {
            ui.label(format!(
                "Overlay: {} - cargo {}/{}",
                overlay.layout, overlay.cargo_used, overlay.cargo_capacity
            ));
        }
        ui.label(format!(
            "{} missions, {} events, {} hooks",
            game.missions.len(),
            game.events.len(),
            game.hooks.len()
        ));

        if !game.executed_hooks.is_empty() {
            ui.label(format!("Hooks run: {}", game.executed_hooks.join(", ")));
        }

        if let Some(report) = &self.last_load
            && !report.inconsistencies.is_empty()
        {
            ui.add_space(8.0);
            ui.label(RichText::new("Save inconsistencies:").strong());
            for inconsistency in &report.inconsistencies {
                ui.label(RichText::new(inconsistency.to_string()).small());
            }
        }

        ui.add_space(8.0);
        for line in &game.messages {
            ui.label(RichText::new(line).weak());
        }

        ui.add_space(16.0);
        if ui.button("Main Menu").clicked() {
            self.menu_main();
        }
    }
}
