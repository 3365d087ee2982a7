//! eframe::App implementation for NsaveApp

use super::{MenuPage, NsaveApp};
use eframe::egui;

impl eframe::App for NsaveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.cur_page {
            MenuPage::Main => self.display_page_main(ui),
            MenuPage::Landed => self.display_page_landed(ui),
        });

        if self.load_menu.is_some() {
            self.display_load_menu(ctx);
        }
    }
}
