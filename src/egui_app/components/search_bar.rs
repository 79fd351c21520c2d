//! Search Bar Component
//!
//! Text field plus a search button. Returns true when a search should run
//! (button clicked or Enter pressed in the field).

use eframe::egui;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, query: &mut String) -> bool {
    let mut submitted = false;

    styles::search_field_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(query)
                    .hint_text("Recherche")
                    .frame(false)
                    .desired_width(ui.available_width() - 32.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }

            let button = egui::Button::new(egui::RichText::new("🔍").size(18.0).color(colors::GRAY))
                .frame(false);
            if ui.add(button).on_hover_text("Rechercher").clicked() {
                submitted = true;
            }
        });
    });

    submitted
}
