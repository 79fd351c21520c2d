use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::TradeRole;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);

        ui.colored_label(colors::PRIMARY, egui::RichText::new("Nouvelle proposition").size(28.0).strong());
        ui.add_space(40.0);

        let buy_btn = egui::Button::new(
            egui::RichText::new("Proposer un achat").size(20.0).color(colors::TEXT_LIGHT)
        )
        .min_size(egui::vec2(240.0, 50.0))
        .fill(colors::PRIMARY);

        if ui.add(buy_btn).clicked() {
            state.open_picker(TradeRole::Achat);
        }
        ui.add_space(15.0);

        let sell_btn = egui::Button::new(
            egui::RichText::new("Proposer une vente").size(20.0).color(colors::TEXT_DARK)
        )
        .min_size(egui::vec2(240.0, 50.0))
        .fill(colors::SECONDARY);

        if ui.add(sell_btn).clicked() {
            state.open_picker(TradeRole::Vente);
        }
    });
}
