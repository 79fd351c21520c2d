use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::shared::TradeRole;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, role: TradeRole) {
    let counterparty_label = match role {
        TradeRole::Achat => "Vendeur",
        TradeRole::Vente => "Acheteur",
    };

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.colored_label(colors::PRIMARY, egui::RichText::new(role.banner_title()).size(22.0));
        ui.add_space(24.0);

        match state.store.achat().user.as_ref() {
            Some(user) => {
                ui.colored_label(colors::GRAY, counterparty_label);
                ui.label(egui::RichText::new(&user.pseudo).size(20.0).strong());
                ui.label(user.full_name());
                ui.add_space(8.0);
                ui.hyperlink_to("Photo de profil", state.config.photo_url(user));
            }
            None => {
                ui.colored_label(colors::ERROR, "Aucun utilisateur sélectionné");
            }
        }

        ui.add_space(30.0);
        if ui.button("Changer").clicked() {
            state.go_back();
        }
    });
}
