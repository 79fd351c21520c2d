use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available_rect.height() - 260.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(egui::RichText::new("Connexion").size(28.0).strong().color(colors::PRIMARY));
        ui.add_space(8.0);
        ui.colored_label(colors::GRAY, "Votre session a expiré, reconnectez-vous.");
        ui.add_space(20.0);

        if let Some(ref error) = state.auth_state.error {
            ui.label(egui::RichText::new(error).color(colors::ERROR));
            ui.add_space(10.0);
        }

        let input_width = 280.0;
        ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(&mut state.pseudo_input).hint_text("Identifiant"),
        );
        ui.add_space(8.0);
        let password = ui.add_sized(
            [input_width, 28.0],
            egui::TextEdit::singleline(&mut state.password_input)
                .password(true)
                .hint_text("Mot de passe"),
        );
        let submitted = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(20.0);

        let button = egui::Button::new(egui::RichText::new("Se connecter").color(colors::TEXT_LIGHT))
            .fill(colors::PRIMARY)
            .min_size(egui::vec2(input_width, 32.0));
        let enabled = !state.auth_state.loading;
        if ui.add_enabled(enabled, button).clicked() || (submitted && enabled) {
            state.auth_state.clear_error();
            state.handle_login();
        }

        if state.auth_state.loading {
            ui.add_space(15.0);
            ui.spinner();
        }
    });
}
