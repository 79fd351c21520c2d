use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::types::Screen;

pub mod choix_vendeur_view;
pub mod landing_view;
pub mod login_view;
pub mod vendeur_selected_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_go_back = state.navigator.depth() > 1;
                if can_go_back && ui.button("←").clicked() {
                    state.go_back();
                }

                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Marché").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    if state.auth_state.authenticated {
                        if ui.button("Déconnexion").clicked() {
                            state.logout();
                        }
                        if let Some(ref user) = state.auth_state.user {
                            ui.colored_label(colors::TEXT_LIGHT, format!("@{}", user.pseudo));
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| match state.navigator.current().clone() {
        Screen::Landing => landing_view::render(ui, state),
        Screen::ChoixVendeur { params } => choix_vendeur_view::render(ui, state, params.as_ref()),
        Screen::Login => login_view::render(ui, state),
        Screen::VendeurSelected { role } => vendeur_selected_view::render(ui, state, role),
    });
}
