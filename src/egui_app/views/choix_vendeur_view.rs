//! `ChoixVendeur` screen
//!
//! Banner with the search box on top, scrollable results below. Reaching
//! the end of the list asks the controller for the next page; tapping a row
//! hands the user to the selection dispatcher.

use eframe::egui;

use crate::egui_app::components::{list_footer, search_bar, user_item};
use crate::egui_app::search::is_end_reached;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::{RouteParams, TradeRole, User};

pub fn render(ui: &mut egui::Ui, state: &mut AppState, params: Option<&RouteParams>) {
    let role = TradeRole::from_route_params(params);
    let threshold = state.config.end_reached_threshold();
    let config = state.config.clone();

    let Some(picker) = state.picker.as_mut() else {
        // Mounted on the next tick
        ui.spinner();
        return;
    };

    ui.add_space(16.0);
    styles::banner_frame(ui.visuals().dark_mode).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.colored_label(colors::PRIMARY, egui::RichText::new(role.banner_title()).size(17.0));
            ui.add_space(10.0);
            ui.label(role.banner_hint());
            ui.add_space(10.0);
        });
        if search_bar::render(ui, picker.query_mut()) {
            picker.search();
        }
    });
    ui.add_space(12.0);

    if picker.state().is_searching {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.spinner();
        });
    }

    let mut clicked: Option<User> = None;
    let output = egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(4.0);
            egui::Frame::new()
                .inner_margin(egui::Margin::symmetric(20, 0))
                .show(ui, |ui| {
                    for user in &picker.state().results {
                        if user_item::render(ui, user, &config.photo_url(user)) {
                            clicked = Some(user.clone());
                        }
                    }
                    list_footer::render(ui, picker.state());
                });
        });

    let reached = is_end_reached(
        output.state.offset.y,
        output.content_size.y,
        output.inner_rect.height(),
        threshold,
    );
    if reached {
        picker.load_more_data();
    }

    if let Some(user) = clicked {
        state.select(&user);
    }
}
