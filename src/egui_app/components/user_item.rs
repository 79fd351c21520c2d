//! User Item Component
//!
//! One row of the result list: avatar badge, pseudo, and full name.

use eframe::egui;
use crate::egui_app::theme::{colors, styles};
use crate::shared::User;

/// Render a single user row
/// Returns true if the row was clicked
pub fn render(ui: &mut egui::Ui, user: &User, photo_url: &str) -> bool {
    let row_id = ui.id().with(("user_row", user.id));
    let was_hovered = ui.ctx().data(|d| d.get_temp::<bool>(row_id)).unwrap_or(false);

    let response = styles::row_frame(was_hovered).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            egui::Frame::new()
                .fill(colors::PRIMARY)
                .stroke(egui::Stroke::new(1.0, colors::GRAY))
                .corner_radius(egui::CornerRadius::same(25))
                .inner_margin(egui::Margin::same(14))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(user.initial()).color(colors::TEXT_LIGHT).strong());
                })
                .response
                .on_hover_text(photo_url);

            ui.add_space(10.0);

            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&user.pseudo).size(17.0));
                ui.colored_label(colors::GRAY, user.full_name());
            });
        });
    });

    let response = response.response.interact(egui::Sense::click());
    let hovered = response.hovered();
    if hovered != was_hovered {
        ui.ctx().data_mut(|d| d.insert_temp(row_id, hovered));
        ui.ctx().request_repaint();
    }

    response.clicked()
}
