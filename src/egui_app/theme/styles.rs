//! Theme Styling Functions
//!
//! Frame builders shared by the views so cards and rows look the same on
//! every screen.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = colors::BG;
    style.visuals.window_fill = colors::BANNER_BG;
    style.visuals.override_text_color = Some(colors::TEXT_DARK);

    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors::PRIMARY);
    style.visuals.widgets.hovered.bg_fill = colors::ROW_HOVER;
    style.visuals.widgets.active.bg_fill = colors::PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.selection.bg_fill = colors::SECONDARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_DARK);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::HEADER_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Rounded card holding the banner title and the search box
pub fn banner_frame(dark_mode: bool) -> egui::Frame {
    let fill = if dark_mode {
        colors::BANNER_BG_DARK
    } else {
        colors::BANNER_BG
    };
    egui::Frame::new()
        .fill(fill)
        .corner_radius(CornerRadius::same(20))
        .inner_margin(egui::Margin::symmetric(10, 16))
        .outer_margin(egui::Margin::symmetric(20, 0))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 8,
            spread: 0,
            color: Color32::from_black_alpha(40),
        })
}

/// Outline around the search text field
pub fn search_field_frame() -> egui::Frame {
    egui::Frame::new()
        .stroke(Stroke::new(1.0, colors::PRIMARY))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(10, 6))
}

/// Frame for one result row
pub fn row_frame(is_hovered: bool) -> egui::Frame {
    let fill = if is_hovered {
        colors::ROW_HOVER
    } else {
        Color32::TRANSPARENT
    };
    egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(0, 10))
}
