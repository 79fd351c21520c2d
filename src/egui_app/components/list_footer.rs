//! List Footer Component
//!
//! Shown under the results: a loader while the next page is on its way,
//! an end-of-list marker once the server has nothing more.

use eframe::egui;
use crate::egui_app::search::SearchState;
use crate::egui_app::theme::colors;

/// What the footer displays for a given state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterKind {
    Hidden,
    Loading,
    EndOfList,
}

impl FooterKind {
    pub fn for_state(state: &SearchState) -> Self {
        if state.end_of_list {
            FooterKind::EndOfList
        } else if state.is_loading_more {
            FooterKind::Loading
        } else {
            FooterKind::Hidden
        }
    }
}

pub fn render(ui: &mut egui::Ui, state: &SearchState) {
    let kind = FooterKind::for_state(state);
    if kind == FooterKind::Hidden {
        return;
    }

    ui.add_space(10.0);
    ui.vertical_centered(|ui| match kind {
        FooterKind::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.colored_label(colors::GRAY, "Chargement...");
            });
        }
        FooterKind::EndOfList => {
            ui.colored_label(colors::GRAY, "Liste terminée");
        }
        FooterKind::Hidden => {}
    });
    ui.add_space(10.0);
}
