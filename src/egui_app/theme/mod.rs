//! Theme Module
//!
//! Color constants and frame builders for the counterparty picker.
//!
//! # Usage
//!
//! ```rust,ignore
//! use counterparty::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::banner_frame(ctx.style().visuals.dark_mode).show(ui, |ui| {
//!     ui.colored_label(colors::PRIMARY, "Faire une proposition d'achat");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
