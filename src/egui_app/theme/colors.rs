//! Color Constants
//!
//! Palette of the marketplace app: deep green primary, amber secondary,
//! neutral grays.

use eframe::egui::Color32;

/// Brand color: titles, search field border, primary buttons
pub const PRIMARY: Color32 = Color32::from_rgb(0x1B, 0x5E, 0x4B);

/// Loader color and accents
pub const SECONDARY: Color32 = Color32::from_rgb(0xF2, 0xA9, 0x00);

/// Muted text, icons, photo outline
pub const GRAY: Color32 = Color32::from_rgb(0x8A, 0x8F, 0x98);

/// Window background
pub const BG: Color32 = Color32::from_rgb(0xF4, 0xF6, 0xF5);

/// Header strip behind the banner
pub const HEADER_BG: Color32 = Color32::from_rgb(0x1B, 0x5E, 0x4B);

/// Banner card on light backgrounds
pub const BANNER_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Banner card in dark mode
pub const BANNER_BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x1F, 0x22);

/// Hovered result row
pub const ROW_HOVER: Color32 = Color32::from_rgb(0xE6, 0xEE, 0xEB);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x22, 0x25, 0x29);

/// Text on the header strip
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xFA, 0xFA, 0xFA);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);
