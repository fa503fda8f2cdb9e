//! Reusable egui components for the MolDeck control deck.
//!
//! This crate provides the styled widgets the deck is assembled from:
//!
//! - **Swatch**: clickable color cells for the picker grid
//! - **Picker**: the popup swatch grid anchored under a color box
//! - **Color box**: the trigger well that opens the picker
//! - **Controls**: spin checkbox and animation-mode bar
//! - **Frame/Layout**: panel frames, section labels, separators

pub mod color_box;
pub mod controls;
pub mod frame;
pub mod layout;
pub mod picker;
pub mod swatch;

pub use color_box::ColorBoxButton;
pub use controls::{AnimationModeBar, SpinCheckbox};
pub use frame::{panel_frame, toolbar_frame};
pub use layout::{section_label, separator, vertical_separator};
pub use picker::{PickerPopup, PickerResponse, PopupPosition};
pub use swatch::{ColorSwatch, SwatchResponse, SwatchStyle};

use moldeck_core::Rgb;

/// Convert a core color to an egui color.
pub fn color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Side of one swatch cell in the picker grid.
    pub const SWATCH_CELL: f32 = 14.0;
    /// Color-box well width.
    pub const BOX_WIDTH: f32 = 28.0;
    /// Color-box well height.
    pub const BOX_HEIGHT: f32 = 14.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue), also the animation-mode highlight
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
