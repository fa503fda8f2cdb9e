//! Spin and animation-mode controls.

use egui::{Align2, Color32, CornerRadius, CursorIcon, Sense, Ui, vec2};

use moldeck_core::AnimationMode;

use crate::{sizing, theme};

/// The spin toggle, a native checkbox like the original control.
pub struct SpinCheckbox {
    on: bool,
    label: String,
}

impl SpinCheckbox {
    pub fn new(on: bool) -> Self {
        Self {
            on,
            label: "Spin".to_string(),
        }
    }

    /// Override the checkbox label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Show the checkbox; returns the new state when toggled.
    pub fn show(self, ui: &mut Ui) -> Option<bool> {
        let mut on = self.on;
        let response = ui.checkbox(&mut on, self.label);
        response.changed().then_some(on)
    }
}

/// One row of animation-mode buttons with exactly one highlighted.
pub struct AnimationModeBar {
    current: Option<AnimationMode>,
}

impl AnimationModeBar {
    pub fn new(current: Option<AnimationMode>) -> Self {
        Self { current }
    }

    /// Show the bar; returns the mode whose button was clicked.
    pub fn show(self, ui: &mut Ui) -> Option<AnimationMode> {
        let mut clicked = None;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = vec2(4.0, 0.0);
            for mode in AnimationMode::ALL {
                if mode_button(ui, mode.label(), self.current == Some(mode)) {
                    clicked = Some(mode);
                }
            }
        });
        clicked
    }
}

/// A text toggle button, solid accent when selected.
fn mode_button(ui: &mut Ui, label: &str, selected: bool) -> bool {
    let font_id = egui::FontId::proportional(11.0);
    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        font_id.clone(),
        Color32::PLACEHOLDER, // Color doesn't matter for sizing
    );
    let size = vec2(galley.size().x + 16.0, 24.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if selected {
            theme::ACCENT
        } else if response.hovered() {
            Color32::from_gray(235)
        } else {
            Color32::from_gray(245)
        };

        let text_color = if selected {
            Color32::WHITE
        } else {
            Color32::from_gray(80)
        };

        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
        ui.painter()
            .text(rect.center(), Align2::CENTER_CENTER, label, font_id, text_color);
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}
