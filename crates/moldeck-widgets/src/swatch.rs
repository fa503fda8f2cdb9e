//! Clickable color swatch cells.

use egui::{
    Color32, CornerRadius, CursorIcon, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, vec2,
};

use crate::sizing;

/// Style for color swatches.
#[derive(Clone)]
pub struct SwatchStyle {
    /// Size of the swatch
    pub size: Vec2,
    /// Corner radius (0 for the flat picker-grid cells)
    pub corner_radius: u8,
    /// Stroke drawn when the swatch is selected
    pub selected_stroke: Stroke,
}

impl Default for SwatchStyle {
    fn default() -> Self {
        Self {
            size: vec2(sizing::SWATCH_CELL, sizing::SWATCH_CELL),
            corner_radius: 0,
            selected_stroke: Stroke::new(2.0, Color32::from_gray(30)),
        }
    }
}

impl SwatchStyle {
    /// Flat grid cell (default).
    pub fn grid() -> Self {
        Self::default()
    }

    /// Free-standing rounded swatch.
    pub fn rounded() -> Self {
        Self {
            size: vec2(20.0, 20.0),
            corner_radius: sizing::CORNER_RADIUS,
            ..Default::default()
        }
    }
}

/// Response from showing a swatch.
#[derive(Debug, Clone, Copy)]
pub struct SwatchResponse {
    pub clicked: bool,
    /// Pointer is over the swatch this frame (drives the hover preview).
    pub hovered: bool,
    pub rect: Rect,
}

/// A clickable color swatch.
pub struct ColorSwatch {
    color: Color32,
    tooltip: String,
    selected: bool,
    style: SwatchStyle,
}

impl ColorSwatch {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: impl Into<String>) -> Self {
        Self {
            color,
            tooltip: tooltip.into(),
            selected: false,
            style: SwatchStyle::default(),
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the style.
    pub fn style(mut self, style: SwatchStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the swatch.
    pub fn show(self, ui: &mut Ui) -> SwatchResponse {
        let (rect, response) = ui.allocate_exact_size(self.style.size, Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, CornerRadius::same(self.style.corner_radius), self.color);

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(self.style.corner_radius),
                    self.style.selected_stroke,
                    StrokeKind::Inside,
                );
            }
        }

        let clicked = response.clicked();
        let hovered = response.hovered();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        SwatchResponse {
            clicked,
            hovered,
            rect,
        }
    }
}
