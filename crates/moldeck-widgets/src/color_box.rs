//! The color-box trigger: a small color well that opens the picker.

use egui::{
    Color32, CornerRadius, CursorIcon, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::{sizing, theme};

/// The trigger well for one registered color box: shows the box's current
/// color next to a dropdown arrowhead, and reports its rect so the popup
/// can be anchored under it.
pub struct ColorBoxButton {
    color: Color32,
    tooltip: String,
    open: bool,
}

impl ColorBoxButton {
    /// Create a new color-box trigger.
    pub fn new(color: Color32, tooltip: impl Into<String>) -> Self {
        Self {
            color,
            tooltip: tooltip.into(),
            open: false,
        }
    }

    /// Mark the box as the one the picker is currently bound to.
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Show the trigger and return (clicked, rect).
    pub fn show(self, ui: &mut Ui) -> (bool, Rect) {
        let size = vec2(sizing::BOX_WIDTH + 12.0, sizing::BOX_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            // Color well.
            let well = Rect::from_min_size(rect.min, vec2(sizing::BOX_WIDTH, sizing::BOX_HEIGHT));
            ui.painter().rect_filled(well, CornerRadius::same(2), self.color);
            let border = if self.open { theme::ACCENT } else { theme::BORDER };
            ui.painter().rect_stroke(
                well,
                CornerRadius::same(2),
                Stroke::new(1.0, border),
                StrokeKind::Inside,
            );

            // Dropdown arrowhead.
            let tip_color = if response.hovered() {
                theme::TEXT
            } else {
                theme::TEXT_MUTED
            };
            let cx = rect.right() - 6.0;
            let cy = rect.center().y;
            ui.painter().add(egui::Shape::convex_polygon(
                vec![
                    Pos2::new(cx - 4.0, cy - 2.0),
                    Pos2::new(cx + 4.0, cy - 2.0),
                    Pos2::new(cx, cy + 3.0),
                ],
                tip_color,
                Stroke::NONE,
            ));
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        (clicked, rect)
    }
}
