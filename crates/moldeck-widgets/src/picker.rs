//! The popup swatch grid shared by every color box.

use egui::{
    Align2, Color32, Context, CornerRadius, CursorIcon, FontId, Id, Order, Pos2, Rect, Sense,
    Ui, vec2,
};

use moldeck_core::{PickEvent, PickerController, Rgb, palette};

use crate::swatch::{ColorSwatch, SwatchStyle};
use crate::{color32, frame, sizing, theme};

/// Where the popup hangs relative to its anchor box.
#[derive(Clone, Copy, Default)]
pub enum PopupPosition {
    /// Below the anchor (boxes in a top toolbar)
    #[default]
    Below,
    /// Above the anchor (boxes in a bottom toolbar)
    Above,
}

/// What happened in the popup this frame.
#[derive(Debug, Default)]
pub struct PickerResponse {
    /// A swatch was chosen; route it to the registry.
    pub picked: Option<PickEvent>,
    /// The cancel affordance was chosen.
    pub cancelled: bool,
}

/// Renders the picker for the controller's current session.
///
/// Shows nothing while the controller is hidden. All session bookkeeping,
/// including redirect-on-reactivation, lives in the controller itself.
pub struct PickerPopup<'a> {
    controller: &'a mut PickerController,
    anchor_rect: Rect,
    current: Option<Rgb>,
    position: PopupPosition,
}

impl<'a> PickerPopup<'a> {
    /// Create a popup bound to the controller, anchored at a box's rect.
    pub fn new(controller: &'a mut PickerController, anchor_rect: Rect) -> Self {
        Self {
            controller,
            anchor_rect,
            current: None,
            position: PopupPosition::Below,
        }
    }

    /// Highlight the active box's current color in the grid.
    pub fn current_color(mut self, color: Option<Rgb>) -> Self {
        self.current = color;
        self
    }

    /// Position the popup above the anchor.
    pub fn above(mut self) -> Self {
        self.position = PopupPosition::Above;
        self
    }

    /// Position the popup below the anchor.
    pub fn below(mut self) -> Self {
        self.position = PopupPosition::Below;
        self
    }

    /// Show the popup and return what was chosen, if anything.
    pub fn show(self, ctx: &Context) -> PickerResponse {
        let PickerPopup {
            controller,
            anchor_rect,
            current,
            position,
        } = self;

        let mut out = PickerResponse::default();
        if !controller.is_visible() {
            return out;
        }

        let grid = palette();
        let cell = sizing::SWATCH_CELL;
        let grid_width = cell * grid.columns() as f32;
        // Swatch rows plus the hover strip and frame padding.
        let popup_height = cell * grid.rows() as f32 + 44.0;

        let pos = match position {
            PopupPosition::Below => Pos2::new(anchor_rect.left(), anchor_rect.bottom() + 4.0),
            PopupPosition::Above => {
                Pos2::new(anchor_rect.left(), anchor_rect.top() - popup_height - 4.0)
            }
        };

        let mut picked_color: Option<Rgb> = None;
        let mut hovered: Option<Rgb> = None;
        let mut cancelled = false;

        egui::Area::new(Id::new("moldeck_picker"))
            .fixed_pos(pos)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                frame::panel_frame().show(ui, |ui| {
                    ui.spacing_mut().item_spacing = vec2(0.0, 0.0);

                    // Preview strip: takes the color under the pointer.
                    ui.horizontal(|ui| {
                        let preview = controller.hovered().map(color32).unwrap_or(Color32::WHITE);
                        let (strip, _) = ui.allocate_exact_size(
                            vec2(grid_width - 18.0, 16.0),
                            Sense::hover(),
                        );
                        ui.painter().rect_filled(strip, CornerRadius::ZERO, preview);
                        ui.add_space(2.0);
                        if cancel_button(ui) {
                            cancelled = true;
                        }
                    });
                    ui.add_space(4.0);

                    for row in 0..grid.rows() {
                        ui.horizontal(|ui| {
                            for col in 0..grid.columns() {
                                let color = grid.at(row, col);
                                let swatch = ColorSwatch::new(color32(color), color.to_string())
                                    .style(SwatchStyle::grid())
                                    .selected(current == Some(color))
                                    .show(ui);
                                if swatch.hovered {
                                    hovered = Some(color);
                                }
                                if swatch.clicked {
                                    picked_color = Some(color);
                                }
                            }
                        });
                    }
                });
            });

        if let Some(color) = picked_color {
            out.picked = controller.pick(color);
        } else if cancelled {
            controller.cancel();
            out.cancelled = true;
        } else if let Some(color) = hovered {
            // Keep the last hovered color when the pointer leaves the grid.
            controller.set_hovered(Some(color));
        }
        out
    }
}

/// The small "✕" that closes the popup without picking.
fn cancel_button(ui: &mut Ui) -> bool {
    let (rect, response) = ui.allocate_exact_size(vec2(16.0, 16.0), Sense::click());

    if ui.is_rect_visible(rect) {
        let bg_color = if response.hovered() {
            theme::HOVER_BG
        } else {
            Color32::TRANSPARENT
        };
        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "✕",
            FontId::proportional(10.0),
            theme::TEXT_MUTED,
        );
    }

    let clicked = response.clicked();
    response
        .on_hover_text("Cancel")
        .on_hover_cursor(CursorIcon::PointingHand);
    clicked
}
