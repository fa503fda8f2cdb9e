//! The one picker session shared by every color box.
//!
//! This separates the session bookkeeping (which box the popup is bound to,
//! what happens on pick or cancel) from the widget that draws it, so the
//! transition rules can be tested without a UI.

use crate::color::Rgb;

/// Visibility of the shared picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Hidden,
    Visible,
}

/// The box binding of a visible picker: the anchor it hangs under and the
/// pass-through token identifying the box that opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSession {
    pub anchor: String,
    pub token: usize,
}

/// A completed pick, routed back to the registry by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickEvent {
    pub color: Rgb,
    pub token: usize,
}

/// State machine behind the popup picker.
///
/// There is exactly one controller per deck and at most one open session at
/// a time: activating while visible rebinds the session to the new anchor
/// instead of stacking a second picker.
#[derive(Debug, Default)]
pub struct PickerController {
    session: Option<PickerSession>,
    hovered: Option<Rgb>,
}

impl PickerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PickerState {
        if self.session.is_some() {
            PickerState::Visible
        } else {
            PickerState::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    /// The current session, while visible.
    pub fn session(&self) -> Option<&PickerSession> {
        self.session.as_ref()
    }

    /// Open the picker under `anchor` for the box identified by `token`,
    /// replacing any session already open.
    pub fn activate(&mut self, anchor: impl Into<String>, token: usize) {
        self.hovered = None;
        self.session = Some(PickerSession {
            anchor: anchor.into(),
            token,
        });
    }

    /// A swatch was chosen: hide and emit the pick for the session's box.
    /// A pick with no open session is a no-op.
    #[must_use]
    pub fn pick(&mut self, color: Rgb) -> Option<PickEvent> {
        self.hovered = None;
        let session = self.session.take()?;
        Some(PickEvent {
            color,
            token: session.token,
        })
    }

    /// The cancel affordance was chosen: hide without emitting anything.
    pub fn cancel(&mut self) {
        self.hovered = None;
        self.session = None;
    }

    /// Update the hover-preview color. Purely visual; no state transition,
    /// and ignored while hidden.
    pub fn set_hovered(&mut self, color: Option<Rgb>) {
        if self.is_visible() {
            self.hovered = color;
        }
    }

    pub fn hovered(&self) -> Option<Rgb> {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_shows_picker() {
        let mut picker = PickerController::new();
        assert_eq!(picker.state(), PickerState::Hidden);
        picker.activate("colorBox0", 0);
        assert_eq!(picker.state(), PickerState::Visible);
        assert_eq!(picker.session().unwrap().anchor, "colorBox0");
    }

    #[test]
    fn test_reactivation_redirects_single_session() {
        let mut picker = PickerController::new();
        picker.activate("colorBox0", 0);
        picker.activate("colorBox2", 2);
        let session = picker.session().unwrap();
        assert_eq!(session.anchor, "colorBox2");
        assert_eq!(session.token, 2);
        // The redirected session resolves with the second box's token.
        let event = picker.pick(Rgb::new(9, 9, 9)).unwrap();
        assert_eq!(event.token, 2);
    }

    #[test]
    fn test_pick_emits_once_then_hides() {
        let mut picker = PickerController::new();
        picker.activate("colorBox1", 1);
        let event = picker.pick(Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(event, PickEvent { color: Rgb::new(1, 2, 3), token: 1 });
        assert_eq!(picker.state(), PickerState::Hidden);
        assert_eq!(picker.pick(Rgb::new(4, 5, 6)), None);
    }

    #[test]
    fn test_cancel_emits_nothing() {
        let mut picker = PickerController::new();
        picker.activate("colorBox0", 0);
        picker.cancel();
        assert_eq!(picker.state(), PickerState::Hidden);
        assert_eq!(picker.pick(Rgb::new(1, 2, 3)), None);
    }

    #[test]
    fn test_hover_preview_is_session_scoped() {
        let mut picker = PickerController::new();
        picker.set_hovered(Some(Rgb::new(7, 7, 7)));
        assert_eq!(picker.hovered(), None);

        picker.activate("colorBox0", 0);
        picker.set_hovered(Some(Rgb::new(7, 7, 7)));
        assert_eq!(picker.hovered(), Some(Rgb::new(7, 7, 7)));

        picker.cancel();
        assert_eq!(picker.hovered(), None);
    }
}
