//! Color-box registration and pick routing.
//!
//! A color box pairs a swatch trigger on the deck with the script (or
//! author callback) that runs when a color is picked for it. Boxes are kept
//! in registration order; a box's index doubles as the picker's
//! pass-through token.

use std::fmt;

use thiserror::Error;

use crate::color::{ColorFormatError, Rgb, StartColor};
use crate::dispatch::{DispatchError, ScriptDispatcher};
use crate::script::{ScriptTemplate, TemplateError};

/// Author post-processing hook: receives the picked color, the box's applet
/// target, and the dispatcher, and sends whatever it sees fit.
pub type PickCallback =
    Box<dyn FnMut(Rgb, &str, &mut dyn ScriptDispatcher) -> Result<(), DispatchError>>;

/// What a box does with a picked color.
pub enum BoxAction {
    /// Fill the `$COLOR$` token and forward the script to the dispatcher.
    Script(ScriptTemplate),
    /// Hand the color to author code instead of dispatching directly.
    Callback(PickCallback),
}

impl fmt::Debug for BoxAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxAction::Script(template) => f.debug_tuple("Script").field(template).finish(),
            BoxAction::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Registration errors.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error(transparent)]
    InvalidColor(#[from] ColorFormatError),
    #[error(transparent)]
    InvalidTemplate(#[from] TemplateError),
    #[error("a color box with id {0:?} is already registered")]
    DuplicateId(String),
}

/// Errors routing a picked color back to its box.
#[derive(Debug, Error)]
pub enum PickError {
    #[error("no color box is registered at index {0}")]
    UnknownBox(usize),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// A registered color box.
#[derive(Debug)]
pub struct ColorBox {
    id: String,
    target: String,
    action: BoxAction,
    current: Rgb,
}

impl ColorBox {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The color currently shown in the box's swatch.
    pub fn color(&self) -> Rgb {
        self.current
    }
}

/// Configuration for [`ColorBoxRegistry::register`].
#[derive(Debug)]
pub struct BoxConfig {
    action: BoxAction,
    start: StartColor,
    id: Option<String>,
    target: Option<String>,
}

impl BoxConfig {
    /// A box driven by a `$COLOR$` script template.
    pub fn script(template: impl Into<String>) -> Result<Self, TemplateError> {
        Ok(Self::with_action(BoxAction::Script(ScriptTemplate::new(template)?)))
    }

    /// A box that hands picked colors to author code.
    pub fn callback(
        callback: impl FnMut(Rgb, &str, &mut dyn ScriptDispatcher) -> Result<(), DispatchError>
        + 'static,
    ) -> Self {
        Self::with_action(BoxAction::Callback(Box::new(callback)))
    }

    fn with_action(action: BoxAction) -> Self {
        Self {
            action,
            start: StartColor::default(),
            id: None,
            target: None,
        }
    }

    /// Starting swatch color; accepts `[r, g, b]` or `"#RRGGBB"`.
    pub fn start_color(mut self, color: impl Into<StartColor>) -> Self {
        self.start = color.into();
        self
    }

    /// Explicit box id. Defaults to `colorBox<n>` in registration order.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Target applet id. Defaults to `"0"`.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// All color boxes on the deck, in registration order.
#[derive(Debug, Default)]
pub struct ColorBoxRegistry {
    boxes: Vec<ColorBox>,
}

impl ColorBoxRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a box and return its index, which doubles as the picker's
    /// pass-through token.
    pub fn register(&mut self, config: BoxConfig) -> Result<usize, RegisterError> {
        let index = self.boxes.len();
        let current = config.start.resolve()?;
        let id = config.id.unwrap_or_else(|| format!("colorBox{index}"));
        if self.boxes.iter().any(|b| b.id == id) {
            return Err(RegisterError::DuplicateId(id));
        }
        let target = config.target.unwrap_or_else(|| "0".to_string());
        self.boxes.push(ColorBox {
            id,
            target,
            action: config.action,
            current,
        });
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColorBox> {
        self.boxes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorBox> {
        self.boxes.iter()
    }

    /// Route a picked color to the box that opened the picker: update its
    /// swatch and run its action.
    pub fn apply_pick(
        &mut self,
        index: usize,
        color: Rgb,
        dispatcher: &mut dyn ScriptDispatcher,
    ) -> Result<(), PickError> {
        let bx = self
            .boxes
            .get_mut(index)
            .ok_or(PickError::UnknownBox(index))?;
        bx.current = color;
        match &mut bx.action {
            BoxAction::Script(template) => {
                let script = template.fill(color);
                log::debug!("box {}: dispatching {:?} to applet {}", bx.id, script, bx.target);
                dispatcher.send(&script, &bx.target)?;
            }
            BoxAction::Callback(callback) => {
                log::debug!("box {}: invoking pick callback", bx.id);
                callback(color, &bx.target, dispatcher)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::dispatch::RecordingDispatcher;

    fn script_box(template: &str) -> BoxConfig {
        BoxConfig::script(template).unwrap()
    }

    #[test]
    fn test_sequential_default_ids() {
        let mut registry = ColorBoxRegistry::new();
        for _ in 0..3 {
            registry.register(script_box("color atom $COLOR$")).unwrap();
        }
        let ids: Vec<_> = registry.iter().map(ColorBox::id).collect();
        assert_eq!(ids, vec!["colorBox0", "colorBox1", "colorBox2"]);
    }

    #[test]
    fn test_register_returns_indices_in_order() {
        let mut registry = ColorBoxRegistry::new();
        assert_eq!(registry.register(script_box("a $COLOR$")).unwrap(), 0);
        assert_eq!(registry.register(script_box("b $COLOR$")).unwrap(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_pick_substitutes_and_dispatches() {
        let mut registry = ColorBoxRegistry::new();
        let index = registry
            .register(
                script_box("select carbon; color atom $COLOR$;").start_color([10, 20, 30]),
            )
            .unwrap();
        assert_eq!(registry.get(index).unwrap().color(), Rgb::new(10, 20, 30));

        let mut dispatcher = RecordingDispatcher::new();
        registry
            .apply_pick(index, Rgb::new(1, 2, 3), &mut dispatcher)
            .unwrap();

        assert_eq!(dispatcher.scripts(), vec!["select carbon; color atom 1,2,3;"]);
        assert_eq!(dispatcher.sent()[0].target, "0");
        // The box's own swatch follows the pick.
        assert_eq!(registry.get(index).unwrap().color(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_explicit_id_and_target() {
        let mut registry = ColorBoxRegistry::new();
        let index = registry
            .register(script_box("background $COLOR$").id("bgBox").target("2"))
            .unwrap();
        let bx = registry.get(index).unwrap();
        assert_eq!(bx.id(), "bgBox");
        assert_eq!(bx.target(), "2");

        let mut dispatcher = RecordingDispatcher::new();
        registry
            .apply_pick(index, Rgb::new(0, 0, 0), &mut dispatcher)
            .unwrap();
        assert_eq!(dispatcher.sent()[0].target, "2");
    }

    #[test]
    fn test_hex_start_color() {
        let mut registry = ColorBoxRegistry::new();
        let index = registry
            .register(script_box("color atom $COLOR$").start_color("#646464"))
            .unwrap();
        assert_eq!(registry.get(index).unwrap().color(), Rgb::new(100, 100, 100));
    }

    #[test]
    fn test_malformed_start_color_fails_registration() {
        let mut registry = ColorBoxRegistry::new();
        let err = registry
            .register(script_box("color atom $COLOR$").start_color("dark grey"))
            .unwrap_err();
        assert!(matches!(err, RegisterError::InvalidColor(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = ColorBoxRegistry::new();
        registry.register(script_box("a $COLOR$").id("box")).unwrap();
        let err = registry
            .register(script_box("b $COLOR$").id("box"))
            .unwrap_err();
        assert!(matches!(err, RegisterError::DuplicateId(id) if id == "box"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_box_index() {
        let mut registry = ColorBoxRegistry::new();
        let mut dispatcher = RecordingDispatcher::new();
        let err = registry
            .apply_pick(7, Rgb::new(1, 2, 3), &mut dispatcher)
            .unwrap_err();
        assert!(matches!(err, PickError::UnknownBox(7)));
        assert!(dispatcher.sent().is_empty());
    }

    #[test]
    fn test_callback_action_gets_color_target_dispatcher() {
        let seen: Rc<RefCell<Vec<(Rgb, String)>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_by_callback = Rc::clone(&seen);

        let mut registry = ColorBoxRegistry::new();
        let index = registry
            .register(
                BoxConfig::callback(move |color: Rgb, target: &str, dispatcher: &mut dyn ScriptDispatcher| {
                    seen_by_callback.borrow_mut().push((color, target.to_string()));
                    dispatcher.send(&format!("color bond {color}"), target)
                })
                .target("1"),
            )
            .unwrap();

        let mut dispatcher = RecordingDispatcher::new();
        registry
            .apply_pick(index, Rgb::new(5, 6, 7), &mut dispatcher)
            .unwrap();

        assert_eq!(seen.borrow().as_slice(), &[(Rgb::new(5, 6, 7), "1".to_string())]);
        // The callback dispatched through the deck's own channel.
        assert_eq!(dispatcher.scripts(), vec!["color bond 5,6,7"]);
        assert_eq!(registry.get(index).unwrap().color(), Rgb::new(5, 6, 7));
    }
}
