//! MolDeck Core Library
//!
//! UI-free logic for the MolDeck viewer control deck: the shaded swatch
//! palette, the picker session state machine, the color-box registry, and
//! the script commands forwarded to the embedded molecular viewer.

pub mod color;
pub mod commands;
pub mod dispatch;
pub mod palette;
pub mod picker;
pub mod registry;
pub mod script;

pub use color::{ColorFormatError, Rgb, StartColor};
pub use commands::{AnimationMode, set_animation_mode, set_spin, spin_script};
pub use dispatch::{
    DispatchError, DispatchResult, RecordingDispatcher, ScriptDispatcher, SentScript,
};
pub use palette::{GRID_COLUMNS, GRID_ROWS, Palette, palette};
pub use picker::{PickEvent, PickerController, PickerSession, PickerState};
pub use registry::{
    BoxAction, BoxConfig, ColorBox, ColorBoxRegistry, PickCallback, PickError, RegisterError,
};
pub use script::{COLOR_TOKEN, ScriptTemplate, TemplateError};
