//! Spin and animation-mode commands for the viewer.

use crate::dispatch::{DispatchResult, ScriptDispatcher};

/// Script for the spin toggle.
pub fn spin_script(on: bool) -> &'static str {
    if on { "spin on" } else { "spin off" }
}

/// Forward the spin state and wait for the viewer to acknowledge it.
pub fn set_spin(
    dispatcher: &mut dyn ScriptDispatcher,
    on: bool,
    target: &str,
) -> DispatchResult<String> {
    dispatcher.send_wait(spin_script(on), target)
}

/// Playback mode of the viewer's frame animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMode {
    Loop,
    PlayOnce,
    Palindrome,
}

impl AnimationMode {
    pub const ALL: [AnimationMode; 3] = [
        AnimationMode::Loop,
        AnimationMode::PlayOnce,
        AnimationMode::Palindrome,
    ];

    /// Wire name, as accepted by [`set_animation_mode`].
    pub const fn name(self) -> &'static str {
        match self {
            AnimationMode::Loop => "loop",
            AnimationMode::PlayOnce => "playOnce",
            AnimationMode::Palindrome => "palindrome",
        }
    }

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            AnimationMode::Loop => "Loop",
            AnimationMode::PlayOnce => "Play once",
            AnimationMode::Palindrome => "Palindrome",
        }
    }

    /// The script establishing this mode.
    pub const fn script(self) -> &'static str {
        match self {
            AnimationMode::Loop => "animation mode loop 0.2 0.2",
            AnimationMode::PlayOnce => "animation mode once",
            AnimationMode::Palindrome => "animation mode palindrome 0.2 0.2",
        }
    }

    /// Parse a wire name; `None` for anything unrecognized.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }
}

/// Select an animation mode by wire name.
///
/// Returns the mode the caller should now highlight. An unrecognized name
/// sends nothing and yields `Ok(None)`, leaving the highlight untouched;
/// dispatcher failures propagate unchanged.
pub fn set_animation_mode(
    dispatcher: &mut dyn ScriptDispatcher,
    selected: &str,
    target: &str,
) -> DispatchResult<Option<AnimationMode>> {
    let Some(mode) = AnimationMode::parse(selected) else {
        return Ok(None);
    };
    dispatcher.send(mode.script(), target)?;
    Ok(Some(mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::RecordingDispatcher;

    #[test]
    fn test_spin_waits_for_ack() {
        let mut d = RecordingDispatcher::with_reply("spinning");
        assert_eq!(set_spin(&mut d, true, "0").unwrap(), "spinning");
        set_spin(&mut d, false, "0").unwrap();
        assert_eq!(d.scripts(), vec!["spin on", "spin off"]);
        assert!(d.sent().iter().all(|s| s.waited));
    }

    #[test]
    fn test_animation_mode_loop() {
        let mut d = RecordingDispatcher::new();
        let mode = set_animation_mode(&mut d, "loop", "0").unwrap();
        assert_eq!(mode, Some(AnimationMode::Loop));
        assert_eq!(d.scripts(), vec!["animation mode loop 0.2 0.2"]);
        assert_eq!(d.sent()[0].target, "0");
        assert!(!d.sent()[0].waited);
    }

    #[test]
    fn test_animation_mode_scripts() {
        let mut d = RecordingDispatcher::new();
        set_animation_mode(&mut d, "playOnce", "1").unwrap();
        set_animation_mode(&mut d, "palindrome", "1").unwrap();
        assert_eq!(
            d.scripts(),
            vec!["animation mode once", "animation mode palindrome 0.2 0.2"]
        );
    }

    #[test]
    fn test_unrecognized_mode_sends_nothing() {
        let mut d = RecordingDispatcher::new();
        assert_eq!(set_animation_mode(&mut d, "bogus", "0").unwrap(), None);
        assert!(d.sent().is_empty());
    }

    #[test]
    fn test_wire_names_round_trip() {
        for mode in AnimationMode::ALL {
            assert_eq!(AnimationMode::parse(mode.name()), Some(mode));
        }
        assert_eq!(AnimationMode::parse("Loop"), None);
    }
}
