//! Keyboard input event definitions
//!
//! Both input sources reduce to these: the window bridge turns winit key
//! events into [`PhysicalKeyEvent`], and pointer interaction with a drawn key
//! becomes a press or release of that key's code.

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier participating in the language switch chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChordKey {
    Control,
    Shift,
}

impl ChordKey {
    /// Chord modifier named by a logical key name, if any
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Control" => Some(ChordKey::Control),
            "Shift" => Some(ChordKey::Shift),
            _ => None,
        }
    }
}

/// Key event from the physical keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalKeyEvent {
    /// Platform key code (W3C `KeyboardEvent.code` name, e.g. `KeyQ`)
    pub code: String,
    /// Logical key name (e.g. `Control`, `Shift`, `q`)
    pub key: String,
    pub state: KeyState,
}

impl PhysicalKeyEvent {
    pub fn down(code: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: key.into(),
            state: KeyState::Pressed,
        }
    }

    pub fn up(code: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: key.into(),
            state: KeyState::Released,
        }
    }

    /// Chord modifier carried by this event
    pub fn chord_key(&self) -> Option<ChordKey> {
        ChordKey::from_key_name(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_key_names() {
        assert_eq!(ChordKey::from_key_name("Control"), Some(ChordKey::Control));
        assert_eq!(ChordKey::from_key_name("Shift"), Some(ChordKey::Shift));
        assert_eq!(ChordKey::from_key_name("Alt"), None);
        assert_eq!(ChordKey::from_key_name("shift"), None);
    }

    #[test]
    fn test_event_constructors() {
        let down = PhysicalKeyEvent::down("ShiftLeft", "Shift");
        assert_eq!(down.state, KeyState::Pressed);
        assert_eq!(down.chord_key(), Some(ChordKey::Shift));

        let up = PhysicalKeyEvent::up("KeyQ", "q");
        assert_eq!(up.state, KeyState::Released);
        assert_eq!(up.chord_key(), None);
    }
}
