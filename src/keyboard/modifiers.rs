//! Shift and CapsLock state

use serde::{Deserialize, Serialize};

/// How the Shift key drives the shift state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShiftMode {
    /// Toggle on release; stays on until the next release
    #[default]
    Latch,
    /// Toggle on press and back on release, active only while held
    Hold,
}

/// Modifier state owned by the keyboard controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub is_shift: bool,
    pub is_caps_lock: bool,
}

impl ModifierState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_shift(&mut self) {
        self.is_shift = !self.is_shift;
    }

    pub fn toggle_caps_lock(&mut self) {
        self.is_caps_lock = !self.is_caps_lock;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ModifierState::new();
        assert!(!state.is_shift);
        assert!(!state.is_caps_lock);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = ModifierState::new();
        state.toggle_shift();
        assert_eq!(
            state,
            ModifierState {
                is_shift: true,
                is_caps_lock: false
            }
        );
        state.toggle_caps_lock();
        state.toggle_shift();
        assert_eq!(
            state,
            ModifierState {
                is_shift: false,
                is_caps_lock: true
            }
        );
    }
}
