//! Ctrl+Shift language switch detection

use crate::core::events::ChordKey;
use std::collections::BTreeSet;

/// Modifiers seen since the last key-up
///
/// The chord is complete once both Control and Shift went down before any
/// key was released. The tracker must be cleared after every key-up.
#[derive(Debug, Clone, Default)]
pub struct ChordTracker {
    held: BTreeSet<ChordKey>,
}

impl ChordTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a chord modifier going down
    pub fn key_down(&mut self, key: ChordKey) {
        self.held.insert(key);
    }

    pub fn is_complete(&self) -> bool {
        self.held.len() == 2
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_and_shift_complete_chord() {
        let mut chord = ChordTracker::new();
        chord.key_down(ChordKey::Control);
        assert!(!chord.is_complete());
        chord.key_down(ChordKey::Shift);
        assert!(chord.is_complete());
    }

    #[test]
    fn test_repeats_count_once() {
        let mut chord = ChordTracker::new();
        chord.key_down(ChordKey::Shift);
        chord.key_down(ChordKey::Shift);
        assert_eq!(chord.len(), 1);
        assert!(!chord.is_complete());
    }

    #[test]
    fn test_clear() {
        let mut chord = ChordTracker::new();
        chord.key_down(ChordKey::Control);
        chord.key_down(ChordKey::Shift);
        chord.clear();
        assert!(chord.is_empty());
        assert!(!chord.is_complete());
    }
}
