//! Keyboard module - Controller state machine, modifiers, and text buffer

mod chord;
mod controller;
mod modifiers;
mod text;

pub use chord::ChordTracker;
pub use controller::{KeyView, Keyboard};
pub use modifiers::{ModifierState, ShiftMode};
pub use text::{TextArea, TextBuffer};
