//! Virtual Keyboard
//!
//! An on-screen keyboard that types into a text area, driven by both pointer
//! clicks on the drawn keys and the physical keyboard.
//!
//! # Features
//! - English and Russian layouts with Shift and CapsLock
//! - Ctrl + Shift switches the language; the choice survives restarts
//! - Physical and on-screen input share a single press/release code path
//! - Latching or momentary Shift, selected in the config file

pub mod core;
pub mod keyboard;
pub mod layout;
pub mod window;

pub use core::config::Config;
pub use core::events::{ChordKey, KeyState, PhysicalKeyEvent};
pub use core::settings::{FileStore, MemoryStore, PreferenceStore, LANG_KEY};
pub use keyboard::{KeyView, Keyboard, ModifierState, ShiftMode, TextArea, TextBuffer};
pub use layout::{KeyDescriptor, KeyKind, Language, Layout, LayoutError, SystemAction};
