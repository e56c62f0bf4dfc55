//! Keyboard window module
//!
//! Provides a GUI window showing the text area and the on-screen keyboard,
//! and bridges physical key events to the keyboard controller.

mod keyboard_window;
pub mod keymap;
mod render;

pub use keyboard_window::KeyboardWindowState;
pub use render::{render_hint, render_keyboard, render_text_area, HINT_TEXT};
