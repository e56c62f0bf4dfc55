//! Physical keyboard bridge
//!
//! Translates winit key events into [`PhysicalKeyEvent`]s carrying the same
//! code names the layout table uses.

use crate::core::events::{KeyState, PhysicalKeyEvent};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, KeyCode, NamedKey, PhysicalKey};

/// winit key codes and their W3C `KeyboardEvent.code` names
const KEY_CODES: &[(KeyCode, &str)] = &[
    (KeyCode::Backquote, "Backquote"),
    (KeyCode::Digit1, "Digit1"),
    (KeyCode::Digit2, "Digit2"),
    (KeyCode::Digit3, "Digit3"),
    (KeyCode::Digit4, "Digit4"),
    (KeyCode::Digit5, "Digit5"),
    (KeyCode::Digit6, "Digit6"),
    (KeyCode::Digit7, "Digit7"),
    (KeyCode::Digit8, "Digit8"),
    (KeyCode::Digit9, "Digit9"),
    (KeyCode::Digit0, "Digit0"),
    (KeyCode::Minus, "Minus"),
    (KeyCode::Equal, "Equal"),
    (KeyCode::Backspace, "Backspace"),
    (KeyCode::Tab, "Tab"),
    (KeyCode::KeyQ, "KeyQ"),
    (KeyCode::KeyW, "KeyW"),
    (KeyCode::KeyE, "KeyE"),
    (KeyCode::KeyR, "KeyR"),
    (KeyCode::KeyT, "KeyT"),
    (KeyCode::KeyY, "KeyY"),
    (KeyCode::KeyU, "KeyU"),
    (KeyCode::KeyI, "KeyI"),
    (KeyCode::KeyO, "KeyO"),
    (KeyCode::KeyP, "KeyP"),
    (KeyCode::BracketLeft, "BracketLeft"),
    (KeyCode::BracketRight, "BracketRight"),
    (KeyCode::Backslash, "Backslash"),
    (KeyCode::Delete, "Delete"),
    (KeyCode::CapsLock, "CapsLock"),
    (KeyCode::KeyA, "KeyA"),
    (KeyCode::KeyS, "KeyS"),
    (KeyCode::KeyD, "KeyD"),
    (KeyCode::KeyF, "KeyF"),
    (KeyCode::KeyG, "KeyG"),
    (KeyCode::KeyH, "KeyH"),
    (KeyCode::KeyJ, "KeyJ"),
    (KeyCode::KeyK, "KeyK"),
    (KeyCode::KeyL, "KeyL"),
    (KeyCode::Semicolon, "Semicolon"),
    (KeyCode::Quote, "Quote"),
    (KeyCode::Enter, "Enter"),
    (KeyCode::ShiftLeft, "ShiftLeft"),
    (KeyCode::KeyZ, "KeyZ"),
    (KeyCode::KeyX, "KeyX"),
    (KeyCode::KeyC, "KeyC"),
    (KeyCode::KeyV, "KeyV"),
    (KeyCode::KeyB, "KeyB"),
    (KeyCode::KeyN, "KeyN"),
    (KeyCode::KeyM, "KeyM"),
    (KeyCode::Comma, "Comma"),
    (KeyCode::Period, "Period"),
    (KeyCode::Slash, "Slash"),
    (KeyCode::ArrowUp, "ArrowUp"),
    (KeyCode::ShiftRight, "ShiftRight"),
    (KeyCode::ControlLeft, "ControlLeft"),
    (KeyCode::SuperLeft, "MetaLeft"),
    (KeyCode::AltLeft, "AltLeft"),
    (KeyCode::Space, "Space"),
    (KeyCode::AltRight, "AltRight"),
    (KeyCode::SuperRight, "MetaRight"),
    (KeyCode::ArrowLeft, "ArrowLeft"),
    (KeyCode::ArrowDown, "ArrowDown"),
    (KeyCode::ArrowRight, "ArrowRight"),
    (KeyCode::ControlRight, "ControlRight"),
];

/// W3C code name for a winit key code
pub fn code_name(code: KeyCode) -> Option<&'static str> {
    KEY_CODES
        .iter()
        .find(|(key_code, _)| *key_code == code)
        .map(|(_, name)| *name)
}

/// Human-readable logical key name (`Control`, `Shift`, `q`, ...)
pub fn key_name(key: &Key) -> String {
    match key {
        Key::Named(NamedKey::Control) => "Control".to_string(),
        Key::Named(NamedKey::Shift) => "Shift".to_string(),
        Key::Named(named) => format!("{:?}", named),
        Key::Character(c) => c.to_string(),
        Key::Dead(_) => "Dead".to_string(),
        Key::Unidentified(_) => "Unidentified".to_string(),
    }
}

/// Translate a winit key event
///
/// Codes missing from the table keep their winit debug name, which no layout
/// key matches.
pub fn physical_event(event: &KeyEvent) -> PhysicalKeyEvent {
    let code = match event.physical_key {
        PhysicalKey::Code(code) => code_name(code)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{:?}", code)),
        PhysicalKey::Unidentified(native) => format!("{:?}", native),
    };

    PhysicalKeyEvent {
        code,
        key: key_name(&event.logical_key),
        state: match event.state {
            ElementState::Pressed => KeyState::Pressed,
            ElementState::Released => KeyState::Released,
        },
    }
}
