//! Keyboard controller
//!
//! Owns the modifier state, the language preference and the rendered key
//! labels, and turns key presses and releases into text buffer edits.
//! Pointer clicks on drawn keys and physical key events both end up in
//! [`Keyboard::press`] and [`Keyboard::release`].

use super::chord::ChordTracker;
use super::modifiers::{ModifierState, ShiftMode};
use super::text::TextBuffer;
use crate::core::events::{KeyState, PhysicalKeyEvent};
use crate::core::settings::{PreferenceStore, LANG_KEY};
use crate::layout::{KeyDescriptor, KeyKind, Language, Layout, LayoutError, SystemAction};
use std::collections::HashSet;
use tracing::{debug, info, trace, warn};

/// Rendered state of one key
#[derive(Debug, Clone, PartialEq)]
pub struct KeyView {
    pub code: &'static str,
    pub label: String,
    pub is_system: bool,
    /// CapsLock indicator mark
    pub indicator: bool,
    /// Key is currently held down
    pub active: bool,
    pub row: u8,
    pub width: f32,
}

/// Virtual keyboard state machine
pub struct Keyboard<S: PreferenceStore> {
    layout: Layout,
    store: S,
    lang: Language,
    modifiers: ModifierState,
    chord: ChordTracker,
    shift_mode: ShiftMode,
    /// Codes currently held down
    held: HashSet<&'static str>,
    views: Vec<KeyView>,
    /// Number of full label renders so far
    renders: u64,
}

impl<S: PreferenceStore> Keyboard<S> {
    /// Create a keyboard over `layout`, reading the language from `store`
    pub fn new(layout: Layout, store: S, shift_mode: ShiftMode) -> Result<Self, LayoutError> {
        layout.validate()?;

        let lang = match store.get(LANG_KEY) {
            Some(code) => code.parse::<Language>().unwrap_or_else(|e| {
                warn!("Ignoring stored language: {}", e);
                Language::default()
            }),
            None => Language::default(),
        };

        let views = layout
            .keys()
            .iter()
            .map(|key| KeyView {
                code: key.code,
                label: String::new(),
                is_system: key.is_system(),
                indicator: false,
                active: false,
                row: key.row,
                width: key.width,
            })
            .collect();

        let mut keyboard = Self {
            layout,
            store,
            lang,
            modifiers: ModifierState::new(),
            chord: ChordTracker::new(),
            shift_mode,
            held: HashSet::new(),
            views,
            renders: 0,
        };
        keyboard.update_buttons();

        info!(
            "Keyboard ready: {} keys, language {}, shift mode {:?}",
            keyboard.layout.len(),
            keyboard.lang,
            shift_mode
        );

        Ok(keyboard)
    }

    /// Standard English/Russian keyboard
    pub fn standard(store: S, shift_mode: ShiftMode) -> Result<Self, LayoutError> {
        Self::new(Layout::standard(), store, shift_mode)
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn chord(&self) -> &ChordTracker {
        &self.chord
    }

    /// Rendered keys in layout order
    pub fn views(&self) -> &[KeyView] {
        &self.views
    }

    pub fn view(&self, code: &str) -> Option<&KeyView> {
        self.views.iter().find(|view| view.code == code)
    }

    /// Currently displayed label of a key
    pub fn label(&self, code: &str) -> Option<&str> {
        self.view(code).map(|view| view.label.as_str())
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }

    pub fn is_held(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    /// Label a key shows under the current language and modifiers
    fn resolve_label(&self, key: &KeyDescriptor) -> String {
        let value = key.label(self.lang, self.modifiers.is_shift);
        if self.modifiers.is_caps_lock && !key.is_system() {
            value.to_uppercase()
        } else {
            value.to_string()
        }
    }

    /// Recompute every key label
    pub fn update_buttons(&mut self) {
        let labels: Vec<(String, bool)> = self
            .layout
            .keys()
            .iter()
            .map(|key| {
                let indicator = key.system_action() == Some(SystemAction::CapsLock)
                    && self.modifiers.is_caps_lock;
                (self.resolve_label(key), indicator)
            })
            .collect();

        for (view, (label, indicator)) in self.views.iter_mut().zip(labels) {
            view.label = label;
            view.indicator = indicator;
        }
        self.renders += 1;
    }

    fn set_active(&mut self, code: &str, active: bool) {
        if let Some(view) = self.views.iter_mut().find(|view| view.code == code) {
            view.active = active;
        }
    }

    /// Press hook; returns false for codes not on the keyboard
    pub fn press(&mut self, code: &str, text: &mut dyn TextBuffer) -> bool {
        let Some(key) = self.layout.get(code).copied() else {
            trace!("No key for code {}", code);
            return false;
        };

        let first_press = self.held.insert(key.code);
        self.set_active(key.code, true);

        match key.kind {
            KeyKind::System(action) => {
                debug!("Key pressed: {} ({:?})", key.code, action);
                self.action(action, first_press, text);
            }
            KeyKind::Character { .. } => {
                let value = self
                    .view(key.code)
                    .map(|view| view.label.clone())
                    .unwrap_or_default();
                debug!("Key pressed: {} -> {:?}", key.code, value);
                update_value(text, &value);
            }
        }

        true
    }

    /// Release hook; returns false for codes not on the keyboard
    pub fn release(&mut self, code: &str) -> bool {
        let Some(key) = self.layout.get(code).copied() else {
            trace!("No key for code {}", code);
            return false;
        };

        let was_held = self.held.remove(key.code);
        self.set_active(key.code, false);

        if key.system_action() == Some(SystemAction::Shift) {
            // A hold-mode release only undoes a press we saw
            if self.shift_mode == ShiftMode::Latch || was_held {
                self.set_shift_state();
            }
        }

        true
    }

    fn action(&mut self, action: SystemAction, first_press: bool, text: &mut dyn TextBuffer) {
        match action {
            SystemAction::Backspace => backspace(text),
            SystemAction::Tab => update_value(text, "\t"),
            SystemAction::CapsLock => {
                if first_press {
                    self.set_caps_lock_state();
                }
            }
            SystemAction::Enter => update_value(text, "\n"),
            SystemAction::Shift => {
                if self.shift_mode == ShiftMode::Hold && first_press {
                    self.set_shift_state();
                }
            }
            SystemAction::Space => update_value(text, " "),
            SystemAction::Delete => delete(text),
            SystemAction::Ctrl | SystemAction::Alt | SystemAction::Win => {}
        }
    }

    fn set_caps_lock_state(&mut self) {
        self.modifiers.toggle_caps_lock();
        info!("CapsLock {}", if self.modifiers.is_caps_lock { "on" } else { "off" });
        self.update_buttons();
    }

    fn set_shift_state(&mut self) {
        self.modifiers.toggle_shift();
        debug!("Shift {}", if self.modifiers.is_shift { "on" } else { "off" });
        self.update_buttons();
    }

    /// Route a physical key event through the press/release hooks
    pub fn handle_physical(&mut self, event: &PhysicalKeyEvent, text: &mut dyn TextBuffer) {
        match event.state {
            KeyState::Pressed => self.physical_key_down(event, text),
            KeyState::Released => self.physical_key_up(event),
        }
    }

    /// Physical key-down: press the matching key and track the chord
    pub fn physical_key_down(&mut self, event: &PhysicalKeyEvent, text: &mut dyn TextBuffer) {
        self.press(&event.code, text);
        if let Some(key) = event.chord_key() {
            self.chord.key_down(key);
        }
    }

    /// Physical key-up: release the matching key, then resolve the chord
    pub fn physical_key_up(&mut self, event: &PhysicalKeyEvent) {
        self.release(&event.code);

        if self.chord.is_complete() {
            self.switch_language();
        }
        self.chord.clear();
    }

    /// Release every held key without resolving the chord
    ///
    /// Key-ups for keys held when the window loses focus never arrive as
    /// real events, so the window calls this on focus loss.
    pub fn release_all(&mut self) {
        let held: Vec<&'static str> = self.held.iter().copied().collect();
        if !held.is_empty() {
            debug!("Releasing held keys: {:?}", held);
        }
        for code in held {
            self.release(code);
        }
        self.chord.clear();
    }

    /// Flip between English and Russian and persist the choice
    pub fn switch_language(&mut self) {
        let new_lang = self.lang.toggled();
        if let Err(e) = self.store.set(LANG_KEY, new_lang.code()) {
            warn!("Failed to persist language {}: {:#}", new_lang, e);
        }
        self.lang = new_lang;
        info!("Language switched to {}", new_lang);
        self.update_buttons();
    }
}

/// Insert `value` over the current selection
fn update_value(text: &mut dyn TextBuffer, value: &str) {
    let (start, end) = text.selection();
    text.set_range_text(value, start, end);
}

/// Delete the selection and the character before it
fn backspace(text: &mut dyn TextBuffer) {
    let (start, end) = text.selection();
    text.set_range_text("", start.saturating_sub(1), end);
}

/// Delete the selection and the character after it
fn delete(text: &mut dyn TextBuffer) {
    let (start, end) = text.selection();
    text.set_range_text("", start, end.saturating_add(1));
}
