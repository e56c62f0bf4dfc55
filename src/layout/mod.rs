//! Keyboard layout table
//!
//! Static description of every key on the virtual keyboard: which physical
//! key it stands for, whether it is a system key or a character key, and the
//! glyphs a character key produces in each language.

mod keys;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of keyboard rows
pub const ROW_COUNT: u8 = 5;

/// Input language of the character keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    #[default]
    En,
    /// Russian
    Ru,
}

impl Language {
    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Ru]
    }

    /// Storage code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// The other language
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown language code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code: {0:?}")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

/// Action performed by a system key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemAction {
    Backspace,
    Tab,
    CapsLock,
    Enter,
    Shift,
    Space,
    Delete,
    Ctrl,
    Alt,
    Win,
}

impl SystemAction {
    /// Fixed label shown on the key, independent of language and modifiers
    pub fn label(&self) -> &'static str {
        match self {
            SystemAction::Backspace => "Backspace",
            SystemAction::Tab => "Tab",
            SystemAction::CapsLock => "CapsLock",
            SystemAction::Enter => "Enter",
            SystemAction::Shift => "Shift",
            SystemAction::Space => "",
            SystemAction::Delete => "Delete",
            SystemAction::Ctrl => "Ctrl",
            SystemAction::Alt => "Alt",
            SystemAction::Win => "Win",
        }
    }
}

/// Glyph pair for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub default_value: &'static str,
    pub shift_value: &'static str,
}

impl Glyphs {
    /// Glyph for the given shift state
    pub fn select(&self, shift: bool) -> &'static str {
        if shift {
            self.shift_value
        } else {
            self.default_value
        }
    }
}

/// What a key does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Editor or modifier action, no language entries
    System(SystemAction),
    /// Glyph-producing key with an entry for every language
    Character { en: Glyphs, ru: Glyphs },
}

/// One key of the layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyDescriptor {
    /// Physical key code (W3C `KeyboardEvent.code` name)
    pub code: &'static str,
    pub kind: KeyKind,
    /// Keyboard row, 0 at the top
    pub row: u8,
    /// Relative width, 1.0 for a regular key
    pub width: f32,
}

impl KeyDescriptor {
    pub fn is_system(&self) -> bool {
        matches!(self.kind, KeyKind::System(_))
    }

    /// System action of this key, if it is a system key
    pub fn system_action(&self) -> Option<SystemAction> {
        match self.kind {
            KeyKind::System(action) => Some(action),
            KeyKind::Character { .. } => None,
        }
    }

    /// Glyphs for a language, if this is a character key
    pub fn glyphs(&self, lang: Language) -> Option<&Glyphs> {
        match &self.kind {
            KeyKind::System(_) => None,
            KeyKind::Character { en, ru } => Some(match lang {
                Language::En => en,
                Language::Ru => ru,
            }),
        }
    }

    /// Unmodified label for the given language and shift state
    ///
    /// System keys always return their fixed label. CapsLock is applied by
    /// the controller on top of this.
    pub fn label(&self, lang: Language, shift: bool) -> &'static str {
        match &self.kind {
            KeyKind::System(action) => action.label(),
            KeyKind::Character { .. } => self
                .glyphs(lang)
                .map(|glyphs| glyphs.select(shift))
                .unwrap_or_default(),
        }
    }
}

/// Malformed layout table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("layout contains no keys")]
    Empty,
    #[error("key at position {index} has an empty code")]
    EmptyCode { index: usize },
    #[error("duplicate key code {code}")]
    DuplicateCode { code: String },
    #[error("key {code} has an empty {lang} glyph")]
    EmptyGlyph { code: String, lang: Language },
    #[error("key {code} is on row {row}, layout has {} rows", ROW_COUNT)]
    RowOutOfRange { code: String, row: u8 },
    #[error("key {code} has invalid width {width}")]
    InvalidWidth { code: String, width: f32 },
}

/// Ordered set of keys, top row first
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    keys: Vec<KeyDescriptor>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}

impl Layout {
    /// Built-in English/Russian layout
    pub fn standard() -> Self {
        Self {
            keys: keys::STANDARD.to_vec(),
        }
    }

    /// Layout from an explicit key list (not validated)
    pub fn from_keys(keys: Vec<KeyDescriptor>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[KeyDescriptor] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Look up a key by its physical code
    pub fn get(&self, code: &str) -> Option<&KeyDescriptor> {
        self.keys.iter().find(|key| key.code == code)
    }

    /// Check the table invariants
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.keys.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, key) in self.keys.iter().enumerate() {
            if key.code.is_empty() {
                return Err(LayoutError::EmptyCode { index });
            }
            if !seen.insert(key.code) {
                return Err(LayoutError::DuplicateCode {
                    code: key.code.to_string(),
                });
            }
            if key.row >= ROW_COUNT {
                return Err(LayoutError::RowOutOfRange {
                    code: key.code.to_string(),
                    row: key.row,
                });
            }
            if !(key.width.is_finite() && key.width > 0.0) {
                return Err(LayoutError::InvalidWidth {
                    code: key.code.to_string(),
                    width: key.width,
                });
            }
            for &lang in Language::all() {
                if let Some(glyphs) = key.glyphs(lang) {
                    if glyphs.default_value.is_empty() || glyphs.shift_value.is_empty() {
                        return Err(LayoutError::EmptyGlyph {
                            code: key.code.to_string(),
                            lang,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
