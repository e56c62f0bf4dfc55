//! Configuration management

use crate::keyboard::ShiftMode;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,
    /// Initial width in logical pixels
    #[serde(default = "default_width")]
    pub width: f64,
    /// Initial height in logical pixels
    #[serde(default = "default_height")]
    pub height: f64,
    /// Key label font size in points
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_title() -> String {
    "Virtual Keyboard".to_string()
}
fn default_width() -> f64 {
    1000.0
}
fn default_height() -> f64 {
    600.0
}
fn default_font_size() -> f32 {
    18.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            font_size: default_font_size(),
        }
    }
}

/// Keyboard behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    /// How the Shift key changes the shift state
    #[serde(default)]
    pub shift_mode: ShiftMode,
    /// Show the language switch hint under the keyboard
    #[serde(default = "default_show_hint")]
    pub show_hint: bool,
}

fn default_show_hint() -> bool {
    true
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            shift_mode: ShiftMode::default(),
            show_hint: default_show_hint(),
        }
    }
}

/// Preference storage configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Preferences file, empty for the platform data directory
    #[serde(default)]
    pub preferences_path: String,
}

impl StorageConfig {
    /// Explicit preferences path, if configured
    pub fn preferences_path(&self) -> Option<PathBuf> {
        let trimmed = self.preferences_path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Keyboard behavior
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    /// Preference storage
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            // Return default config if file doesn't exist
            Ok(Config::default())
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "virtualkeyboard", "VirtualKeyboard")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Get the default configuration embedded in the binary
    pub fn default_config_str() -> &'static str {
        include_str!("../../config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.title, "Virtual Keyboard");
        assert_eq!(config.window.font_size, 18.0);
        assert_eq!(config.keyboard.shift_mode, ShiftMode::Latch);
        assert!(config.keyboard.show_hint);
        assert_eq!(config.storage.preferences_path(), None);
    }

    #[test]
    fn test_embedded_default_matches() {
        let parsed: Config = toml::from_str(Config::default_config_str()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [keyboard]
            shift_mode = "hold"

            [storage]
            preferences_path = " /tmp/prefs.toml "
            "#,
        )
        .unwrap();
        assert_eq!(parsed.keyboard.shift_mode, ShiftMode::Hold);
        assert!(parsed.keyboard.show_hint);
        assert_eq!(parsed.window, WindowConfig::default());
        assert_eq!(
            parsed.storage.preferences_path(),
            Some(PathBuf::from("/tmp/prefs.toml"))
        );
    }

    #[test]
    fn test_load_from_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        std::fs::write(&path, "[keyboard]\nshift_mode = \"sticky\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
