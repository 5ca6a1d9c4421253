// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[alert]` - Alert queue behavior (backdrop dismissal, closing fade)
//! - `[table]` - Table rendering options
//!
//! # Examples
//!
//! ```no_run
//! use iced_helpers::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning returned when the settings file cannot be read.
pub const LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Alert queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertConfig {
    /// Whether a click on the backdrop dismisses the top alert.
    #[serde(
        default = "default_dismiss_on_backdrop",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_on_backdrop: Option<bool>,

    /// Closing fade length in milliseconds. `0` disables the fade.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            dismiss_on_backdrop: default_dismiss_on_backdrop(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl AlertConfig {
    /// Closing fade duration, clamped to [`MAX_ALERT_TRANSITION_MS`].
    #[must_use]
    pub fn transition(&self) -> Duration {
        let ms = self
            .transition_ms
            .unwrap_or(DEFAULT_ALERT_TRANSITION_MS)
            .min(MAX_ALERT_TRANSITION_MS);
        Duration::from_millis(ms)
    }
}

/// Table rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableConfig {
    /// Alternate body row backgrounds.
    #[serde(default = "default_striped", skip_serializing_if = "Option::is_none")]
    pub striped: Option<bool>,
}

impl TableConfig {
    pub fn striped(&self) -> bool {
        self.striped.unwrap_or(DEFAULT_TABLE_STRIPED)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            striped: default_striped(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub alert: AlertConfig,

    #[serde(default)]
    pub table: TableConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_dismiss_on_backdrop() -> Option<bool> {
    Some(DEFAULT_DISMISS_ON_BACKDROP)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_ALERT_TRANSITION_MS)
}

fn default_striped() -> Option<bool> {
    Some(DEFAULT_TABLE_STRIPED)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning message.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (Config::default(), Some(LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration under a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
