// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Alert capacity, stacking position and timings
//! - `[loading]` - Loading overlay message and appearance
//! - `[diagnostics]` - In-memory activity log size
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to `load_with_override()`/`save_with_override()`
//! 2. `STOCKROOM_CONFIG_DIR` environment variable
//! 3. Platform config directory (via `dirs`) joined with `Stockroom`
//!
//! # Examples
//!
//! ```no_run
//! use stockroom::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.notifications.max_alerts = Some(3);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::loading::{Backdrop, LoadingVariant};
use crate::ui::notifications::StackPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for the config directory.
const APP_NAME: &str = "Stockroom";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "STOCKROOM_CONFIG_DIR";

/// Warning surfaced to the user when the settings file is unusable.
pub const LOAD_WARNING: &str = "Your settings could not be read. Default settings are in use.";

// =============================================================================
// Section Structs
// =============================================================================

/// Alert queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// Maximum number of alerts kept on screen.
    #[serde(default = "default_max_alerts", skip_serializing_if = "Option::is_none")]
    pub max_alerts: Option<usize>,

    /// Screen anchor of the alert stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<StackPosition>,

    /// Default time-to-live in milliseconds (`0` = sticky).
    #[serde(
        default = "default_alert_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Delay between hiding and removing an alert.
    #[serde(
        default = "default_removal_grace_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub removal_grace_ms: Option<u64>,

    /// Time-to-live of the short toast helpers.
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub toast_duration_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_alerts: default_max_alerts(),
            position: Some(StackPosition::default()),
            default_duration_ms: default_alert_duration_ms(),
            removal_grace_ms: default_removal_grace_ms(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

/// Loading overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadingConfig {
    /// Message shown when `show` is called without one.
    #[serde(
        default = "default_loading_message",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_message: Option<String>,

    /// Busy indicator style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<LoadingVariant>,

    /// How the overlay covers the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<Backdrop>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            default_message: default_loading_message(),
            variant: Some(LoadingVariant::default()),
            backdrop: Some(Backdrop::default()),
        }
    }
}

/// Activity log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Number of events retained in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub loading: LoadingConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Rejects values that parse but make no sense.
    ///
    /// Out-of-range numbers are clamped later by the newtypes; only values
    /// with no sensible clamp target are errors here.
    pub fn validate(&self) -> Result<()> {
        if self.notifications.max_alerts == Some(0) {
            return Err(Error::InvalidSetting {
                key: "notifications.max_alerts",
                reason: "must be a positive integer".to_string(),
            });
        }
        if let Some(message) = &self.loading.default_message {
            if message.trim().is_empty() {
                return Err(Error::InvalidSetting {
                    key: "loading.default_message",
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_alerts() -> Option<usize> {
    Some(DEFAULT_MAX_ALERTS)
}

fn default_alert_duration_ms() -> Option<u64> {
    Some(DEFAULT_ALERT_DURATION_MS)
}

fn default_removal_grace_ms() -> Option<u64> {
    Some(DEFAULT_REMOVAL_GRACE_MS)
}

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_loading_message() -> Option<String> {
    Some(DEFAULT_LOADING_MESSAGE.to_string())
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honouring the override and the environment.
#[must_use]
pub fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if base_dir.is_some() {
        return base_dir;
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
    }
    (Config::default(), None)
}

/// Loads and validates configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
