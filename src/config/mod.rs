// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[snackbar]` - Stack position, auto-hide duration, hover resume policy, capacity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `ICED_SNACKBAR_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_snackbar::config::{self, Config};
//! use iced_snackbar::ui::notifications::Position;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.snackbar.position = Position::TopRight;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::{Position, ResumePolicy, StackSettings};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedSnackbar";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SNACKBAR_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Snackbar stack settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnackbarConfig {
    #[serde(default)]
    pub position: Position,

    /// Auto-dismiss delay in milliseconds.
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,

    /// Whether un-hovering restarts or resumes the countdown.
    #[serde(default)]
    pub resume_policy: ResumePolicy,

    /// Maximum snackbars kept at once; oldest are dropped beyond it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
}

impl Default for SnackbarConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            auto_hide_ms: DEFAULT_AUTO_HIDE_MS,
            resume_policy: ResumePolicy::default(),
            max_visible: None,
        }
    }
}

fn default_auto_hide_ms() -> u64 {
    DEFAULT_AUTO_HIDE_MS
}

impl SnackbarConfig {
    /// Auto-hide duration clamped to the accepted range.
    #[must_use]
    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms.clamp(MIN_AUTO_HIDE_MS, MAX_AUTO_HIDE_MS))
    }

    #[must_use]
    pub fn stack_settings(&self) -> StackSettings {
        StackSettings {
            position: self.position,
            auto_hide: self.auto_hide(),
            resume_policy: self.resume_policy,
        }
    }
}

/// Full configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub snackbar: SnackbarConfig,
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Returns the config file path, honoring `base_dir` first, then the
/// environment variable, then the platform config directory.
#[must_use]
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))?;
    Some(dir.join(CONFIG_FILE))
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Never fails: on a broken file, defaults are returned together with a
/// human-readable warning the caller can surface.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "settings unreadable, using defaults");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
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
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
            },
            snackbar: SnackbarConfig {
                position: Position::TopCenter,
                auto_hide_ms: 4000,
                resume_policy: ResumePolicy::Remaining,
                max_visible: Some(4),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[snackbar]\nposition = \"top-right\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");

        assert_eq!(loaded.snackbar.position, Position::TopRight);
        assert_eq!(loaded.snackbar.auto_hide_ms, DEFAULT_AUTO_HIDE_MS);
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn unknown_position_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[snackbar]\nposition = \"bottom-left\"\n")
            .expect("failed to write config");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[snackbar\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn auto_hide_is_clamped() {
        let mut snackbar = SnackbarConfig {
            auto_hide_ms: 1,
            ..SnackbarConfig::default()
        };
        assert_eq!(snackbar.auto_hide(), Duration::from_millis(MIN_AUTO_HIDE_MS));

        snackbar.auto_hide_ms = u64::MAX;
        assert_eq!(snackbar.auto_hide(), Duration::from_millis(MAX_AUTO_HIDE_MS));
    }

    #[test]
    fn stack_settings_mirror_section() {
        let snackbar = SnackbarConfig {
            position: Position::TopRight,
            auto_hide_ms: 2500,
            resume_policy: ResumePolicy::Remaining,
            max_visible: None,
        };
        let settings = snackbar.stack_settings();
        assert_eq!(settings.position, Position::TopRight);
        assert_eq!(settings.auto_hide, Duration::from_millis(2500));
        assert_eq!(settings.resume_policy, ResumePolicy::Remaining);
    }
}
