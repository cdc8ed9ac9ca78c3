// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications;
use crate::ui::notifications::Position;
use crate::ui::theming::ThemeMode;

/// Snackbar presets offered by the demo page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Error with a leading icon and a trailing action.
    ErrorWithAction,
    Success,
    /// Info with a secondary message.
    InfoWithMessage,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Show(Demo),
    ToggleDarkMode,
    Snackbar(notifications::Message),
}

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub position: Option<Position>,
    pub auto_hide_ms: Option<u64>,
    pub theme: Option<ThemeMode>,
    pub config_dir: Option<String>,
}
