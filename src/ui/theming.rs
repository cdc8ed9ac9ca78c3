// SPDX-License-Identifier: MPL-2.0
//! Light/dark mode handling and the snackbar color table.

use crate::error::Error;
use crate::ui::design_tokens::palette;
use crate::ui::notifications::Kind;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to light on detection error
                matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
            }
        }
    }

    /// Returns the explicit mode opposite to the effective one.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(Error::InvalidTheme(value.to_string())),
        }
    }
}

/// Colors of one snackbar kind in one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnackbarColors {
    pub background: Color,
    pub text: Color,
    /// Background while hovered; also used for the border.
    pub hover: Color,
}

/// Looks up the colors for `kind` on a dark or light page.
#[must_use]
pub fn snackbar_colors(dark: bool, kind: Kind) -> SnackbarColors {
    use crate::ui::design_tokens::palette::{dark as d, light as l};

    let (background, text, hover) = match (dark, kind) {
        (false, Kind::Error) => (l::ERROR_BACKGROUND, l::ERROR_TEXT, l::ERROR_HOVER),
        (false, Kind::Info) => (l::INFO_BACKGROUND, l::INFO_TEXT, l::INFO_HOVER),
        (false, Kind::Success) => (l::SUCCESS_BACKGROUND, l::SUCCESS_TEXT, l::SUCCESS_HOVER),
        (true, Kind::Error) => (d::ERROR_BACKGROUND, d::ERROR_TEXT, d::ERROR_HOVER),
        (true, Kind::Info) => (d::INFO_BACKGROUND, d::INFO_TEXT, d::INFO_HOVER),
        (true, Kind::Success) => (d::SUCCESS_BACKGROUND, d::SUCCESS_TEXT, d::SUCCESS_HOVER),
    };

    SnackbarColors {
        background,
        text,
        hover,
    }
}

/// Background of trailing action buttons.
#[must_use]
pub fn action_background(dark: bool) -> Color {
    if dark {
        palette::dark::ACTION_BACKGROUND
    } else {
        palette::light::ACTION_BACKGROUND
    }
}
