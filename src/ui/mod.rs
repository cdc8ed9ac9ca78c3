// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: state
//! structs expose `update`, `view` and `subscription`, and the host maps their
//! messages into its own.
//!
//! - [`notifications`] - Stacked snackbar notifications
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and the snackbar color table

pub mod design_tokens;
pub mod notifications;
pub mod theming;
