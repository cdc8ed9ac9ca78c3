// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` is a stacked toast ("snackbar") notification component for
//! the Iced GUI framework.
//!
//! Snackbars stack along the top edge of the window, spread out while
//! hovered, and dismiss themselves after a configurable delay that pauses
//! while the pointer rests on one. A small demo application is included.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
