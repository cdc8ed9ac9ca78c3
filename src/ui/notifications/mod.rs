// SPDX-License-Identifier: MPL-2.0
//! Stacked snackbar notifications.
//!
//! Snackbars pile up along the top edge of the window, newest in front. The
//! stack spreads out while the pointer is over it, and a hovered snackbar
//! stays in place and stops its auto-dismiss countdown.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `Kind` and the `SnackbarOptions` builder
//! - [`store`] - `Store` owning the ordered notifications
//! - [`layout`] - Pure offset/scale computation for each stack slot
//! - [`timeouts`] - Per-notification auto-dismiss timers
//! - [`stack`] - `Stack` component wiring hover, dismissal and rendering
//! - [`toast`] - Widget for a single snackbar
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{SnackbarOptions, Stack, StackSettings, Store};
//!
//! let mut store = Store::new();
//! let mut stack = Stack::new(StackSettings::default());
//!
//! store.add(SnackbarOptions::error("Upload failed").message("Try again later"));
//! stack.reconcile(&store, Instant::now());
//!
//! // In your view function
//! let overlay = stack.view(&store, dark).map(Message::Snackbar);
//! ```

pub mod layout;
mod notification;
mod stack;
mod store;
pub mod timeouts;
mod toast;

pub use layout::{compute_layout, Layout};
pub use notification::{
    Kind, LeadingIcon, Notification, NotificationId, SnackbarOptions, TrailingAction,
};
pub use stack::{DismissReason, Event, Message, Position, Stack, StackSettings};
pub use store::{IdGenerator, Sequential, Store};
pub use timeouts::{Registry, ResumePolicy};
