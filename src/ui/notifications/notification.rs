// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `Notification` record, its `Kind`, and
//! the `SnackbarOptions` builder callers use to describe a new snackbar.

use iced::widget::image;
use std::fmt;
use std::time::Instant;

/// Unique identifier for a notification.
///
/// Ids are handed out by the owning store's
/// [`IdGenerator`](super::store::IdGenerator) and never reused within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wraps a raw id value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of snackbar; selects the color treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    Error,
    #[default]
    Info,
    Success,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Error, Kind::Info, Kind::Success];
}

/// Icon shown before the label.
///
/// The store keeps the value as-is; image handles are reference counted so
/// cloning one never copies pixel data.
#[derive(Debug, Clone)]
pub enum LeadingIcon {
    /// A short text glyph such as `"!"` or `"✓"`.
    Glyph(String),
    Image(image::Handle),
}

/// Button rendered after the message.
///
/// Pressing it reports `key` back to the host application, which decides
/// what the action means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingAction {
    pub label: String,
    pub key: String,
}

/// Caller-supplied description of a snackbar.
#[derive(Debug, Clone)]
pub struct SnackbarOptions {
    kind: Kind,
    label: String,
    message: Option<String>,
    leading_icon: Option<LeadingIcon>,
    trailing_action: Option<TrailingAction>,
}

impl SnackbarOptions {
    pub fn new(kind: Kind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            message: None,
            leading_icon: None,
            trailing_action: None,
        }
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self::new(Kind::Error, label)
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self::new(Kind::Info, label)
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::new(Kind::Success, label)
    }

    /// Sets the secondary text shown under the label.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn leading_icon(mut self, icon: LeadingIcon) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    /// Adds a trailing action button that reports `key` when pressed.
    #[must_use]
    pub fn trailing_action(mut self, label: impl Into<String>, key: impl Into<String>) -> Self {
        self.trailing_action = Some(TrailingAction {
            label: label.into(),
            key: key.into(),
        });
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A snackbar currently held by the store. Immutable once created.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    label: String,
    message: Option<String>,
    leading_icon: Option<LeadingIcon>,
    trailing_action: Option<TrailingAction>,
    created_at: Instant,
}

impl Notification {
    pub(crate) fn from_options(id: NotificationId, options: SnackbarOptions) -> Self {
        let SnackbarOptions {
            kind,
            label,
            message,
            leading_icon,
            trailing_action,
        } = options;

        Self {
            id,
            kind,
            label,
            message,
            leading_icon,
            trailing_action,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn leading_icon(&self) -> Option<&LeadingIcon> {
        self.leading_icon.as_ref()
    }

    #[must_use]
    pub fn trailing_action(&self) -> Option<&TrailingAction> {
        self.trailing_action.as_ref()
    }

    /// Returns when this notification entered the store.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let options = SnackbarOptions::error("Upload failed")
            .message("The server returned 503")
            .leading_icon(LeadingIcon::Glyph("!".into()))
            .trailing_action("Retry", "retry-upload");

        let notification = Notification::from_options(NotificationId::from_raw(7), options);

        assert_eq!(notification.id().get(), 7);
        assert_eq!(notification.kind(), Kind::Error);
        assert_eq!(notification.label(), "Upload failed");
        assert_eq!(notification.message(), Some("The server returned 503"));
        assert!(matches!(
            notification.leading_icon(),
            Some(LeadingIcon::Glyph(glyph)) if glyph == "!"
        ));
        let action = notification.trailing_action().expect("action set");
        assert_eq!(action.label, "Retry");
        assert_eq!(action.key, "retry-upload");
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(SnackbarOptions::error("").kind(), Kind::Error);
        assert_eq!(SnackbarOptions::info("").kind(), Kind::Info);
        assert_eq!(SnackbarOptions::success("").kind(), Kind::Success);
    }

    #[test]
    fn optional_fields_default_to_none() {
        let notification =
            Notification::from_options(NotificationId::from_raw(1), SnackbarOptions::info("Hi"));
        assert!(notification.message().is_none());
        assert!(notification.leading_icon().is_none());
        assert!(notification.trailing_action().is_none());
    }

    #[test]
    fn ids_order_by_creation() {
        assert!(NotificationId::from_raw(1) < NotificationId::from_raw(2));
        assert_eq!(NotificationId::from_raw(3).to_string(), "#3");
    }
}
