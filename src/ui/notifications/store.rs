// SPDX-License-Identifier: MPL-2.0
//! Ordered storage of active notifications.
//!
//! The `Store` is the single owner of the notification sequence. Insertion
//! order is arrival order, so the last entry is the topmost snackbar. Other
//! components only ever look entries up by [`NotificationId`].

use super::notification::{Notification, NotificationId, SnackbarOptions};
use std::fmt;

/// Source of fresh notification ids.
///
/// Each store owns its generator, so two stores never hand out colliding ids
/// and tests can inject a predictable sequence.
pub trait IdGenerator: fmt::Debug {
    /// Returns an id strictly greater than every id returned before.
    fn next_id(&mut self) -> NotificationId;
}

/// Counts up from 1.
#[derive(Debug, Default, Clone)]
pub struct Sequential {
    last: u64,
}

impl Sequential {
    /// Starts counting after `last`, so the first id handed out is `last + 1`.
    #[must_use]
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }
}

impl IdGenerator for Sequential {
    /// # Panics
    ///
    /// Panics once `u64::MAX` has been handed out, since no larger id exists.
    fn next_id(&mut self) -> NotificationId {
        self.last = self
            .last
            .checked_add(1)
            .expect("notification id space exhausted");
        NotificationId::from_raw(self.last)
    }
}

/// Owns the stack of visible notifications.
#[derive(Debug)]
pub struct Store {
    snackbars: Vec<Notification>,
    ids: Box<dyn IdGenerator>,
    /// Oldest entries are dropped once the stack grows past this.
    max_visible: Option<usize>,
    /// Ids dropped over `max_visible`, not yet reported.
    evicted: Vec<NotificationId>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty, unbounded store with its own sequential ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(Sequential::default())
    }

    /// Creates an empty store that draws ids from `ids`.
    #[must_use]
    pub fn with_ids(ids: impl IdGenerator + 'static) -> Self {
        Self {
            snackbars: Vec::new(),
            ids: Box::new(ids),
            max_visible: None,
            evicted: Vec::new(),
        }
    }

    /// Caps the number of notifications kept at once. A limit of zero is
    /// treated as one.
    #[must_use]
    pub fn with_max_visible(mut self, limit: Option<usize>) -> Self {
        self.max_visible = limit.map(|limit| limit.max(1));
        self
    }

    /// Appends a new notification on top of the stack.
    ///
    /// Identical labels are not merged. The returned id may be ignored by
    /// callers that never need to address the entry again.
    pub fn add(&mut self, options: SnackbarOptions) -> NotificationId {
        let id = self.ids.next_id();
        tracing::debug!(%id, kind = ?options.kind(), label = options.label(), "snackbar added");
        self.snackbars.push(Notification::from_options(id, options));

        if let Some(limit) = self.max_visible {
            let overflow = self.snackbars.len().saturating_sub(limit);
            for dropped in self.snackbars.drain(..overflow) {
                tracing::debug!(
                    id = %dropped.id(),
                    age = ?dropped.created_at().elapsed(),
                    "snackbar dropped over capacity"
                );
                self.evicted.push(dropped.id());
            }
        }

        id
    }

    /// Removes the notification with `id`.
    ///
    /// Returns `false` when no such entry exists, which happens routinely
    /// when a timeout and a manual close race for the same snackbar.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        match self.snackbars.iter().position(|n| n.id() == id) {
            Some(pos) => {
                let removed = self.snackbars.remove(pos);
                tracing::debug!(%id, age = ?removed.created_at().elapsed(), "snackbar removed");
                true
            }
            None => {
                tracing::trace!(%id, "remove ignored, snackbar already gone");
                false
            }
        }
    }

    /// Returns the current stack, bottom first.
    #[must_use]
    pub fn snackbars(&self) -> &[Notification] {
        &self.snackbars
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.snackbars.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the position of `id` in the stack.
    #[must_use]
    pub fn index_of(&self, id: NotificationId) -> Option<usize> {
        self.snackbars.iter().position(|n| n.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = NotificationId> + '_ {
        self.snackbars.iter().map(Notification::id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snackbars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snackbars.is_empty()
    }

    /// Drains the ids dropped over the visible limit since the last call.
    pub(crate) fn take_evicted(&mut self) -> Vec<NotificationId> {
        std::mem::take(&mut self.evicted)
    }
}
