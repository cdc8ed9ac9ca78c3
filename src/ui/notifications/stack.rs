// SPDX-License-Identifier: MPL-2.0
//! The interactive snackbar stack.
//!
//! `Stack` owns the presentation state (expanded, hovered snackbar and its
//! frozen offset) and the auto-dismiss timers. The notifications themselves
//! stay in the caller's [`Store`], which is passed in to every call.
//!
//! ```ignore
//! let mut store = Store::new();
//! let mut stack = Stack::new(StackSettings::default());
//!
//! store.add(SnackbarOptions::success("Saved"));
//! stack.reconcile(&store, Instant::now());
//!
//! // update: stack.update(&mut store, message, Instant::now());
//! // view:   stack.view(&store, dark).map(Message::Snackbar)
//! ```

use super::layout::{self, Layout};
use super::notification::NotificationId;
use super::store::Store;
use super::timeouts::{Registry, ResumePolicy};
use super::toast;
use crate::config::defaults::{DEFAULT_AUTO_HIDE_MS, TICK_INTERVAL_MS};
use crate::error::Error;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::{mouse_area, text, Container, Stack as Layers};
use iced::{alignment, event, keyboard, mouse, time, Element, Length, Padding, Subscription};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Horizontal placement of the stack along the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopLeft,
    TopRight,
    TopCenter,
}

impl Position {
    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft => alignment::Horizontal::Left,
            Position::TopRight => alignment::Horizontal::Right,
            Position::TopCenter => alignment::Horizontal::Center,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::TopCenter => "top-center",
        };
        f.write_str(name)
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "top-left" => Ok(Position::TopLeft),
            "top-right" => Ok(Position::TopRight),
            "top-center" => Ok(Position::TopCenter),
            other => Err(Error::InvalidPosition(other.to_string())),
        }
    }
}

/// Why a snackbar is being dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The pointer was pressed outside the stack. Never dismisses.
    Clickaway,
    EscapeKeyDown,
    Timeout,
    CloseButton,
    /// Dropped by the store to stay within its visible limit.
    Capacity,
}

/// Mount-time configuration of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackSettings {
    pub position: Position,
    pub auto_hide: Duration,
    pub resume_policy: ResumePolicy,
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            position: Position::default(),
            auto_hide: Duration::from_millis(DEFAULT_AUTO_HIDE_MS),
            resume_policy: ResumePolicy::default(),
        }
    }
}

/// Messages for stack interaction.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer entered the stack region.
    StackEntered,
    /// Pointer left the stack region.
    StackExited,
    ItemEntered(NotificationId),
    ItemExited(NotificationId),
    /// Close control of a snackbar was pressed.
    Close(NotificationId),
    Dismiss {
        id: NotificationId,
        reason: DismissReason,
    },
    /// Escape was pressed anywhere in the window.
    EscapePressed,
    /// A mouse button was pressed anywhere in the window.
    PointerPressed,
    /// Periodic check of the auto-dismiss timers.
    Tick(Instant),
    TrailingAction {
        id: NotificationId,
        key: String,
    },
}

/// Outcomes the host application may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Removed {
        id: NotificationId,
        reason: DismissReason,
    },
    /// A trailing action button was pressed.
    Action { id: NotificationId, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Hover {
    id: NotificationId,
    /// Offset the snackbar had when the pointer entered it.
    frozen_offset: f32,
}

/// Presentation state and timers of the snackbar stack.
#[derive(Debug, Clone)]
pub struct Stack {
    settings: StackSettings,
    expanded: bool,
    hovered: Option<Hover>,
    timeouts: Registry,
    /// Set by [`Stack::unmount`]; no timer is armed again afterwards.
    unmounted: bool,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(StackSettings::default())
    }
}

impl Stack {
    #[must_use]
    pub fn new(settings: StackSettings) -> Self {
        Self {
            settings,
            expanded: false,
            hovered: None,
            timeouts: Registry::new(settings.auto_hide, settings.resume_policy),
            unmounted: false,
        }
    }

    #[must_use]
    pub fn settings(&self) -> StackSettings {
        self.settings
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn hovered(&self) -> Option<NotificationId> {
        self.hovered.map(|hover| hover.id)
    }

    /// Offset captured when the pointer entered the hovered snackbar.
    #[must_use]
    pub fn frozen_offset(&self) -> Option<f32> {
        self.hovered.map(|hover| hover.frozen_offset)
    }

    #[must_use]
    pub fn timeouts(&self) -> &Registry {
        &self.timeouts
    }

    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Handles a stack message and returns what happened to the store.
    ///
    /// Snackbars the store dropped over its visible limit since the last call
    /// are reported first, as `Removed` with [`DismissReason::Capacity`].
    pub fn update(&mut self, store: &mut Store, message: Message, now: Instant) -> Vec<Event> {
        if self.unmounted {
            tracing::trace!(?message, "message ignored after unmount");
            return Vec::new();
        }

        let mut events: Vec<Event> = store
            .take_evicted()
            .into_iter()
            .map(|id| {
                self.timeouts.cancel(id);
                Event::Removed {
                    id,
                    reason: DismissReason::Capacity,
                }
            })
            .collect();

        match message {
            Message::StackEntered => self.expanded = true,
            Message::StackExited => self.expanded = false,
            Message::ItemEntered(id) => {
                if let Some(index) = store.index_of(id) {
                    let offset = self.layout_at(index, store.len(), id).offset_y;
                    self.hovered = Some(Hover {
                        id,
                        frozen_offset: offset,
                    });
                }
            }
            Message::ItemExited(id) => {
                if self.hovered() == Some(id) {
                    self.hovered = None;
                }
            }
            Message::Close(id) => {
                self.dismiss(store, id, DismissReason::CloseButton, &mut events);
            }
            Message::Dismiss { id, reason } => self.dismiss(store, id, reason, &mut events),
            Message::EscapePressed => {
                let ids: Vec<NotificationId> = store.ids().collect();
                for id in ids {
                    self.dismiss(store, id, DismissReason::EscapeKeyDown, &mut events);
                }
            }
            Message::PointerPressed => {
                if !self.expanded {
                    let ids: Vec<NotificationId> = store.ids().collect();
                    for id in ids {
                        self.dismiss(store, id, DismissReason::Clickaway, &mut events);
                    }
                }
            }
            Message::Tick(_) => {
                self.reconcile(store, now);
                for id in self.timeouts.expired(now) {
                    self.dismiss(store, id, DismissReason::Timeout, &mut events);
                }
            }
            Message::TrailingAction { id, key } => events.push(Event::Action { id, key }),
        }

        self.reconcile(store, now);
        events
    }

    /// Syncs hover state and timers with the store contents.
    ///
    /// Call after adding to the store outside of [`Stack::update`]; the next
    /// tick does it anyway, but timers then start up to one tick late.
    /// Does nothing once the stack is unmounted.
    pub fn reconcile(&mut self, store: &Store, now: Instant) {
        if self.unmounted {
            return;
        }
        if let Some(hover) = self.hovered {
            if !store.contains(hover.id) {
                self.hovered = None;
            }
        }
        self.timeouts.reconcile(store.ids(), self.hovered(), now);
    }

    /// Cancels every pending timer for good. Call when the stack goes away;
    /// later `update` and `reconcile` calls are ignored.
    pub fn unmount(&mut self) {
        self.timeouts.cancel_all();
        self.hovered = None;
        self.expanded = false;
        self.unmounted = true;
        tracing::debug!("snackbar stack unmounted");
    }

    /// Returns the current placement of every snackbar, bottom first.
    #[must_use]
    pub fn layouts(&self, store: &Store) -> Vec<(NotificationId, Layout)> {
        let total = store.len();
        store
            .ids()
            .enumerate()
            .map(|(index, id)| (id, self.layout_at(index, total, id)))
            .collect()
    }

    fn layout_at(&self, index: usize, total: usize, id: NotificationId) -> Layout {
        let (is_hovered, frozen) = match self.hovered {
            Some(hover) if hover.id == id => (true, Some(hover.frozen_offset)),
            _ => (false, None),
        };
        layout::compute_layout(index, total, self.expanded, is_hovered, frozen)
    }

    fn dismiss(
        &mut self,
        store: &mut Store,
        id: NotificationId,
        reason: DismissReason,
        events: &mut Vec<Event>,
    ) {
        if reason == DismissReason::Clickaway {
            tracing::trace!(%id, "clickaway ignored");
            return;
        }

        self.timeouts.cancel(id);
        if self.hovered() == Some(id) {
            self.hovered = None;
        }
        if store.remove(id) {
            events.push(Event::Removed { id, reason });
        }
    }

    /// Renders the stack as an overlay layer.
    pub fn view<'a>(&'a self, store: &'a Store, dark: bool) -> Element<'a, Message> {
        let total = store.len();
        if total == 0 {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let align = self.settings.position.horizontal();

        // Bottom layer reserves the hover region so it does not jump while expanding
        let mut layers = Layers::new()
            .width(Length::Fixed(sizing::SNACKBAR_WIDTH))
            .push(
                Container::new(text(""))
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::STACK_TOP + layout::parent_height(total))),
            );

        for (index, notification) in store.snackbars().iter().enumerate() {
            let id = notification.id();
            let placement = self.layout_at(index, total, id);
            let hovered = self.hovered() == Some(id);

            // A non-`None` interaction makes the outer `Stack` hide the cursor
            // from the cards buried below this one
            let card = mouse_area(toast::view(notification, placement, hovered, dark))
                .interaction(mouse::Interaction::Idle)
                .on_enter(Message::ItemEntered(id))
                .on_exit(Message::ItemExited(id));

            layers = layers.push(
                Container::new(card)
                    .width(Length::Fill)
                    .padding(Padding {
                        top: sizing::STACK_TOP + placement.offset_y,
                        right: 0.0,
                        bottom: 0.0,
                        left: 0.0,
                    })
                    .align_x(align),
            );
        }

        let region = mouse_area(layers)
            .on_enter(Message::StackEntered)
            .on_exit(Message::StackExited);

        Container::new(region)
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(align)
            .into()
    }

    /// Timer ticks while snackbars are visible, plus Escape and pointer presses.
    pub fn subscription(&self, store: &Store) -> Subscription<Message> {
        if store.is_empty() {
            return Subscription::none();
        }

        let tick = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick);
        let input = event::listen_with(|event, _status, _window| match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            iced::Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerPressed),
            _ => None,
        });

        Subscription::batch([tick, input])
    }
}
