// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the snackbar stack.
//!
//! One page with buttons that push an error snackbar with an action, a
//! success snackbar, and an info snackbar with a message, plus a dark mode
//! toggle. The stack is layered above the page.

mod message;

pub use message::{Demo, Flags, Message};

use crate::config::{self, Config};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::notifications::{self, Event, LeadingIcon, SnackbarOptions, Stack, Store};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Column, Container, Stack as Layers, Text};
use iced::{alignment, window, Background, Border, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;

/// Key reported by the demo error's trailing action.
const DEMO_ACTION_KEY: &str = "demo-action";

/// Root state: the snackbar store, the stack presenting it, and the theme.
pub struct App {
    store: Store,
    stack: Stack,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("snackbars", &self.store.len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(&Config::default(), Flags::default())
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        let (config, warning) = config::load_with_override(config_dir);
        let mut app = Self::from_config(&config, flags);

        if let Some(warning) = warning {
            app.store.add(
                SnackbarOptions::error("Settings not loaded")
                    .message(format!("{warning}. Using defaults.")),
            );
            app.stack.reconcile(&app.store, Instant::now());
        }

        (app, Task::none())
    }

    /// Builds the app from `config`, with command-line `flags` taking precedence.
    fn from_config(config: &Config, flags: Flags) -> Self {
        let mut snackbar = config.snackbar.clone();
        if let Some(position) = flags.position {
            snackbar.position = position;
        }
        if let Some(ms) = flags.auto_hide_ms {
            snackbar.auto_hide_ms = ms;
        }

        tracing::debug!(
            position = %snackbar.position,
            auto_hide = ?snackbar.auto_hide(),
            "snackbar stack configured"
        );

        Self {
            store: Store::new().with_max_visible(snackbar.max_visible),
            stack: Stack::new(snackbar.stack_settings()),
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
        }
    }

    fn title(&self) -> String {
        String::from("Snackbar Demo")
    }

    fn is_dark(&self) -> bool {
        self.theme_mode.is_dark()
    }

    fn theme(&self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        self.stack.subscription(&self.store).map(Message::Snackbar)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(demo) => {
                self.store.add(demo_options(demo));
                self.stack.reconcile(&self.store, Instant::now());
            }
            Message::ToggleDarkMode => {
                self.theme_mode = self.theme_mode.toggled();
            }
            Message::Snackbar(message) => {
                let now = match &message {
                    notifications::Message::Tick(instant) => *instant,
                    _ => Instant::now(),
                };
                for event in self.stack.update(&mut self.store, message, now) {
                    self.handle_stack_event(event);
                }
            }
        }
        Task::none()
    }

    fn handle_stack_event(&mut self, event: Event) {
        match event {
            Event::Action { id, key } if key == DEMO_ACTION_KEY => {
                tracing::info!(%id, "demo action pressed");
                self.stack.update(
                    &mut self.store,
                    notifications::Message::Close(id),
                    Instant::now(),
                );
            }
            Event::Action { id, key } => {
                tracing::debug!(%id, key = %key, "unhandled snackbar action");
            }
            Event::Removed { id, reason } => {
                tracing::debug!(%id, ?reason, "snackbar dismissed");
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let dark = self.is_dark();

        let toggle_label = format!("Toggle Dark Mode: {}", if dark { "On" } else { "Off" });
        let page = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("Demo").size(typography::TITLE_LG))
            .push(demo_button(
                "Show Error Snackbar with Action",
                Message::Show(Demo::ErrorWithAction),
                dark,
            ))
            .push(demo_button(
                "Show Success Snackbar",
                Message::Show(Demo::Success),
                dark,
            ))
            .push(demo_button(
                "Show Info Snackbar with Message",
                Message::Show(Demo::InfoWithMessage),
                dark,
            ))
            .push(demo_button(toggle_label, Message::ToggleDarkMode, dark));

        let page = Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Layers::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(self.stack.view(&self.store, dark).map(Message::Snackbar))
            .into()
    }

    /// Number of snackbars currently shown.
    #[must_use]
    pub fn snackbar_count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn auto_hide(&self) -> Duration {
        self.stack.settings().auto_hide
    }
}

/// Options for each demo preset.
#[must_use]
pub fn demo_options(demo: Demo) -> SnackbarOptions {
    match demo {
        Demo::ErrorWithAction => SnackbarOptions::error("This is an error!")
            .leading_icon(LeadingIcon::Glyph("⚠".into()))
            .trailing_action("Action", DEMO_ACTION_KEY),
        Demo::Success => SnackbarOptions::success("This is successful!"),
        Demo::InfoWithMessage => {
            SnackbarOptions::info("This is some info!").message("Here is the additional message.")
        }
    }
}

fn demo_button<'a>(label: impl Into<String>, message: Message, dark: bool) -> Element<'a, Message> {
    let (background, hover, foreground) = if dark {
        (palette::GRAY_900, palette::GRAY_800, palette::GRAY_100)
    } else {
        (palette::GRAY_100, palette::GRAY_200, palette::GRAY_900)
    };

    button(text(label.into()).size(typography::BODY_LG))
        .on_press(message)
        .width(Length::Fixed(sizing::DEMO_BUTTON_WIDTH))
        .padding([spacing::XS, spacing::LG])
        .style(move |_theme: &Theme, status| {
            let fill = match status {
                button::Status::Hovered | button::Status::Pressed => hover,
                button::Status::Active | button::Status::Disabled => background,
            };
            button::Style {
                background: Some(Background::Color(fill)),
                text_color: foreground,
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Kind, Position};

    #[test]
    fn flags_override_config() {
        let flags = Flags {
            position: Some(Position::TopCenter),
            auto_hide_ms: Some(3000),
            theme: Some(ThemeMode::Dark),
            config_dir: None,
        };
        let app = App::from_config(&Config::default(), flags);

        assert_eq!(app.stack.settings().position, Position::TopCenter);
        assert_eq!(app.auto_hide(), Duration::from_millis(3000));
        assert!(app.is_dark());
    }

    #[test]
    fn show_messages_push_matching_kinds() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Demo::ErrorWithAction));
        let _ = app.update(Message::Show(Demo::Success));
        let _ = app.update(Message::Show(Demo::InfoWithMessage));

        let kinds: Vec<Kind> = app.store.snackbars().iter().map(|n| n.kind()).collect();
        assert_eq!(kinds, vec![Kind::Error, Kind::Success, Kind::Info]);
        assert_eq!(app.stack.timeouts().len(), 3);
    }

    #[test]
    fn demo_action_closes_its_snackbar() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Demo::ErrorWithAction));
        let id = app.store.snackbars()[0].id();

        let _ = app.update(Message::Snackbar(notifications::Message::TrailingAction {
            id,
            key: DEMO_ACTION_KEY.into(),
        }));

        assert_eq!(app.snackbar_count(), 0);
    }

    #[test]
    fn toggle_dark_mode_flips_theme() {
        let mut app = App::from_config(
            &Config::default(),
            Flags {
                theme: Some(ThemeMode::Light),
                ..Flags::default()
            },
        );
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::ToggleDarkMode);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn demo_presets_match_page_buttons() {
        let error = demo_options(Demo::ErrorWithAction);
        assert_eq!(error.kind(), Kind::Error);
        assert_eq!(error.label(), "This is an error!");
        assert_eq!(demo_options(Demo::InfoWithMessage).kind(), Kind::Info);
    }
}
