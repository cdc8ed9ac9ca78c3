// SPDX-License-Identifier: MPL-2.0
//! Widget for rendering a single snackbar.
//!
//! Layout: `[leading icon] [label / message] [trailing action] [close]`, in a
//! card colored after the notification kind. The card width follows the
//! stack scale so buried snackbars look smaller.

use super::layout::Layout;
use super::notification::{LeadingIcon, Notification};
use super::stack::Message;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::{self, SnackbarColors};
use iced::widget::image::Image;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Renders `notification` at `placement`.
///
/// `hovered` switches to the hover background and reveals the close control.
pub fn view<'a>(
    notification: &'a Notification,
    placement: Layout,
    hovered: bool,
    dark: bool,
) -> Element<'a, Message> {
    let colors = theming::snackbar_colors(dark, notification.kind());
    let scale = placement.scale;
    let id = notification.id();

    let mut content = Row::new()
        .spacing(spacing::MD * scale)
        .align_y(alignment::Vertical::Center);

    if let Some(icon) = notification.leading_icon() {
        content = content.push(leading_icon(icon, colors.text, scale));
    }

    let mut texts = Column::new().spacing(spacing::XXS).push(
        Text::new(notification.label())
            .size(typography::BODY * scale)
            .color(colors.text),
    );
    if let Some(message) = notification.message() {
        texts = texts.push(
            Text::new(message)
                .size(typography::CAPTION * scale)
                .color(colors.text),
        );
    }
    content = content.push(Container::new(texts).width(Length::Fill));

    if let Some(action) = notification.trailing_action() {
        let action_background = theming::action_background(dark);
        let text_color = colors.text;
        content = content.push(
            button(Text::new(action.label.as_str()).size(typography::BODY * scale))
                .on_press(Message::TrailingAction {
                    id,
                    key: action.key.clone(),
                })
                .padding(spacing::XS * scale)
                .style(move |_theme: &Theme, status| {
                    action_button_style(status, action_background, text_color)
                }),
        );
    }

    let close: Element<'a, Message> = if hovered {
        button(Text::new("✕").size(typography::CAPTION))
            .on_press(Message::Close(id))
            .padding(spacing::XXS)
            .style(move |_theme: &Theme, status| close_button_style(status, colors))
            .into()
    } else {
        Container::new(text(""))
            .width(Length::Fixed(sizing::ICON_SM + 2.0 * spacing::XXS))
            .into()
    };
    content = content.push(close);
    content = content.push(min_height_strut(scale));

    Container::new(content)
        .width(Length::Fixed(sizing::SNACKBAR_WIDTH * scale))
        .height(Length::Shrink)
        .padding([spacing::SM * scale, spacing::MD * scale])
        .style(move |_theme: &Theme| snackbar_style(colors, hovered))
        .into()
}

/// Zero-width filler that keeps the card at least `SNACKBAR_MIN_HEIGHT` tall.
fn min_height_strut<'a>(scale: f32) -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Fixed(0.0))
        .height(Length::Fixed(content_min_height(scale)))
        .into()
}

/// Minimum height of the card content, inside the vertical padding.
fn content_min_height(scale: f32) -> f32 {
    (sizing::SNACKBAR_MIN_HEIGHT - 2.0 * spacing::SM) * scale
}

fn leading_icon<'a>(icon: &'a LeadingIcon, color: Color, scale: f32) -> Element<'a, Message> {
    let size = sizing::ICON_MD * scale;
    match icon {
        LeadingIcon::Glyph(glyph) => Text::new(glyph.as_str()).size(size).color(color).into(),
        LeadingIcon::Image(handle) => Image::new(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
    }
}

/// Card style: kind background (hover color while hovered) with a hover-colored border.
fn snackbar_style(colors: SnackbarColors, hovered: bool) -> container::Style {
    let background = if hovered {
        colors.hover
    } else {
        colors.background
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: colors.hover,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SNACKBAR,
        text_color: Some(colors.text),
        ..Default::default()
    }
}

fn close_button_style(status: button::Status, colors: SnackbarColors) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => colors.hover,
        button::Status::Active | button::Status::Disabled => colors.background,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text,
        border: Border {
            color: colors.hover,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn action_button_style(status: button::Status, background: Color, text_color: Color) -> button::Style {
    let background = match status {
        button::Status::Pressed => Color {
            a: 0.8,
            ..background
        },
        _ => background,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
