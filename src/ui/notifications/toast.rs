// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual alerts.
//!
//! Toasts are small cards with a kind-colored accent, a glyph badge, the
//! alert title and message, and a close button for dismissible alerts.
//! Clicking anywhere on a dismissible card closes it as well. Alerts in
//! their exit transition render faded and ignore clicks until removed.

use super::alert::Alert;
use super::manager::{Manager, Message};
use crate::clock::Clock;
use crate::ui::design_tokens::{
    alpha, color, corner, dimension, elevation, font_size, outline, space,
};
use iced::font::Weight;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(alert: &Alert) -> Element<'_, Message> {
        let visible = alert.is_visible();
        let accent_color = fade(alert.kind().color(), visible);

        let badge = Container::new(
            Text::new(alert.kind().glyph())
                .size(font_size::EMPHASIS)
                .style(|_theme: &Theme| text::Style {
                    color: Some(color::WHITE),
                }),
        )
        .width(Length::Fixed(dimension::BADGE))
        .height(Length::Fixed(dimension::BADGE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| badge_style(accent_color));

        let title = Text::new(alert.title())
            .size(font_size::EMPHASIS)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            })
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, visible)),
            });

        let message = Text::new(alert.message())
            .size(font_size::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, visible)),
            });

        let body = Column::new().spacing(space::XXS).push(title).push(message);

        // Layout: [badge] [title / message] [close]
        let mut content = Row::new()
            .spacing(space::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(badge).padding(space::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        let on_click = click_message(alert);
        if alert.is_dismissible() {
            let close = button(Text::new("×").size(font_size::EMPHASIS))
                .padding(space::XXS)
                .style(dismiss_button_style)
                .on_press_maybe(on_click.clone());
            content = content.push(close);
        }

        let card = Container::new(content)
            .width(Length::Fixed(dimension::TOAST_WIDTH))
            .padding(space::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, visible));

        match on_click {
            Some(dismiss) => mouse_area(card).on_press(dismiss).into(),
            None => card.into(),
        }
    }

    /// Renders the stack of active alerts at the manager's anchor.
    pub fn view_overlay<C: Clock>(manager: &Manager<C>) -> Element<'_, Message> {
        let position = manager.position();
        let toasts: Vec<Element<'_, Message>> = if position.newest_first() {
            manager.alerts().rev().map(Self::view).collect()
        } else {
            manager.alerts().map(Self::view).collect()
        };

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(space::XS)
                .align_x(position.horizontal());

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(position.horizontal())
                .align_y(position.vertical())
                .padding(space::MD)
                .into()
        }
    }
}

/// Message sent when the toast is clicked, if clicking should close it.
///
/// A toast on its way out no longer reacts to clicks.
fn click_message(alert: &Alert) -> Option<Message> {
    (alert.is_dismissible() && alert.is_visible()).then(|| Message::Dismiss(alert.id()))
}

/// Dims a color for alerts in their exit transition.
fn fade(color: Color, visible: bool) -> Color {
    if visible {
        color
    } else {
        Color {
            a: color.a * alpha::EXITING,
            ..color
        }
    }
}

fn badge_style(accent_color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(accent_color)),
        border: iced::Border {
            radius: corner::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, visible: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, visible))),
        border: iced::Border {
            color: accent_color,
            width: outline::ACCENT,
            radius: corner::MD.into(),
        },
        shadow: if visible { elevation::TOAST } else { elevation::FLAT },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: elevation::FLAT,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: alpha::HOVER_TINT,
                ..color::OUTLINE
            })),
            text_color: base.text,
            border: iced::Border {
                radius: corner::SM.into(),
                ..Default::default()
            },
            shadow: elevation::FLAT,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: alpha::PRESS_TINT,
                ..color::OUTLINE
            })),
            text_color: base.text,
            border: iced::Border {
                radius: corner::SM.into(),
                ..Default::default()
            },
            shadow: elevation::FLAT,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: alpha::EXITING,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: elevation::FLAT,
            snap: true,
        },
    }
}
