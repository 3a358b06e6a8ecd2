// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{alpha, color, corner, elevation, outline};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button in an arbitrary accent, e.g. an alert kind's color.
///
/// Hover lightens the fill, press darkens it.
pub fn accent(tint: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let (fill, shadow) = match status {
            button::Status::Active => (tint, elevation::BUTTON),
            button::Status::Hovered => (mix(tint, color::WHITE, 0.15), elevation::TOAST),
            button::Status::Pressed => (mix(tint, color::BLACK, 0.15), elevation::BUTTON),
            button::Status::Disabled => return secondary(theme, status),
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: color::WHITE,
            border: Border {
                color: mix(tint, color::BLACK, 0.2),
                width: outline::HAIRLINE,
                radius: corner::SM.into(),
            },
            shadow,
            snap: true,
        }
    }
}

/// Secondary action button.
/// Adapts to light/dark theme while maintaining consistency.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color, border_color) = if is_light {
        (color::CHIP, color::INK, color::OUTLINE)
    } else {
        (color::INK_SOFT, color::WHITE, color::OUTLINE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: border_color,
                width: outline::HAIRLINE,
                radius: corner::SM.into(),
            },
            shadow: elevation::FLAT,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                color::HAIRLINE
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: color::BRAND,
                    width: outline::HAIRLINE,
                    radius: corner::SM.into(),
                },
                shadow: elevation::BUTTON,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color: Color {
                a: alpha::PRESS_TINT,
                ..text_color
            },
            border: Border {
                color: color::OUTLINE,
                width: outline::HAIRLINE,
                radius: corner::SM.into(),
            },
            shadow: elevation::FLAT,
            snap: true,
        },
    }
}

/// Linear blend of `base` toward `target`.
fn mix(base: Color, target: Color, amount: f32) -> Color {
    Color {
        r: base.r + (target.r - base.r) * amount,
        g: base.g + (target.g - base.g) * amount,
        b: base.b + (target.b - base.b) * amount,
        a: base.a,
    }
}
