// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{alpha, color, corner, elevation, outline};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the demo panel.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// transparency, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: alpha::PANEL,
            ..base
        })),
        border: Border {
            radius: corner::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Raised card holding the loading indicator.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            color: color::HAIRLINE,
            width: outline::HAIRLINE,
            radius: corner::LG.into(),
        },
        shadow: elevation::CARD,
        ..Default::default()
    }
}
