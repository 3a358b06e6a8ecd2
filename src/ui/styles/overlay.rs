// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the loading backdrop.

use iced::widget::container;
use iced::{Background, Color, Theme};

/// Tint over the whole window, taken from the theme background.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            ..Default::default()
        }
    }
}
