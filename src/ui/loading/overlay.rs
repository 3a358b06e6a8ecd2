// SPDX-License-Identifier: MPL-2.0
//! Full-window busy overlay.
//!
//! Renders the controller's message under an animated indicator on a card,
//! over a backdrop that swallows all input to the widgets beneath it.

use super::controller::Controller;
use super::indicator::Indicator;
use crate::clock::Clock;
use crate::ui::design_tokens::{alpha, font_size, space};
use crate::ui::styles;
use iced::widget::{opaque, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};
use serde::{Deserialize, Serialize};

/// Busy indicator style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadingVariant {
    #[default]
    Spinner,
    Dots,
    Pulse,
    Bars,
    Ripple,
}

impl LoadingVariant {
    pub const ALL: [LoadingVariant; 5] = [
        LoadingVariant::Spinner,
        LoadingVariant::Dots,
        LoadingVariant::Pulse,
        LoadingVariant::Bars,
        LoadingVariant::Ripple,
    ];
}

/// How the overlay covers the window.
///
/// Iced has no backdrop blur, so `Blur` is a half-transparent tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backdrop {
    #[default]
    Blur,
    Overlay,
    None,
}

impl Backdrop {
    /// Alpha of the tint drawn over the window.
    #[must_use]
    pub fn alpha(self) -> f32 {
        match self {
            Backdrop::Blur => alpha::BACKDROP_TINT,
            Backdrop::Overlay => alpha::BACKDROP_SOLID,
            Backdrop::None => 0.0,
        }
    }
}

/// Renders the overlay, or `None` while the controller is idle.
pub fn view<'a, Message: 'static, C: Clock>(
    controller: &'a Controller<C>,
) -> Option<Element<'a, Message>> {
    if !controller.is_active() {
        return None;
    }
    let settings = controller.settings();

    let message = Text::new(controller.message())
        .size(font_size::BODY)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.palette().text),
        });

    let card = Container::new(
        Column::new()
            .spacing(space::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Indicator::new(settings.variant, controller.phase()).into_element())
            .push(message),
    )
    .padding(space::XL)
    .style(styles::container::card);

    let backdrop_alpha = settings.backdrop.alpha();
    let overlay = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::backdrop(backdrop_alpha));

    Some(opaque(overlay))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_alpha_orders_by_opacity() {
        assert_eq!(Backdrop::None.alpha(), 0.0);
        assert!(Backdrop::Blur.alpha() < Backdrop::Overlay.alpha());
    }

    #[test]
    fn variant_names_parse_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            variant: LoadingVariant,
            backdrop: Backdrop,
        }
        let parsed: Wrapper =
            toml::from_str("variant = \"ripple\"\nbackdrop = \"none\"").expect("parse");
        assert_eq!(parsed.variant, LoadingVariant::Ripple);
        assert_eq!(parsed.backdrop, Backdrop::None);
    }

    #[test]
    fn idle_controller_renders_nothing() {
        let controller = Controller::new();
        assert!(view::<(), _>(&controller).is_none());
    }
}
