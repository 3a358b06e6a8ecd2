// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by the toasts, the loading overlay and the demo
//! panel.
//!
//! - [`color`]: alert kind colors, brand accent and neutrals
//! - [`alpha`]: transparency of exiting toasts, tints and backdrops
//! - [`space`]: 4px-based padding and gaps
//! - [`dimension`]: fixed widths and indicator sizes
//! - [`font_size`]: text scale
//! - [`corner`] / [`outline`]: border radii and widths
//! - [`elevation`]: shadows from flat to floating card
//!
//! ```
//! use stockroom::ui::design_tokens::{alpha, color};
//! use iced::Color;
//!
//! let exiting_error = Color {
//!     a: alpha::EXITING,
//!     ..color::ERROR
//! };
//! assert!(exiting_error.a < color::ERROR.a);
//! ```

use iced::Color;

pub mod color {
    use super::Color;

    // One color per alert kind; toasts, badges and demo buttons reuse them.
    pub const SUCCESS: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const ERROR: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO: Color = Color::from_rgb(0.392, 0.588, 1.0);

    /// Loading indicator and neutral demo buttons.
    pub const BRAND: Color = Color::from_rgb(0.3, 0.6, 0.9);

    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::BLACK;
    pub const INK: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const INK_SOFT: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const OUTLINE: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const HAIRLINE: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const CHIP: Color = Color::from_rgb(0.85, 0.85, 0.85);
}

pub mod alpha {
    /// Toast colors while the alert sits in its removal grace period.
    pub const EXITING: f32 = 0.5;
    pub const HOVER_TINT: f32 = 0.2;
    pub const PRESS_TINT: f32 = 0.5;
    /// Demo panel surface over the window background.
    pub const PANEL: f32 = 0.95;
    /// Unlit part of the loading indicator.
    pub const TRACK: f32 = 0.25;
    /// Backdrop behind the loading card.
    pub const BACKDROP_TINT: f32 = 0.5;
    pub const BACKDROP_SOLID: f32 = 0.9;
}

pub mod space {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod dimension {
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const DEMO_PANEL_WIDTH: f32 = 560.0;
    /// Glyph badge on a toast.
    pub const BADGE: f32 = 24.0;
    /// Canvas edge of the loading indicator.
    pub const INDICATOR: f32 = 48.0;
    pub const INDICATOR_STROKE: f32 = 3.0;
}

pub mod font_size {
    pub const HEADING: f32 = 20.0;
    pub const EMPHASIS: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const SUBTLE: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod corner {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const PILL: f32 = 9999.0;
}

pub mod outline {
    pub const HAIRLINE: f32 = 1.0;
    /// Kind-colored toast border.
    pub const ACCENT: f32 = 2.0;
}

pub mod elevation {
    use super::color;
    use iced::{Shadow, Vector};

    const fn drop(offset: f32, blur_radius: f32) -> Shadow {
        Shadow {
            color: color::BLACK,
            offset: Vector { x: 0.0, y: offset },
            blur_radius,
        }
    }

    pub const FLAT: Shadow = drop(0.0, 0.0);
    pub const BUTTON: Shadow = drop(2.0, 4.0);
    pub const TOAST: Shadow = drop(4.0, 8.0);
    /// Loading card, above everything else.
    pub const CARD: Shadow = drop(8.0, 16.0);
}

const _: () = {
    assert!(space::MD == space::XS * 2.0);
    assert!(dimension::DEMO_PANEL_WIDTH > dimension::TOAST_WIDTH);
    assert!(dimension::INDICATOR > dimension::BADGE);
    assert!(font_size::HEADING > font_size::EMPHASIS);
    assert!(font_size::BODY > font_size::SUBTLE && font_size::SUBTLE > font_size::CAPTION);
    assert!(outline::ACCENT > outline::HAIRLINE);
    assert!(alpha::BACKDROP_TINT < alpha::BACKDROP_SOLID && alpha::BACKDROP_SOLID < 1.0);
    assert!(alpha::EXITING > 0.0 && alpha::EXITING < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tints_stay_lighter_than_the_exit_fade() {
        assert!(alpha::HOVER_TINT < alpha::PRESS_TINT);
        assert!(alpha::TRACK < alpha::EXITING);
        assert!(alpha::PANEL > alpha::BACKDROP_SOLID);
    }

    #[test]
    fn elevation_grows_toward_the_card() {
        assert!(elevation::FLAT.blur_radius < elevation::BUTTON.blur_radius);
        assert!(elevation::TOAST.blur_radius < elevation::CARD.blur_radius);
    }
}
