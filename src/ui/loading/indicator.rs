// SPDX-License-Identifier: MPL-2.0
//! Busy indicator drawn on a canvas from the controller's phase.
//!
//! [`indicator_levels`] turns the phase into one level per animated element,
//! [`marks`] lays those levels out as shapes inside a square, and the canvas
//! program only strokes and fills what it is handed.

use super::overlay::LoadingVariant;
use crate::ui::design_tokens::{alpha, color, dimension};
use iced::widget::canvas::{self, path, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Radians, Rectangle, Renderer, Size, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Maps x to [0, 1] along a cosine wave starting at 0.
fn wave(x: f32) -> f32 {
    0.5 - 0.5 * x.cos()
}

/// Animation levels in `[0, 1]` for each element of an indicator.
///
/// Dots and bars are staggered so they ripple across; the ripple rings
/// expand one after the other.
#[must_use]
pub fn indicator_levels(variant: LoadingVariant, phase: f32) -> Vec<f32> {
    let turn = phase.rem_euclid(TAU) / TAU;
    match variant {
        LoadingVariant::Spinner => vec![turn],
        LoadingVariant::Pulse => vec![wave(phase)],
        LoadingVariant::Dots => (0..3u8)
            .map(|i| wave(phase - f32::from(i) * TAU / 7.0))
            .collect(),
        LoadingVariant::Bars => (0..4u8)
            .map(|i| wave(phase - f32::from(i) * TAU / 12.0))
            .collect(),
        LoadingVariant::Ripple => (0..2u8)
            .map(|i| (turn + f32::from(i) / 3.0).fract())
            .collect(),
    }
}

/// One shape of an indicator, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    Disc {
        center: Point,
        radius: f32,
        alpha: f32,
    },
    Ring {
        center: Point,
        radius: f32,
        alpha: f32,
    },
    Bar {
        top_left: Point,
        size: Size,
    },
    /// Clockwise stroke from `start` (radians, 0 at 3 o'clock) for `sweep`.
    Arc {
        center: Point,
        radius: f32,
        start: f32,
        sweep: f32,
    },
}

/// Lays `levels` out inside an `edge` by `edge` square.
#[must_use]
pub fn marks(variant: LoadingVariant, levels: &[f32], edge: f32) -> Vec<Mark> {
    let center = Point::new(edge / 2.0, edge / 2.0);
    let outer = (edge / 2.0 - dimension::INDICATOR_STROKE).max(0.0);

    match variant {
        LoadingVariant::Spinner => {
            let turn = levels.first().copied().unwrap_or_default();
            vec![
                Mark::Ring {
                    center,
                    radius: outer,
                    alpha: alpha::TRACK,
                },
                // Half a turn of arc, leading edge at 12 o'clock when idle.
                Mark::Arc {
                    center,
                    radius: outer,
                    start: turn * TAU - FRAC_PI_2,
                    sweep: PI,
                },
            ]
        }
        LoadingVariant::Pulse => levels
            .iter()
            .map(|level| Mark::Disc {
                center,
                radius: outer * (0.6 + 0.4 * level),
                alpha: 0.5 + 0.5 * level,
            })
            .collect(),
        LoadingVariant::Dots => {
            let slot = edge / slots(levels);
            levels
                .iter()
                .zip(0u8..)
                .map(|(level, i)| Mark::Disc {
                    center: Point::new(slot * (f32::from(i) + 0.5), center.y),
                    radius: slot / 3.0 * (0.5 + 0.5 * level),
                    alpha: 0.5 + 0.5 * level,
                })
                .collect()
        }
        LoadingVariant::Bars => {
            let slot = edge / slots(levels);
            levels
                .iter()
                .zip(0u8..)
                .map(|(level, i)| {
                    let height = edge - edge * 0.7 * (1.0 - level);
                    let left = slot * (f32::from(i) + 0.25);
                    Mark::Bar {
                        top_left: Point::new(left, (edge - height) / 2.0),
                        size: Size::new(slot / 2.0, height),
                    }
                })
                .collect()
        }
        LoadingVariant::Ripple => levels
            .iter()
            .map(|level| Mark::Ring {
                center,
                radius: outer * level,
                alpha: 1.0 - level,
            })
            .collect(),
    }
}

/// Element count as a float; indicators draw a handful of elements.
#[allow(clippy::cast_precision_loss)]
fn slots(levels: &[f32]) -> f32 {
    levels.len().max(1) as f32
}

/// Canvas program drawing one frame of an indicator.
#[derive(Debug, Clone)]
pub struct Indicator {
    variant: LoadingVariant,
    levels: Vec<f32>,
    color: Color,
}

impl Indicator {
    #[must_use]
    pub fn new(variant: LoadingVariant, phase: f32) -> Self {
        Self {
            variant,
            levels: indicator_levels(variant, phase),
            color: color::BRAND,
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(dimension::INDICATOR))
            .height(Length::Fixed(dimension::INDICATOR))
            .into()
    }

    fn tinted(&self, alpha: f32) -> Color {
        Color {
            a: alpha.clamp(0.0, 1.0),
            ..self.color
        }
    }
}

impl<Message> canvas::Program<Message> for Indicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let edge = bounds.width.min(bounds.height);
        let stroke = |color: Color| {
            Stroke::default()
                .with_width(dimension::INDICATOR_STROKE)
                .with_color(color)
                .with_line_cap(canvas::LineCap::Round)
        };

        for mark in marks(self.variant, &self.levels, edge) {
            match mark {
                Mark::Disc {
                    center,
                    radius,
                    alpha,
                } => frame.fill(&Path::circle(center, radius), self.tinted(alpha)),
                Mark::Ring {
                    center,
                    radius,
                    alpha,
                } => frame.stroke(&Path::circle(center, radius), stroke(self.tinted(alpha))),
                Mark::Bar { top_left, size } => {
                    frame.fill(&Path::rectangle(top_left, size), self.color);
                }
                Mark::Arc {
                    center,
                    radius,
                    start,
                    sweep,
                } => {
                    let arc = Path::new(|builder| {
                        builder.arc(path::Arc {
                            center,
                            radius,
                            start_angle: Radians(start),
                            end_angle: Radians(start + sweep),
                        });
                    });
                    frame.stroke(&arc, stroke(self.color));
                }
            }
        }

        vec![frame.into_geometry()]
    }
}
