// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns its state, exposes a `Message` enum and renders from a shared
//! reference.
//!
//! - [`notifications`] - Bounded alert queue and toast rendering
//! - [`loading`] - Busy flag, message and full-window overlay
//! - [`demo`] - Panel of scripted scenarios driving both
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Colors, alphas, spacing and sizes

pub mod demo;
pub mod design_tokens;
pub mod loading;
pub mod notifications;
pub mod styles;
