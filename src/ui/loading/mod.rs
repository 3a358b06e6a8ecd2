// SPDX-License-Identifier: MPL-2.0
//! Window-wide loading overlay.
//!
//! - [`controller`] - `Controller` owning the busy flag and message
//! - [`overlay`] - rendering, indicator variants and backdrop
//! - [`indicator`] - canvas drawing of the animated indicator

pub mod controller;
pub mod indicator;
pub mod overlay;

pub use controller::{Controller, LoadingState, Message as LoadingMessage, Settings};
pub use indicator::indicator_levels;
pub use overlay::{Backdrop, LoadingVariant};
