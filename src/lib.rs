// SPDX-License-Identifier: MPL-2.0
//! `stockroom` is the alert and busy-state layer of an inventory front end,
//! built with the Iced GUI framework.
//!
//! It provides a bounded queue of transient alerts with expiry and a short
//! removal grace, a single loading overlay, and a demo window exercising both.

pub mod app;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod ui;
