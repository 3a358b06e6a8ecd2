// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log for the alert queue and loading overlay.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: ring buffer with drop-oldest eviction
//! - [`DiagnosticEvent`]: timestamped record of what happened
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: owner and cheap sender
//!
//! Nothing here is persisted; the log lives and dies with the app.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
