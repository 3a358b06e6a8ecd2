// SPDX-License-Identifier: MPL-2.0
//! Core alert data structures.
//!
//! This module defines the `Alert` entry, its `AlertKind`, the monotonic
//! `AlertId` and the per-call `AlertOptions` used by the queue manager.

use crate::ui::design_tokens::color;
use iced::Color;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for an alert.
///
/// Ids come from a process-wide monotonic counter, so an id is never reused
/// while the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AlertId(u64);

impl AlertId {
    /// Creates a new unique alert ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert-{}", self.0)
    }
}

/// Alert category; drives color, glyph and the default toast title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Success,
        AlertKind::Error,
        AlertKind::Warning,
        AlertKind::Info,
    ];

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            AlertKind::Success => color::SUCCESS,
            AlertKind::Error => color::ERROR,
            AlertKind::Warning => color::WARNING,
            AlertKind::Info => color::INFO,
        }
    }

    /// Title used by the toast helpers when the caller supplies only a message.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            AlertKind::Success => "Success",
            AlertKind::Error => "Error",
            AlertKind::Warning => "Warning",
            AlertKind::Info => "Info",
        }
    }

    /// Single-character glyph shown at the left of a toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            AlertKind::Success => "✓",
            AlertKind::Error => "✕",
            AlertKind::Warning => "!",
            AlertKind::Info => "i",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        };
        f.write_str(label)
    }
}

/// Per-call overrides for [`Manager::enqueue`](super::Manager::enqueue).
///
/// Unset fields take the manager's defaults (5 s time-to-live, dismissible).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertOptions {
    pub duration: Option<Duration>,
    pub dismissible: Option<bool>,
}

impl AlertOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time-to-live. `Duration::ZERO` makes the alert sticky.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(Duration::from_millis(ms))
    }

    /// Never auto-expire.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }
}

/// An alert entry owned by the queue manager.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    id: AlertId,
    kind: AlertKind,
    title: String,
    message: String,
    /// False once the exit transition has started.
    visible: bool,
    /// Time-to-live; zero means sticky.
    duration: Duration,
    dismissible: bool,
    created_at: Instant,
}

impl Alert {
    pub(super) fn new(
        kind: AlertKind,
        title: String,
        message: String,
        duration: Duration,
        dismissible: bool,
        created_at: Instant,
    ) -> Self {
        Self {
            id: AlertId::new(),
            kind,
            title,
            message,
            visible: true,
            duration,
            dismissible,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> AlertKind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the alert should render. Turns false when dismissal starts.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }

    /// Sticky alerts are only removed by an explicit dismiss.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.duration.is_zero()
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Starts the exit transition. Returns `false` if it had already started.
    pub(super) fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}
