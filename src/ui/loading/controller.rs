// SPDX-License-Identifier: MPL-2.0
//! Loading overlay state.
//!
//! One busy flag and one message for the whole window. Calls do not nest:
//! the last `show` sets the message and the first `hide` ends the busy
//! state, even if another operation is still running.

use super::overlay::{Backdrop, LoadingVariant};
use crate::clock::{Clock, SystemClock};
use crate::config::{LoadingConfig, DEFAULT_LOADING_MESSAGE};
use crate::diagnostics::DiagnosticsHandle;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Indicator phase advance per tick (one turn per second at 100 ms ticks).
const PHASE_STEP: f32 = TAU / 10.0;

/// Observable overlay state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingState {
    pub active: bool,
    /// Only meaningful while `active`; kept when hidden.
    pub message: String,
}

impl LoadingState {
    fn idle(message: &str) -> Self {
        Self {
            active: false,
            message: message.to_string(),
        }
    }
}

/// Construction-time settings of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_message: String,
    pub variant: LoadingVariant,
    pub backdrop: Backdrop,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_LOADING_MESSAGE.to_string(),
            variant: LoadingVariant::default(),
            backdrop: Backdrop::default(),
        }
    }
}

impl From<&LoadingConfig> for Settings {
    fn from(config: &LoadingConfig) -> Self {
        let defaults = Settings::default();
        Settings {
            default_message: config
                .default_message
                .clone()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or(defaults.default_message),
            variant: config.variant.unwrap_or(defaults.variant),
            backdrop: config.backdrop.unwrap_or(defaults.backdrop),
        }
    }
}

/// Messages for the loading overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Show(Option<String>),
    Hide,
    SetMessage(String),
    /// Animate the indicator.
    Tick,
}

/// Owns the overlay state.
#[derive(Debug)]
pub struct Controller<C: Clock = SystemClock> {
    state: LoadingState,
    settings: Settings,
    /// When the current busy period started.
    busy_since: Option<Instant>,
    /// Indicator animation phase in radians.
    phase: f32,
    clock: C,
    diagnostics: Option<DiagnosticsHandle>,
    publisher: watch::Sender<LoadingState>,
}

impl Controller<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl Default for Controller<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Controller<C> {
    pub fn with_clock(settings: Settings, clock: C) -> Self {
        let state = LoadingState::idle(&settings.default_message);
        let (publisher, _) = watch::channel(state.clone());
        Self {
            state,
            settings,
            busy_since: None,
            phase: 0.0,
            clock,
            diagnostics: None,
            publisher,
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows the overlay with the default message.
    pub fn show(&mut self) {
        let message = self.settings.default_message.clone();
        self.show_with(message);
    }

    /// Shows the overlay with `message`. While already active this only
    /// replaces the message.
    pub fn show_with(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.state.active {
            self.busy_since = Some(self.clock.now());
            self.phase = 0.0;
        }
        tracing::debug!(message = %message, "loading shown");
        if let Some(handle) = &self.diagnostics {
            handle.log_loading_shown(&message);
        }
        self.replace(LoadingState {
            active: true,
            message,
        });
    }

    /// Hides the overlay, keeping the message.
    ///
    /// Returns how long the overlay was busy, or `None` if it was not shown.
    pub fn hide(&mut self) -> Option<Duration> {
        if !self.state.active {
            return None;
        }
        let busy_for = self
            .busy_since
            .take()
            .map(|since| self.clock.now().saturating_duration_since(since))
            .unwrap_or_default();

        tracing::debug!(busy_ms = busy_for.as_millis(), "loading hidden");
        if let Some(handle) = &self.diagnostics {
            handle.log_loading_hidden(busy_for);
        }
        self.replace(LoadingState {
            active: false,
            message: self.state.message.clone(),
        });
        Some(busy_for)
    }

    /// Replaces the message without touching the busy flag.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.replace(LoadingState {
            active: self.state.active,
            message: message.into(),
        });
    }

    /// Advances the indicator animation. Returns whether anything moved.
    pub fn tick(&mut self) -> bool {
        if !self.state.active {
            return false;
        }
        self.phase += PHASE_STEP;
        if self.phase > TAU {
            self.phase -= TAU;
        }
        true
    }

    /// Handles an overlay message. Returns whether the overlay changed.
    pub fn handle_message(&mut self, message: Message) -> bool {
        match message {
            Message::Show(Some(text)) => {
                self.show_with(text);
                true
            }
            Message::Show(None) => {
                self.show();
                true
            }
            Message::Hide => self.hide().is_some(),
            Message::SetMessage(text) => {
                let changed = self.state.message != text;
                self.set_message(text);
                changed
            }
            Message::Tick => self.tick(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &LoadingState {
        &self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.state.message
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Time spent busy so far.
    #[must_use]
    pub fn busy_for(&self) -> Option<Duration> {
        self.busy_since
            .map(|since| self.clock.now().saturating_duration_since(since))
    }

    /// Receiver that observes every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoadingState> {
        self.publisher.subscribe()
    }

    fn replace(&mut self, state: LoadingState) {
        if self.state != state {
            self.state = state;
            self.publisher.send_replace(self.state.clone());
        }
    }
}
