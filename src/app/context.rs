// SPDX-License-Identifier: MPL-2.0
//! Explicit owner of the alert queue, the loading overlay and the activity log.
//!
//! The context is built once from the loaded [`Config`] and owned by the
//! application. Nothing outside it can reach the managers, so they cannot be
//! used before startup or after [`Context::teardown`].

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::ui::demo::Step;
use crate::ui::loading::{self, Controller};
use crate::ui::notifications::{self, Manager};
use std::fmt;
use std::time::Duration;

/// What teardown found still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TeardownSummary {
    /// Alerts still queued, visible or not.
    pub alerts_cleared: usize,
    /// Busy time of an overlay that was still shown.
    pub busy_for: Option<Duration>,
    /// Events held by the activity log after the final flush.
    pub events_logged: usize,
}

impl fmt::Display for TeardownSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} alert(s) cleared", self.alerts_cleared)?;
        if let Some(busy_for) = self.busy_for {
            write!(f, ", loading hidden after {} ms", busy_for.as_millis())?;
        }
        write!(f, ", {} event(s) logged", self.events_logged)
    }
}

/// Both managers plus the activity log they report to.
#[derive(Debug)]
pub struct Context<C: Clock = SystemClock> {
    alerts: Manager<C>,
    loading: Controller<C>,
    diagnostics: DiagnosticsCollector,
}

impl Context<SystemClock> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for Context<SystemClock> {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl<C: Clock + Clone> Context<C> {
    /// Builds the context with every manager reading time from `clock`.
    pub fn with_clock(config: &Config, clock: C) -> Self {
        let capacity = config
            .diagnostics
            .buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default();
        let diagnostics = DiagnosticsCollector::new(capacity);

        let mut alerts =
            Manager::with_clock(notifications::Settings::from(&config.notifications), clock.clone());
        alerts.set_diagnostics(diagnostics.handle());

        let mut loading = Controller::with_clock(loading::Settings::from(&config.loading), clock);
        loading.set_diagnostics(diagnostics.handle());

        Self {
            alerts,
            loading,
            diagnostics,
        }
    }
}

impl<C: Clock> Context<C> {
    #[must_use]
    pub fn alerts(&self) -> &Manager<C> {
        &self.alerts
    }

    pub fn alerts_mut(&mut self) -> &mut Manager<C> {
        &mut self.alerts
    }

    #[must_use]
    pub fn loading(&self) -> &Controller<C> {
        &self.loading
    }

    pub fn loading_mut(&mut self) -> &mut Controller<C> {
        &mut self.loading
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Runs one demo step against the managers.
    pub fn apply(&mut self, step: Step) {
        step.apply(&mut self.alerts, &mut self.loading);
    }

    /// Fires due alert timers and animates the overlay. Returns whether
    /// anything on screen changed.
    pub fn tick(&mut self) -> bool {
        let alerts_changed = self.alerts.tick();
        let loading_changed = self.loading.tick();
        alerts_changed || loading_changed
    }

    /// Whether the periodic tick is needed right now.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.alerts.has_pending_timers() || self.loading.is_active()
    }

    /// Moves reported events into the activity log.
    pub fn flush_diagnostics(&mut self) -> usize {
        self.diagnostics.process_pending()
    }

    /// Clears both managers and flushes the activity log.
    ///
    /// After teardown no timer is pending and the overlay is hidden, so a
    /// late tick has nothing left to do.
    pub fn teardown(&mut self) -> TeardownSummary {
        let alerts_cleared = self.alerts.clear_all();
        let busy_for = self.loading.hide();
        self.flush_diagnostics();

        let summary = TeardownSummary {
            alerts_cleared,
            busy_for,
            events_logged: self.diagnostics.len(),
        };
        tracing::info!(%summary, "context torn down");
        if let Ok(json) = self.diagnostics.export_json() {
            tracing::debug!(events = %json, "activity log at shutdown");
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::{LoadingConfig, NotificationsConfig};
    use crate::ui::notifications::{AlertKind, AlertOptions, StackPosition};

    fn context() -> (Context<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Context::with_clock(&Config::default(), clock.clone()), clock)
    }

    #[test]
    fn settings_flow_from_config() {
        let config = Config {
            notifications: NotificationsConfig {
                max_alerts: Some(2),
                position: Some(StackPosition::BottomLeft),
                ..NotificationsConfig::default()
            },
            loading: LoadingConfig {
                default_message: Some("Hold on".into()),
                ..LoadingConfig::default()
            },
            ..Config::default()
        };
        let context = Context::with_clock(&config, ManualClock::new());

        assert_eq!(context.alerts().settings().max_alerts.value(), 2);
        assert_eq!(context.alerts().position(), StackPosition::BottomLeft);
        assert_eq!(context.loading().message(), "Hold on");
    }

    #[test]
    fn idle_context_needs_no_tick() {
        let (mut context, _clock) = context();
        assert!(!context.needs_tick());

        context.loading_mut().show();
        assert!(context.needs_tick());
        context.loading_mut().hide();
        assert!(!context.needs_tick());

        context
            .alerts_mut()
            .enqueue(AlertKind::Info, "Restock", "Shelf B refilled", AlertOptions::new());
        assert!(context.needs_tick());
    }

    #[test]
    fn sticky_alerts_alone_do_not_keep_ticking() {
        let (mut context, _clock) = context();
        context.alerts_mut().enqueue(
            AlertKind::Warning,
            "Low stock",
            "Only 2 left",
            AlertOptions::new().sticky(),
        );
        assert!(!context.needs_tick());
    }

    #[test]
    fn tick_expires_alerts_through_the_context() {
        let (mut context, clock) = context();
        context.alerts_mut().enqueue(
            AlertKind::Success,
            "Saved",
            "Order saved",
            AlertOptions::new().duration_ms(1000),
        );

        clock.advance_ms(1000);
        assert!(context.tick());
        assert_eq!(context.alerts().visible_count(), 0);

        clock.advance_ms(300);
        assert!(context.tick());
        assert!(context.alerts().is_empty());
        assert!(!context.needs_tick());
    }

    #[test]
    fn diagnostics_are_wired_to_both_managers() {
        let (mut context, _clock) = context();
        context
            .alerts_mut()
            .enqueue(AlertKind::Error, "Sync failed", "Retry later", AlertOptions::new());
        context.loading_mut().show();
        assert_eq!(context.flush_diagnostics(), 2);
        assert_eq!(context.diagnostics().count("alert_raised"), 1);
        assert_eq!(context.diagnostics().count("loading_shown"), 1);
    }

    #[test]
    fn teardown_clears_everything_and_reports() {
        let (mut context, clock) = context();
        context
            .alerts_mut()
            .enqueue(AlertKind::Info, "A", "first", AlertOptions::new());
        context
            .alerts_mut()
            .enqueue(AlertKind::Info, "B", "second", AlertOptions::new().sticky());
        context.loading_mut().show_with("Importing");
        clock.advance_ms(400);

        let summary = context.teardown();
        assert_eq!(summary.alerts_cleared, 2);
        assert_eq!(summary.busy_for, Some(Duration::from_millis(400)));
        assert!(summary.events_logged >= 3);
        assert!(context.alerts().is_empty());
        assert!(!context.loading().is_active());
        assert!(!context.needs_tick());

        clock.advance_ms(10_000);
        assert!(!context.tick());
    }

    #[test]
    fn teardown_of_idle_context_is_quiet() {
        let (mut context, _clock) = context();
        let summary = context.teardown();
        assert_eq!(summary, TeardownSummary::default());
        assert_eq!(summary.to_string(), "0 alert(s) cleared, 0 event(s) logged");
    }

    #[test]
    fn apply_runs_demo_steps() {
        let (mut context, _clock) = context();
        context.apply(Step::ShowLoading(Some("Counting stock")));
        assert_eq!(context.loading().message(), "Counting stock");
        context.apply(Step::HideLoading);
        assert!(!context.loading().is_active());
    }
}
