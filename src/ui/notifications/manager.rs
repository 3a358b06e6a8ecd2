// SPDX-License-Identifier: MPL-2.0
//! Alert queue management.
//!
//! The `Manager` owns the ordered list of active alerts (oldest first), caps
//! it with a drop-oldest policy and drives the two timed phases of every
//! alert: expiry after its time-to-live, then removal once the exit grace
//! period has elapsed. Timers only fire from [`Manager::tick`], and each one
//! re-checks the current list before acting.

use super::alert::{Alert, AlertId, AlertKind, AlertOptions};
use super::position::StackPosition;
use super::settings::Settings;
use super::timers::{Timer, TimerKind, TimerQueue};
use crate::clock::{Clock, SystemClock};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;
use std::time::Instant;
use tokio::sync::watch;

/// Messages for alert state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// User asked to close an alert (honours `dismissible`).
    Dismiss(AlertId),
    /// Drop every alert at once.
    ClearAll,
    /// Fire due timers.
    Tick,
}

/// Manages the alert list and its timers.
#[derive(Debug)]
pub struct Manager<C: Clock = SystemClock> {
    /// Active alerts, oldest first.
    alerts: VecDeque<Alert>,
    timers: TimerQueue,
    settings: Settings,
    clock: C,
    /// Optional diagnostics handle for the activity log.
    diagnostics: Option<DiagnosticsHandle>,
    publisher: watch::Sender<Vec<Alert>>,
}

impl Manager<SystemClock> {
    /// Creates an empty manager with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_clock(settings, SystemClock)
    }
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Manager<C> {
    /// Creates an empty manager reading time from `clock`.
    pub fn with_clock(settings: Settings, clock: C) -> Self {
        let (publisher, _) = watch::channel(Vec::new());
        Self {
            alerts: VecDeque::with_capacity(settings.max_alerts.value()),
            timers: TimerQueue::new(),
            settings,
            clock,
            diagnostics: None,
            publisher,
        }
    }

    /// Sets the diagnostics handle for the activity log.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Appends a new visible alert and returns its id.
    ///
    /// When the list grows past `max_alerts`, the oldest entries are evicted
    /// along with their pending timers. A non-zero duration schedules an
    /// expiry measured from now.
    ///
    /// Warnings and errors are recorded in the diagnostics log.
    pub fn enqueue(
        &mut self,
        kind: AlertKind,
        title: impl Into<String>,
        message: impl Into<String>,
        options: AlertOptions,
    ) -> AlertId {
        let now = self.clock.now();
        let duration = options.duration.unwrap_or(self.settings.default_duration);
        let dismissible = options.dismissible.unwrap_or(true);
        let alert = Alert::new(
            kind,
            title.into(),
            message.into(),
            duration,
            dismissible,
            now,
        );
        let id = alert.id();

        // A deadline past the clock's range never comes, so the alert stays.
        if let Some(deadline) = now.checked_add(duration).filter(|_| !duration.is_zero()) {
            self.timers.schedule(id, TimerKind::Expire, deadline);
        }

        if let Some(handle) = &self.diagnostics {
            if matches!(kind, AlertKind::Warning | AlertKind::Error) {
                handle.log_alert_raised(id, kind, alert.title());
            }
        }

        tracing::debug!(%id, %kind, duration_ms = alert.duration_ms(), "alert enqueued");
        self.alerts.push_back(alert);
        self.evict_overflow();
        self.publish();
        id
    }

    /// Starts the exit transition of an alert.
    ///
    /// The entry stays in the list, hidden, until the removal grace period
    /// elapses (or is removed at once with a zero grace period). Unknown ids
    /// and alerts already on their way out are ignored.
    ///
    /// Returns `true` if the alert transitioned.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        let now = self.clock.now();
        let changed = self.begin_exit(id, now);
        if changed {
            self.publish();
        }
        changed
    }

    /// Dismissal coming from the user (toast close button).
    ///
    /// Same as [`dismiss`](Self::dismiss) but refused for alerts created with
    /// `dismissible = false`.
    pub fn request_dismiss(&mut self, id: AlertId) -> bool {
        match self.get(id) {
            Some(alert) if alert.is_dismissible() => self.dismiss(id),
            Some(_) => {
                tracing::debug!(%id, "ignoring close request for non-dismissible alert");
                false
            }
            None => false,
        }
    }

    /// Empties the list immediately and cancels every pending timer.
    ///
    /// Returns how many alerts were dropped.
    pub fn clear_all(&mut self) -> usize {
        let count = self.alerts.len();
        self.alerts.clear();
        self.timers.clear();

        if count > 0 {
            tracing::debug!(count, "alerts cleared");
            if let Some(handle) = &self.diagnostics {
                handle.log_alerts_cleared(count);
            }
            self.publish();
        }
        count
    }

    /// Fires every timer that is due. Returns whether the list changed.
    ///
    /// Should be called periodically (the app uses a 100 ms tick while
    /// timers are pending).
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;
        while let Some(timer) = self.timers.pop_due(now) {
            changed |= self.fire(timer, now);
        }
        if changed {
            self.publish();
        }
        changed
    }

    /// Handles a manager message. Returns whether the list changed.
    pub fn handle_message(&mut self, message: &Message) -> bool {
        match message {
            Message::Dismiss(id) => self.request_dismiss(*id),
            Message::ClearAll => self.clear_all() > 0,
            Message::Tick => self.tick(),
        }
    }

    /// Active alerts in insertion order (oldest first), including the ones
    /// in their exit transition.
    pub fn alerts(&self) -> impl DoubleEndedIterator<Item = &Alert> + ExactSizeIterator {
        self.alerts.iter()
    }

    /// Owned copy of the current list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Alert> {
        self.alerts.iter().cloned().collect()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<AlertId> {
        self.alerts.iter().map(Alert::id).collect()
    }

    #[must_use]
    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|alert| alert.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Number of alerts not yet in their exit transition.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.alerts.iter().filter(|alert| alert.is_visible()).count()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn position(&self) -> StackPosition {
        self.settings.position
    }

    /// Earliest pending expiry or removal.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Receiver that observes a fresh snapshot after every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Alert>> {
        self.publisher.subscribe()
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot());
    }

    fn evict_overflow(&mut self) {
        let max = self.settings.max_alerts.value();
        while self.alerts.len() > max {
            let Some(evicted) = self.alerts.pop_front() else {
                break;
            };
            let id = evicted.id();
            self.timers.cancel_all(id);
            tracing::debug!(%id, max, "alert evicted by capacity");
            if let Some(handle) = &self.diagnostics {
                handle.log_alert_evicted(id);
            }
        }
    }

    /// Hides the alert and schedules (or performs) its removal.
    fn begin_exit(&mut self, id: AlertId, now: Instant) -> bool {
        let Some(index) = self.alerts.iter().position(|alert| alert.id() == id) else {
            return false;
        };
        if !self.alerts[index].hide() {
            return false;
        }

        self.timers.cancel(id, TimerKind::Expire);
        let grace = self.settings.removal_grace;
        if grace.is_zero() {
            self.alerts.remove(index);
            tracing::debug!(%id, "alert dismissed and removed");
        } else {
            self.timers.schedule(id, TimerKind::Remove, now + grace);
            tracing::debug!(%id, grace_ms = grace.as_millis(), "alert dismissed");
        }

        if let Some(handle) = &self.diagnostics {
            handle.log_alert_dismissed(id);
        }
        true
    }

    fn fire(&mut self, timer: Timer, now: Instant) -> bool {
        match timer.kind {
            TimerKind::Expire => self.begin_exit(timer.id, now),
            TimerKind::Remove => {
                let position = self
                    .alerts
                    .iter()
                    .position(|alert| alert.id() == timer.id && !alert.is_visible());
                match position {
                    Some(index) => {
                        self.alerts.remove(index);
                        tracing::debug!(id = %timer.id, "alert removed");
                        true
                    }
                    None => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::diagnostics::DiagnosticsCollector;
    use std::time::Duration;

    fn manager_with(settings: Settings) -> (Manager<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Manager::with_clock(settings, clock.clone()), clock)
    }

    fn manager() -> (Manager<ManualClock>, ManualClock) {
        manager_with(Settings::default())
    }

    fn push(manager: &mut Manager<ManualClock>, title: &str) -> AlertId {
        manager.enqueue(AlertKind::Info, title, "body", AlertOptions::new())
    }

    fn titles(manager: &Manager<ManualClock>) -> Vec<String> {
        manager.alerts().map(|alert| alert.title().to_string()).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_pending_timers());
        assert_eq!(manager.position(), StackPosition::TopRight);
    }

    #[test]
    fn enqueue_applies_defaults() {
        let (mut manager, _clock) = manager();
        let id = push(&mut manager, "Saved");

        let alert = manager.get(id).expect("alert present");
        assert!(alert.is_visible());
        assert!(alert.is_dismissible());
        assert_eq!(alert.duration_ms(), 5000);
        assert!(manager.has_pending_timers());
    }

    #[test]
    fn list_never_exceeds_capacity_and_keeps_newest() {
        let (mut manager, _clock) = manager_with(Settings::default().with_max_alerts(3));
        let ids: Vec<AlertId> = (0..10)
            .map(|i| push(&mut manager, &format!("alert-{i}")))
            .collect();

        assert_eq!(manager.len(), 3);
        assert_eq!(manager.ids(), ids[7..].to_vec());
    }

    #[test]
    fn capacity_holds_after_every_enqueue() {
        let (mut manager, _clock) = manager_with(Settings::default().with_max_alerts(4));
        for i in 0..25 {
            push(&mut manager, &format!("alert-{i}"));
            assert!(manager.len() <= 4);
        }
    }

    #[test]
    fn eviction_cancels_timers_of_evicted_alerts() {
        let (mut manager, _clock) = manager_with(Settings::default().with_max_alerts(1));
        let first = push(&mut manager, "first");
        push(&mut manager, "second");

        assert!(manager.get(first).is_none());
        assert!(!manager.timers.is_scheduled(first, TimerKind::Expire));
        assert_eq!(manager.timers.len(), 1);
    }

    #[test]
    fn dismiss_hides_then_removes_after_grace() {
        let (mut manager, clock) = manager();
        push(&mut manager, "keep");
        let id = push(&mut manager, "drop");

        assert!(manager.dismiss(id));
        assert_eq!(manager.len(), 2);
        assert!(!manager.get(id).expect("still listed").is_visible());

        clock.advance_ms(299);
        assert!(!manager.tick());
        assert_eq!(manager.len(), 2);

        clock.advance_ms(1);
        assert!(manager.tick());
        assert_eq!(manager.len(), 1);
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let (mut manager, _clock) = manager();
        push(&mut manager, "a");
        let before = manager.snapshot();

        assert!(!manager.dismiss(AlertId::new()));
        assert_eq!(manager.snapshot(), before);
    }

    #[test]
    fn repeated_dismiss_is_idempotent() {
        let (mut manager, clock) = manager();
        let id = push(&mut manager, "a");

        assert!(manager.dismiss(id));
        clock.advance_ms(200);
        assert!(!manager.dismiss(id));

        // The removal deadline was not pushed back by the second call.
        assert!(manager.timers.is_scheduled(id, TimerKind::Remove));
        assert_eq!(manager.timers.len(), 1);
        clock.advance_ms(100);
        manager.tick();
        assert!(manager.is_empty());
    }

    #[test]
    fn zero_grace_removes_on_dismiss() {
        let settings = Settings::default().with_removal_grace(Duration::ZERO);
        let (mut manager, _clock) = manager_with(settings);
        let id = push(&mut manager, "a");

        assert!(manager.dismiss(id));
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn clear_all_empties_and_cancels_timers() {
        let (mut manager, clock) = manager();
        push(&mut manager, "a");
        let b = push(&mut manager, "b");
        manager.dismiss(b);

        assert_eq!(manager.clear_all(), 2);
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());

        clock.advance_ms(60_000);
        assert!(!manager.tick());
        assert!(manager.is_empty());
    }

    #[test]
    fn alert_enqueued_after_clear_is_not_touched_by_old_timers() {
        let (mut manager, clock) = manager();
        push(&mut manager, "old");
        clock.advance_ms(4000);
        manager.clear_all();

        let fresh = push(&mut manager, "fresh");
        clock.advance_ms(1000);
        manager.tick();
        assert!(manager.get(fresh).expect("fresh alert").is_visible());
    }

    #[test]
    fn capacity_above_twenty_is_honoured() {
        let (mut manager, _clock) = manager_with(Settings::default().with_max_alerts(50));
        for i in 0..30 {
            manager.enqueue(
                AlertKind::Info,
                format!("bin-{i}"),
                "restocked",
                AlertOptions::new().sticky(),
            );
        }
        assert_eq!(manager.len(), 30);

        for i in 30..55 {
            push(&mut manager, &format!("bin-{i}"));
        }
        assert_eq!(manager.len(), 50);
        assert_eq!(titles(&manager).first().map(String::as_str), Some("bin-5"));
    }

    #[test]
    fn unrepresentable_duration_behaves_as_sticky() {
        let (mut manager, clock) = manager();
        let id = manager.enqueue(
            AlertKind::Info,
            "Audit",
            "Yearly count scheduled",
            AlertOptions::new().duration(Duration::MAX),
        );

        assert!(manager.get(id).expect("enqueued").is_visible());
        assert!(!manager.has_pending_timers());

        clock.advance(Duration::from_secs(86_400));
        assert!(!manager.tick());
        assert!(manager.dismiss(id));
    }

    #[test]
    fn sticky_alert_never_expires() {
        let (mut manager, clock) = manager();
        let id = manager.enqueue(
            AlertKind::Warning,
            "Unsaved Changes",
            "You have unsaved changes.",
            AlertOptions::new().sticky(),
        );

        for _ in 0..100 {
            clock.advance(Duration::from_secs(60));
            manager.tick();
        }
        assert!(manager.get(id).expect("sticky alert").is_visible());
        assert!(!manager.has_pending_timers());
    }

    #[test]
    fn alert_expires_at_its_duration() {
        let (mut manager, clock) = manager();
        let id = manager.enqueue(
            AlertKind::Success,
            "Saved",
            "done",
            AlertOptions::new().duration_ms(1200),
        );

        clock.advance_ms(1199);
        manager.tick();
        assert!(manager.get(id).expect("alert").is_visible());

        clock.advance_ms(1);
        assert!(manager.tick());
        assert!(!manager.get(id).expect("alert").is_visible());

        clock.advance_ms(300);
        manager.tick();
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn late_tick_expires_and_removes_in_order() {
        let (mut manager, clock) = manager();
        let a = manager.enqueue(AlertKind::Info, "a", "", AlertOptions::new().duration_ms(100));
        let b = push(&mut manager, "b");

        clock.advance_ms(450);
        manager.tick();
        assert!(!manager.get(a).expect("a in grace").is_visible());
        assert!(manager.get(b).expect("b").is_visible());

        clock.advance_ms(300);
        manager.tick();
        assert_eq!(manager.ids(), vec![b]);
    }

    #[test]
    fn manual_dismiss_cancels_expiry() {
        let (mut manager, _clock) = manager();
        let id = push(&mut manager, "a");
        manager.dismiss(id);

        assert!(!manager.timers.is_scheduled(id, TimerKind::Expire));
        assert!(manager.timers.is_scheduled(id, TimerKind::Remove));
    }

    #[test]
    fn request_dismiss_honours_dismissible() {
        let (mut manager, _clock) = manager();
        let locked = manager.enqueue(
            AlertKind::Info,
            "Processing",
            "Please wait",
            AlertOptions::new().sticky().dismissible(false),
        );
        let open = push(&mut manager, "open");

        assert!(!manager.request_dismiss(locked));
        assert!(manager.get(locked).expect("locked").is_visible());
        assert!(manager.request_dismiss(open));

        // Programmatic dismissal still works.
        assert!(manager.dismiss(locked));
    }

    #[test]
    fn handle_message_routes_to_operations() {
        let (mut manager, clock) = manager();
        let id = push(&mut manager, "a");

        assert!(manager.handle_message(&Message::Dismiss(id)));
        clock.advance_ms(300);
        assert!(manager.handle_message(&Message::Tick));
        assert!(manager.is_empty());

        push(&mut manager, "b");
        assert!(manager.handle_message(&Message::ClearAll));
        assert!(!manager.handle_message(&Message::ClearAll));
    }

    #[test]
    fn two_slot_scenario() {
        let (mut manager, clock) = manager_with(Settings::default().with_max_alerts(2));
        push(&mut manager, "X");
        let y = push(&mut manager, "Y");
        push(&mut manager, "Z");
        assert_eq!(titles(&manager), ["Y", "Z"]);

        manager.dismiss(y);
        clock.advance_ms(300);
        manager.tick();
        assert_eq!(titles(&manager), ["Z"]);
    }

    #[test]
    fn hidden_alerts_still_count_toward_capacity() {
        let (mut manager, _clock) = manager_with(Settings::default().with_max_alerts(2));
        let a = push(&mut manager, "a");
        manager.dismiss(a);
        push(&mut manager, "b");
        push(&mut manager, "c");

        assert_eq!(titles(&manager), ["b", "c"]);
        assert!(!manager.timers.is_scheduled(a, TimerKind::Remove));
    }

    #[test]
    fn next_deadline_tracks_earliest_timer() {
        let (mut manager, clock) = manager();
        let start = clock.now();
        manager.enqueue(AlertKind::Info, "late", "", AlertOptions::new().duration_ms(800));
        manager.enqueue(AlertKind::Info, "soon", "", AlertOptions::new().duration_ms(200));

        assert_eq!(
            manager.next_deadline(),
            Some(start + Duration::from_millis(200))
        );
    }

    #[test]
    fn diagnostics_record_warnings_and_lifecycle() {
        let mut collector = DiagnosticsCollector::default();
        let settings = Settings::default().with_max_alerts(1);
        let (mut manager, _clock) = manager_with(settings);
        manager.set_diagnostics(collector.handle());

        manager.enqueue(AlertKind::Success, "ok", "", AlertOptions::new());
        let error = manager.enqueue(AlertKind::Error, "Server Error", "", AlertOptions::new());
        manager.dismiss(error);
        manager.clear_all();
        collector.process_pending();

        assert_eq!(collector.count("alert_raised"), 1);
        assert_eq!(collector.count("alert_evicted"), 1);
        assert_eq!(collector.count("alert_dismissed"), 1);
        assert_eq!(collector.count("alerts_cleared"), 1);
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let (mut manager, clock) = manager();
        let mut updates = manager.subscribe();

        let id = push(&mut manager, "a");
        updates.changed().await.expect("manager alive");
        assert_eq!(updates.borrow_and_update().len(), 1);

        manager.dismiss(id);
        updates.changed().await.expect("manager alive");
        assert!(!updates.borrow_and_update()[0].is_visible());

        clock.advance_ms(300);
        manager.tick();
        updates.changed().await.expect("manager alive");
        assert!(updates.borrow_and_update().is_empty());
    }

    #[test]
    fn unchanged_tick_does_not_publish() {
        let (mut manager, _clock) = manager();
        let mut updates = manager.subscribe();
        push(&mut manager, "a");
        updates.borrow_and_update();

        manager.tick();
        assert!(!updates.has_changed().expect("manager alive"));
    }
}
