// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use stockroom::app::Context;
use stockroom::clock::ManualClock;
use stockroom::config::Config;
use stockroom::ui::loading::{self, Controller, LoadingState};
use stockroom::ui::notifications::{
    AlertKind, AlertMessage, AlertOptions, ApiFailure, Manager, Settings, StackPosition,
};

fn manager_with(settings: Settings) -> (Manager<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (Manager::with_clock(settings, clock.clone()), clock)
}

fn titles(manager: &Manager<ManualClock>) -> Vec<String> {
    manager
        .alerts()
        .map(|alert| alert.title().to_string())
        .collect()
}

#[test]
fn capacity_drops_oldest_then_dismiss_removes_after_grace() {
    let (mut manager, clock) = manager_with(Settings::default().with_max_alerts(2));

    manager.enqueue(AlertKind::Info, "X", "first", AlertOptions::new().sticky());
    let y = manager.enqueue(AlertKind::Info, "Y", "second", AlertOptions::new().sticky());
    manager.enqueue(AlertKind::Info, "Z", "third", AlertOptions::new().sticky());
    assert_eq!(titles(&manager), vec!["Y", "Z"]);

    assert!(manager.dismiss(y));
    assert_eq!(titles(&manager), vec!["Y", "Z"]);
    assert!(!manager.get(y).expect("still in grace").is_visible());

    clock.advance_ms(300);
    manager.tick();
    assert_eq!(titles(&manager), vec!["Z"]);
}

#[test]
fn timed_alert_expires_then_leaves_after_grace() {
    let (mut manager, clock) = manager_with(Settings::default());
    let id = manager.enqueue(
        AlertKind::Success,
        "Saved!",
        "Data saved successfully!",
        AlertOptions::new(),
    );

    clock.advance_ms(4_999);
    manager.tick();
    assert!(manager.get(id).expect("alive").is_visible());

    clock.advance_ms(1);
    manager.tick();
    assert!(!manager.get(id).expect("in grace").is_visible());

    clock.advance_ms(300);
    manager.tick();
    assert!(manager.is_empty());
}

#[test]
fn sticky_alert_outlives_any_wait() {
    let (mut manager, clock) = manager_with(Settings::default());
    manager.enqueue(
        AlertKind::Warning,
        "Unsaved Changes",
        "You have unsaved changes",
        AlertOptions::new().sticky(),
    );

    clock.advance(Duration::from_secs(3600));
    assert!(!manager.tick());
    assert_eq!(manager.visible_count(), 1);
}

#[test]
fn clear_all_leaves_no_pending_effects() {
    let (mut manager, clock) = manager_with(Settings::default());
    for index in 0..4 {
        let id = manager.enqueue(
            AlertKind::Info,
            format!("Item {index}"),
            "restocked",
            AlertOptions::new().duration_ms(500),
        );
        if index % 2 == 0 {
            manager.dismiss(id);
        }
    }

    assert_eq!(manager.clear_all(), 4);
    assert!(!manager.has_pending_timers());

    clock.advance_ms(10_000);
    assert!(!manager.tick());
    assert!(manager.is_empty());
}

#[test]
fn dismissing_unknown_or_departed_alert_is_harmless() {
    let (mut manager, clock) = manager_with(Settings::default());
    let id = manager.enqueue(AlertKind::Error, "Error", "boom", AlertOptions::new());
    manager.dismiss(id);
    clock.advance_ms(300);
    manager.tick();

    assert!(!manager.dismiss(id));
    assert!(!manager.handle_message(&AlertMessage::Dismiss(id)));
    assert!(manager.is_empty());
}

#[test]
fn user_cannot_dismiss_locked_alert() {
    let (mut manager, _clock) = manager_with(Settings::default());
    let id = manager.enqueue(
        AlertKind::Info,
        "Processing",
        "Please wait...",
        AlertOptions::new().sticky().dismissible(false),
    );

    assert!(!manager.handle_message(&AlertMessage::Dismiss(id)));
    assert!(manager.get(id).expect("kept").is_visible());

    assert!(manager.dismiss(id));
}

#[test]
fn api_outcomes_map_to_alerts() {
    let (mut manager, _clock) = manager_with(Settings::default());
    manager.api_success(None);
    manager.api_error(&ApiFailure::status(404), None);
    manager.api_error(&ApiFailure::status(500), Some("Could not load products"));

    let kinds: Vec<AlertKind> = manager.alerts().map(|alert| alert.kind()).collect();
    assert_eq!(
        kinds,
        vec![AlertKind::Success, AlertKind::Error, AlertKind::Error]
    );
    assert_eq!(titles(&manager)[1], "Not Found");
    assert_eq!(
        manager.alerts().nth(2).expect("third").message(),
        "Could not load products"
    );
}

#[test]
fn bottom_anchor_keeps_queue_order() {
    let (mut manager, _clock) =
        manager_with(Settings::default().with_position(StackPosition::BottomRight));
    manager.enqueue(AlertKind::Info, "old", "", AlertOptions::new());
    manager.enqueue(AlertKind::Info, "new", "", AlertOptions::new());

    // The list is always oldest first; only rendering reverses it.
    assert_eq!(titles(&manager), vec!["old", "new"]);
    assert!(manager.position().newest_first());
}

#[test]
fn loading_overlay_last_writer_wins() {
    let clock = ManualClock::new();
    let mut controller = Controller::with_clock(loading::Settings::default(), clock.clone());

    controller.show_with("Uploading…");
    controller.set_message("Processing…");
    assert_eq!(
        controller.state(),
        &LoadingState {
            active: true,
            message: "Processing…".into()
        }
    );

    clock.advance_ms(120);
    assert_eq!(controller.hide(), Some(Duration::from_millis(120)));
    assert_eq!(controller.message(), "Processing…");
    assert!(!controller.is_active());
}

#[test]
fn context_teardown_stops_every_timer() {
    let clock = ManualClock::new();
    let mut context = Context::with_clock(&Config::default(), clock.clone());
    context
        .alerts_mut()
        .enqueue(AlertKind::Success, "Saved!", "ok", AlertOptions::new());
    context.loading_mut().show();

    let summary = context.teardown();
    assert_eq!(summary.alerts_cleared, 1);
    assert!(!context.needs_tick());

    clock.advance_ms(60_000);
    assert!(!context.tick());
}
