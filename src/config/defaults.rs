// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: queue capacity and alert timings
//! - **Loading**: overlay message
//! - **Diagnostics**: activity buffer bounds
//! - **Runtime**: UI tick cadence

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default number of alerts kept on screen at once.
pub const DEFAULT_MAX_ALERTS: usize = 5;

/// Smallest accepted alert capacity.
pub const MIN_MAX_ALERTS: usize = 1;

/// Default time-to-live of an alert (milliseconds). `0` means sticky.
pub const DEFAULT_ALERT_DURATION_MS: u64 = 5000;

/// Delay between hiding an alert and removing it (exit animation window).
pub const DEFAULT_REMOVAL_GRACE_MS: u64 = 300;

/// Upper bound for the removal grace period.
pub const MAX_REMOVAL_GRACE_MS: u64 = 5000;

/// Time-to-live used by the short toast helpers.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Message shown by the loading overlay when the caller gives none.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of activity events retained in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 200;

/// Minimum activity buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum activity buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 5000;

// ==========================================================================
// Runtime
// ==========================================================================

/// Interval of the UI tick that drives alert timers and the spinner.
pub const TICK_INTERVAL_MS: u64 = 100;

const _: () = {
    assert!(MIN_MAX_ALERTS >= 1);
    assert!(DEFAULT_MAX_ALERTS >= MIN_MAX_ALERTS);
    assert!(DEFAULT_REMOVAL_GRACE_MS <= MAX_REMOVAL_GRACE_MS);
    assert!(DEFAULT_TOAST_DURATION_MS < DEFAULT_ALERT_DURATION_MS);
    assert!(
        DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY
            && DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY
    );
};
