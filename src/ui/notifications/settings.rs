// SPDX-License-Identifier: MPL-2.0
//! Construction-time settings of the alert queue.

use super::position::StackPosition;
use crate::config::{
    NotificationsConfig, DEFAULT_ALERT_DURATION_MS, DEFAULT_MAX_ALERTS,
    DEFAULT_REMOVAL_GRACE_MS, DEFAULT_TOAST_DURATION_MS, MAX_REMOVAL_GRACE_MS,
    MIN_MAX_ALERTS,
};
use std::time::Duration;

/// Alert capacity.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always at least one alert. There is no upper bound.
///
/// # Example
///
/// ```
/// use stockroom::ui::notifications::MaxAlerts;
///
/// assert_eq!(MaxAlerts::new(3).value(), 3);
/// assert_eq!(MaxAlerts::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxAlerts(usize);

impl MaxAlerts {
    /// Creates a capacity, raising zero to one.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(MIN_MAX_ALERTS))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxAlerts {
    fn default() -> Self {
        Self(DEFAULT_MAX_ALERTS)
    }
}

/// Settings the queue manager is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub max_alerts: MaxAlerts,
    pub position: StackPosition,
    /// Time-to-live applied when the caller gives none.
    pub default_duration: Duration,
    /// Delay between hiding and removing; zero removes on dismiss.
    pub removal_grace: Duration,
    /// Time-to-live of the toast helpers.
    pub toast_duration: Duration,
}

impl Settings {
    #[must_use]
    pub fn with_max_alerts(mut self, max_alerts: usize) -> Self {
        self.max_alerts = MaxAlerts::new(max_alerts);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: StackPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_removal_grace(mut self, grace: Duration) -> Self {
        self.removal_grace = grace.min(Duration::from_millis(MAX_REMOVAL_GRACE_MS));
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_alerts: MaxAlerts::default(),
            position: StackPosition::default(),
            default_duration: Duration::from_millis(DEFAULT_ALERT_DURATION_MS),
            removal_grace: Duration::from_millis(DEFAULT_REMOVAL_GRACE_MS),
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }
}

impl From<&NotificationsConfig> for Settings {
    fn from(config: &NotificationsConfig) -> Self {
        let defaults = Settings::default();
        Settings {
            max_alerts: config
                .max_alerts
                .map_or(defaults.max_alerts, MaxAlerts::new),
            position: config.position.unwrap_or(defaults.position),
            default_duration: config
                .default_duration_ms
                .map_or(defaults.default_duration, Duration::from_millis),
            removal_grace: config
                .removal_grace_ms
                .map_or(defaults.removal_grace, |ms| {
                    Duration::from_millis(ms.min(MAX_REMOVAL_GRACE_MS))
                }),
            toast_duration: config
                .toast_duration_ms
                .map_or(defaults.toast_duration, Duration::from_millis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_alerts_only_raises_zero() {
        assert_eq!(MaxAlerts::new(0).value(), MIN_MAX_ALERTS);
        assert_eq!(MaxAlerts::new(1000).value(), 1000);
        assert_eq!(MaxAlerts::new(7).value(), 7);
    }

    #[test]
    fn defaults_match_reference_behaviour() {
        let settings = Settings::default();
        assert_eq!(settings.max_alerts.value(), 5);
        assert_eq!(settings.default_duration, Duration::from_millis(5000));
        assert_eq!(settings.removal_grace, Duration::from_millis(300));
        assert_eq!(settings.position, StackPosition::TopRight);
    }

    #[test]
    fn from_config_applies_overrides_and_clamps() {
        let config = NotificationsConfig {
            max_alerts: Some(2),
            position: Some(StackPosition::BottomLeft),
            default_duration_ms: Some(0),
            removal_grace_ms: Some(60_000),
            toast_duration_ms: None,
        };
        let settings = Settings::from(&config);

        assert_eq!(settings.max_alerts.value(), 2);
        assert_eq!(settings.position, StackPosition::BottomLeft);
        assert!(settings.default_duration.is_zero());
        assert_eq!(
            settings.removal_grace,
            Duration::from_millis(MAX_REMOVAL_GRACE_MS)
        );
        assert_eq!(settings.toast_duration, Settings::default().toast_duration);
    }
}
