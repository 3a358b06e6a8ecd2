// SPDX-License-Identifier: MPL-2.0
//! Activity event types recorded by the alert queue and loading overlay.

use crate::ui::notifications::{AlertId, AlertKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A warning or error alert was raised.
    AlertRaised {
        id: AlertId,
        kind: AlertKind,
        title: String,
    },
    /// An alert started its exit transition (user, expiry or producer).
    AlertDismissed { id: AlertId },
    /// An alert was pushed out by the capacity cap.
    AlertEvicted { id: AlertId },
    /// The whole queue was cleared.
    AlertsCleared { count: usize },
    /// The loading overlay became active or changed its message via `show`.
    LoadingShown { message: String },
    /// The loading overlay was hidden after being busy for `busy_ms`.
    LoadingHidden { busy_ms: u64 },
}

impl DiagnosticEventKind {
    /// Short label used in log lines and summaries.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticEventKind::AlertRaised { .. } => "alert_raised",
            DiagnosticEventKind::AlertDismissed { .. } => "alert_dismissed",
            DiagnosticEventKind::AlertEvicted { .. } => "alert_evicted",
            DiagnosticEventKind::AlertsCleared { .. } => "alerts_cleared",
            DiagnosticEventKind::LoadingShown { .. } => "loading_shown",
            DiagnosticEventKind::LoadingHidden { .. } => "loading_hidden",
        }
    }
}

/// A timestamped activity event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_tag_and_timestamp() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::AlertsCleared { count: 3 });
        let json = serde_json::to_value(&event).expect("serialize");

        assert_eq!(json["event"], "alerts_cleared");
        assert_eq!(json["count"], 3);
        assert!(json["at"].is_string());
    }

    #[test]
    fn raised_alert_serializes_kind_in_lowercase() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::AlertRaised {
            id: AlertId::new(),
            kind: AlertKind::Error,
            title: "Server Error".into(),
        });
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["kind"], "error");
        assert!(json["id"].is_u64());
    }

    #[test]
    fn labels_match_serialized_tags() {
        let kind = DiagnosticEventKind::LoadingHidden { busy_ms: 12 };
        let json = serde_json::to_value(&kind).expect("serialize");
        assert_eq!(json["event"], kind.label());
    }
}
