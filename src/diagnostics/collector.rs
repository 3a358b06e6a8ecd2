// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating activity events.
//!
//! Producers hold a cheap [`DiagnosticsHandle`] and send without blocking;
//! the collector drains the channel into its circular buffer on each UI tick.

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use crate::ui::notifications::{AlertId, AlertKind};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError, Receiver, Sender};

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending activity events to the collector.
///
/// Sends never block: when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    fn send(&self, kind: DiagnosticEventKind) {
        match self.event_tx.try_send(DiagnosticEvent::new(kind)) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::trace!(event = event.kind.label(), "diagnostics channel full, dropping");
            }
            Err(TrySendError::Closed(_)) => {}
        }
    }

    pub fn log_alert_raised(&self, id: AlertId, kind: AlertKind, title: &str) {
        self.send(DiagnosticEventKind::AlertRaised {
            id,
            kind,
            title: title.to_string(),
        });
    }

    pub fn log_alert_dismissed(&self, id: AlertId) {
        self.send(DiagnosticEventKind::AlertDismissed { id });
    }

    pub fn log_alert_evicted(&self, id: AlertId) {
        self.send(DiagnosticEventKind::AlertEvicted { id });
    }

    pub fn log_alerts_cleared(&self, count: usize) {
        self.send(DiagnosticEventKind::AlertsCleared { count });
    }

    pub fn log_loading_shown(&self, message: &str) {
        self.send(DiagnosticEventKind::LoadingShown {
            message: message.to_string(),
        });
    }

    pub fn log_loading_hidden(&self, busy_for: Duration) {
        self.send(DiagnosticEventKind::LoadingHidden {
            busy_ms: u64::try_from(busy_for.as_millis()).unwrap_or(u64::MAX),
        });
    }
}

/// Central collector for activity events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = mpsc::channel(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event into the buffer. Returns how many moved.
    pub fn process_pending(&mut self) -> usize {
        let mut moved = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            moved += 1;
        }
        moved
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Number of stored events carrying `label`.
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.buffer
            .iter()
            .filter(|event| event.kind.label() == label)
            .count()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes the stored events as a pretty JSON array.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
