// SPDX-License-Identifier: MPL-2.0
//! Deadline queue for alert expiry and removal timers.
//!
//! Each alert has at most one pending timer per [`TimerKind`]. Scheduling a
//! timer that already exists replaces it, so a callback can never fire twice
//! for the same alert and purpose.

use super::alert::AlertId;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Time-to-live elapsed: start the exit transition.
    Expire,
    /// Grace period elapsed: drop the entry.
    Remove,
}

/// A timer that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub id: AlertId,
    pub kind: TimerKind,
    pub deadline: Instant,
}

/// Sequence number breaks ties between equal deadlines in scheduling order.
type Slot = (Instant, u64);

#[derive(Debug, Default)]
pub struct TimerQueue {
    by_deadline: BTreeMap<Slot, (AlertId, TimerKind)>,
    by_target: HashMap<(AlertId, TimerKind), Slot>,
    next_seq: u64,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a timer, replacing any pending one with the same target.
    pub fn schedule(&mut self, id: AlertId, kind: TimerKind, deadline: Instant) {
        self.cancel(id, kind);
        let slot = (deadline, self.next_seq);
        self.next_seq += 1;
        self.by_deadline.insert(slot, (id, kind));
        self.by_target.insert((id, kind), slot);
    }

    /// Cancels a pending timer. Returns whether one existed.
    pub fn cancel(&mut self, id: AlertId, kind: TimerKind) -> bool {
        match self.by_target.remove(&(id, kind)) {
            Some(slot) => {
                self.by_deadline.remove(&slot);
                true
            }
            None => false,
        }
    }

    /// Cancels every timer that targets `id`.
    pub fn cancel_all(&mut self, id: AlertId) {
        self.cancel(id, TimerKind::Expire);
        self.cancel(id, TimerKind::Remove);
    }

    pub fn clear(&mut self) {
        self.by_deadline.clear();
        self.by_target.clear();
    }

    /// Pops the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Timer> {
        let (&(deadline, _), _) = self.by_deadline.first_key_value()?;
        if deadline > now {
            return None;
        }
        let (_, (id, kind)) = self.by_deadline.pop_first()?;
        self.by_target.remove(&(id, kind));
        Some(Timer { id, kind, deadline })
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.by_deadline.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn is_scheduled(&self, id: AlertId, kind: TimerKind) -> bool {
        self.by_target.contains_key(&(id, kind))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_target.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_target.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pops_in_deadline_order() {
        let mut queue = TimerQueue::new();
        let now = Instant::now();
        let (a, b) = (AlertId::new(), AlertId::new());

        queue.schedule(a, TimerKind::Expire, now + Duration::from_millis(200));
        queue.schedule(b, TimerKind::Expire, now + Duration::from_millis(100));

        let later = now + Duration::from_millis(250);
        assert_eq!(queue.pop_due(later).map(|t| t.id), Some(b));
        assert_eq!(queue.pop_due(later).map(|t| t.id), Some(a));
        assert!(queue.pop_due(later).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn nothing_pops_before_deadline() {
        let mut queue = TimerQueue::new();
        let now = Instant::now();
        queue.schedule(AlertId::new(), TimerKind::Remove, now + Duration::from_millis(300));

        assert!(queue.pop_due(now + Duration::from_millis(299)).is_none());
        assert!(queue.pop_due(now + Duration::from_millis(300)).is_some());
    }

    #[test]
    fn rescheduling_replaces_the_pending_timer() {
        let mut queue = TimerQueue::new();
        let now = Instant::now();
        let id = AlertId::new();

        queue.schedule(id, TimerKind::Remove, now + Duration::from_millis(100));
        queue.schedule(id, TimerKind::Remove, now + Duration::from_millis(500));

        assert_eq!(queue.len(), 1);
        assert!(queue.pop_due(now + Duration::from_millis(200)).is_none());
        assert_eq!(
            queue.next_deadline(),
            Some(now + Duration::from_millis(500))
        );
    }

    #[test]
    fn expire_and_remove_are_tracked_separately() {
        let mut queue = TimerQueue::new();
        let now = Instant::now();
        let id = AlertId::new();

        queue.schedule(id, TimerKind::Expire, now);
        queue.schedule(id, TimerKind::Remove, now);
        assert_eq!(queue.len(), 2);

        assert!(queue.cancel(id, TimerKind::Expire));
        assert!(!queue.is_scheduled(id, TimerKind::Expire));
        assert!(queue.is_scheduled(id, TimerKind::Remove));

        queue.cancel_all(id);
        assert!(queue.is_empty());
        assert!(queue.next_deadline().is_none());
    }

    #[test]
    fn cancel_unknown_returns_false() {
        let mut queue = TimerQueue::new();
        assert!(!queue.cancel(AlertId::new(), TimerKind::Expire));
    }
}
