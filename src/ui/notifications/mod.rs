// SPDX-License-Identifier: MPL-2.0
//! Alert queue for transient user feedback.
//!
//! Alerts appear as toasts at one of eight screen anchors and leave on their
//! own after a time-to-live, unless they are sticky.
//!
//! # Components
//!
//! - [`alert`] - `Alert` entry, `AlertKind`, `AlertId`, `AlertOptions`
//! - [`manager`] - `Manager` owning the bounded list and its timers
//! - [`timers`] - deadline queue for expiry and removal
//! - [`presets`] - canned alerts and API outcome mapping
//! - [`position`] - `StackPosition` anchors
//! - [`settings`] - construction-time settings
//! - [`toast`] - toast widget rendering the list
//!
//! # Usage
//!
//! ```
//! use stockroom::ui::notifications::{AlertKind, AlertOptions, Manager};
//!
//! let mut manager = Manager::new();
//! let id = manager.enqueue(
//!     AlertKind::Success,
//!     "Saved!",
//!     "Data saved successfully!",
//!     AlertOptions::new(),
//! );
//!
//! manager.dismiss(id);
//! assert!(!manager.get(id).is_some_and(|alert| alert.is_visible()));
//! ```
//!
//! # Lifecycle
//!
//! - Default time-to-live: 5 s, toast helpers 3 s, `0` = sticky
//! - Capacity: 5 alerts, oldest evicted first
//! - Dismissed alerts stay hidden in the list for a 300 ms grace period

pub mod alert;
pub mod manager;
pub mod position;
pub mod presets;
pub mod settings;
pub mod timers;
pub mod toast;

pub use alert::{Alert, AlertId, AlertKind, AlertOptions};
pub use manager::{Manager, Message as AlertMessage};
pub use position::StackPosition;
pub use presets::{ApiFailure, Preset};
pub use settings::{MaxAlerts, Settings};
pub use toast::Toast;
