// SPDX-License-Identifier: MPL-2.0
//! Screen anchor of the alert stack.
//!
//! Position only affects rendering; the queue behaves identically for every
//! anchor.

use iced::alignment::{Horizontal, Vertical};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight corner/edge anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    CenterLeft,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl StackPosition {
    pub const ALL: [StackPosition; 8] = [
        StackPosition::TopLeft,
        StackPosition::TopCenter,
        StackPosition::TopRight,
        StackPosition::CenterLeft,
        StackPosition::CenterRight,
        StackPosition::BottomLeft,
        StackPosition::BottomCenter,
        StackPosition::BottomRight,
    ];

    #[must_use]
    pub fn horizontal(self) -> Horizontal {
        match self {
            StackPosition::TopLeft | StackPosition::CenterLeft | StackPosition::BottomLeft => {
                Horizontal::Left
            }
            StackPosition::TopCenter | StackPosition::BottomCenter => Horizontal::Center,
            StackPosition::TopRight | StackPosition::CenterRight | StackPosition::BottomRight => {
                Horizontal::Right
            }
        }
    }

    #[must_use]
    pub fn vertical(self) -> Vertical {
        match self {
            StackPosition::TopLeft | StackPosition::TopCenter | StackPosition::TopRight => {
                Vertical::Top
            }
            StackPosition::CenterLeft | StackPosition::CenterRight => Vertical::Center,
            StackPosition::BottomLeft
            | StackPosition::BottomCenter
            | StackPosition::BottomRight => Vertical::Bottom,
        }
    }

    /// Bottom anchors stack upward: the column lists newest first and the
    /// oldest alert stays pinned to the screen edge.
    #[must_use]
    pub fn newest_first(self) -> bool {
        matches!(self.vertical(), Vertical::Bottom)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StackPosition::TopLeft => "top-left",
            StackPosition::TopCenter => "top-center",
            StackPosition::TopRight => "top-right",
            StackPosition::CenterLeft => "center-left",
            StackPosition::CenterRight => "center-right",
            StackPosition::BottomLeft => "bottom-left",
            StackPosition::BottomCenter => "bottom-center",
            StackPosition::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for StackPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
