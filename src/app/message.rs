// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::demo;
use crate::ui::loading::LoadingMessage;
use crate::ui::notifications::AlertMessage;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Alerts(AlertMessage),
    Loading(LoadingMessage),
    Demo(demo::Message),
    /// A delayed demo step came due.
    DemoStep(demo::Step),
    Tick(Instant), // Drives alert timers and the busy indicator
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional directory holding `settings.toml`.
    pub config_dir: Option<PathBuf>,
}
