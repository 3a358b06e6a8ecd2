// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring to the iced runtime.
//!
//! The `App` owns a single [`Context`] holding the alert queue, the loading
//! overlay and the activity log. Messages from the demo panel, the toasts and
//! the periodic tick are routed to it by `update`, and the window close
//! request tears it down before the window goes away.

mod context;
mod message;
mod subscription;
mod update;
mod view;

pub use context::{Context, TeardownSummary};
pub use message::{Flags, Message};

use crate::config;
use crate::ui::notifications::{AlertKind, AlertOptions};
use iced::{window, Element, Subscription, Task, Theme};

/// Application name shown in the title bar.
pub const APP_NAME: &str = "Stockroom";

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Title of the alert raised when the settings file is unusable.
const CONFIG_WARNING_TITLE: &str = "Configuration could not be read";

/// Root iced application state.
#[derive(Debug, Default)]
pub struct App {
    context: Context,
}

/// Builds the window settings.
///
/// Close requests are handled by the app so the context can be torn down
/// first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the context. A settings file that
    /// cannot be read falls back to defaults and raises a sticky warning.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir);
        let mut context = Context::new(&config);

        if let Some(warning) = config_warning {
            context.alerts_mut().enqueue(
                AlertKind::Warning,
                CONFIG_WARNING_TITLE,
                warning,
                AlertOptions::new().sticky(),
            );
        }
        context.flush_diagnostics();

        tracing::info!(
            max_alerts = context.alerts().settings().max_alerts.value(),
            position = ?context.alerts().position(),
            "application started"
        );
        (App { context }, Task::none())
    }

    fn title(&self) -> String {
        let loading = self.context.loading();
        if loading.is_active() {
            format!("{} - {APP_NAME}", loading.message())
        } else {
            APP_NAME.to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.context.needs_tick());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::update(&mut self.context, message);
        self.context.flush_diagnostics();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.context)
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }
}
