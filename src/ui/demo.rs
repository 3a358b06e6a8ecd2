// SPDX-License-Identifier: MPL-2.0
//! Demo panel that exercises the alert queue and the loading overlay.
//!
//! Each button runs a [`Scenario`]: a short script of [`Step`]s, each with a
//! delay from the click. The app schedules the delayed steps as tasks and
//! applies them to the managers when they come due.

use crate::clock::Clock;
use crate::ui::design_tokens::{color, dimension, font_size, space};
use crate::ui::loading::Controller;
use crate::ui::notifications::{AlertKind, AlertOptions, ApiFailure, Manager, Preset};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::time::Duration;

/// A scripted sequence triggered from the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    BasicAlerts,
    PredefinedHelpers,
    CustomAlerts,
    ApiSimulation,
    ToastAlerts,
    LoadingState,
    ClearAll,
}

impl Scenario {
    pub const ALL: [Scenario; 7] = [
        Scenario::BasicAlerts,
        Scenario::PredefinedHelpers,
        Scenario::CustomAlerts,
        Scenario::ApiSimulation,
        Scenario::ToastAlerts,
        Scenario::LoadingState,
        Scenario::ClearAll,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Scenario::BasicAlerts => "Basic Alerts",
            Scenario::PredefinedHelpers => "Predefined Helpers",
            Scenario::CustomAlerts => "Custom Alerts",
            Scenario::ApiSimulation => "API Simulation",
            Scenario::ToastAlerts => "Toast Alerts",
            Scenario::LoadingState => "Loading State",
            Scenario::ClearAll => "Clear All Alerts",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Scenario::BasicAlerts => "Shows success, error, warning and info alerts in sequence",
            Scenario::PredefinedHelpers => "Common patterns like login success and failure",
            Scenario::CustomAlerts => "Alerts with a custom duration and a sticky notice",
            Scenario::ApiSimulation => "An API success followed by a 401 failure",
            Scenario::ToastAlerts => "Short-lived toast alerts of every kind",
            Scenario::LoadingState => "Busy overlay with a message update and a follow-up alert",
            Scenario::ClearAll => "Removes every alert at once",
        }
    }

    /// Steps with their delay from the moment the scenario starts.
    #[must_use]
    pub fn steps(self) -> Vec<(Duration, Step)> {
        let at = Duration::from_millis;
        match self {
            Scenario::BasicAlerts => vec![
                (at(0), Step::alert(AlertKind::Success, "Success!", "This is a success message!")),
                (at(1000), Step::alert(AlertKind::Error, "Error", "This is an error message!")),
                (at(2000), Step::alert(AlertKind::Warning, "Warning", "This is a warning message!")),
                (at(3000), Step::alert(AlertKind::Info, "Info", "This is an info message!")),
            ],
            Scenario::PredefinedHelpers => vec![
                (at(0), Step::Preset(Preset::LoginSuccess)),
                (at(2000), Step::Preset(Preset::LoginFailed)),
                (at(4000), Step::Preset(Preset::ServerError)),
                (at(6000), Step::Preset(Preset::SaveSuccess)),
                (at(8000), Step::Preset(Preset::ValidationError)),
            ],
            Scenario::CustomAlerts => vec![
                (
                    at(0),
                    Step::Alert {
                        kind: AlertKind::Success,
                        title: "Custom Success",
                        message: "This alert will dismiss in 3 seconds",
                        options: AlertOptions::new().duration_ms(3000).dismissible(true),
                    },
                ),
                (
                    at(1000),
                    Step::Alert {
                        kind: AlertKind::Info,
                        title: "Important Notice",
                        message: "This alert will stay until you dismiss it",
                        options: AlertOptions::new().sticky().dismissible(true),
                    },
                ),
            ],
            Scenario::ApiSimulation => vec![
                (at(1000), Step::ApiSuccess("Data saved successfully!")),
                (
                    at(3000),
                    Step::ApiError {
                        status: 401,
                        message: "Unauthorized access",
                        custom: "Failed to authenticate",
                    },
                ),
            ],
            Scenario::ToastAlerts => vec![
                (at(0), Step::Toast(AlertKind::Success, "Quick success toast!")),
                (at(1000), Step::Toast(AlertKind::Error, "Quick error toast!")),
                (at(2000), Step::Toast(AlertKind::Warning, "Quick warning toast!")),
                (at(3000), Step::Toast(AlertKind::Info, "Quick info toast!")),
            ],
            Scenario::LoadingState => vec![
                (at(0), Step::ShowLoading(Some("Processing your request..."))),
                (at(1500), Step::SetLoadingMessage("Finishing up...")),
                (at(3000), Step::HideLoading),
                (
                    at(3000),
                    Step::alert(AlertKind::Success, "Done!", "Operation completed successfully!"),
                ),
            ],
            Scenario::ClearAll => vec![(Duration::ZERO, Step::ClearAll)],
        }
    }
}

/// One producer action against the managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Alert {
        kind: AlertKind,
        title: &'static str,
        message: &'static str,
        options: AlertOptions,
    },
    Preset(Preset),
    Toast(AlertKind, &'static str),
    ApiSuccess(&'static str),
    ApiError {
        status: u16,
        message: &'static str,
        custom: &'static str,
    },
    ShowLoading(Option<&'static str>),
    SetLoadingMessage(&'static str),
    HideLoading,
    ClearAll,
}

impl Step {
    fn alert(kind: AlertKind, title: &'static str, message: &'static str) -> Self {
        Step::Alert {
            kind,
            title,
            message,
            options: AlertOptions::new(),
        }
    }

    /// Performs the step.
    pub fn apply<C: Clock>(self, alerts: &mut Manager<C>, loading: &mut Controller<C>) {
        match self {
            Step::Alert {
                kind,
                title,
                message,
                options,
            } => {
                alerts.enqueue(kind, title, message, options);
            }
            Step::Preset(preset) => {
                alerts.preset(preset);
            }
            Step::Toast(kind, message) => {
                alerts.toast(kind, message);
            }
            Step::ApiSuccess(message) => {
                alerts.api_success(Some(message));
            }
            Step::ApiError {
                status,
                message,
                custom,
            } => {
                let failure = ApiFailure::status(status).with_message(message);
                alerts.api_error(&failure, Some(custom));
            }
            Step::ShowLoading(Some(message)) => loading.show_with(message),
            Step::ShowLoading(None) => loading.show(),
            Step::SetLoadingMessage(message) => loading.set_message(message),
            Step::HideLoading => {
                loading.hide();
            }
            Step::ClearAll => {
                alerts.clear_all();
            }
        }
    }
}

/// Messages emitted by the demo panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Run(Scenario),
}

/// Renders the panel.
pub fn view<'a>() -> Element<'a, Message> {
    let title = Text::new("Alert System Examples").size(font_size::HEADING);
    let subtitle = Text::new("Click the buttons below to see different types of alerts in action")
        .size(font_size::SUBTLE);

    let mut grid = Column::new().spacing(space::XS);
    for pair in Scenario::ALL.chunks(2) {
        let row = pair
            .iter()
            .fold(Row::new().spacing(space::XS), |row, scenario| {
                row.push(scenario_button(*scenario))
            });
        grid = grid.push(row);
    }

    let usage = Scenario::ALL.iter().fold(
        Column::new().spacing(space::XXS),
        |column, scenario| {
            column.push(
                Text::new(format!("{}: {}", scenario.label(), scenario.description()))
                    .size(font_size::CAPTION),
            )
        },
    );

    let content = Column::new()
        .spacing(space::MD)
        .push(title)
        .push(subtitle)
        .push(grid)
        .push(usage);

    Container::new(
        Container::new(content)
            .width(Length::Fixed(dimension::DEMO_PANEL_WIDTH))
            .padding(space::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn scenario_button<'a>(scenario: Scenario) -> Element<'a, Message> {
    let style = match scenario {
        Scenario::ApiSimulation => styles::button::accent(AlertKind::Error.color()),
        Scenario::LoadingState => styles::button::accent(AlertKind::Info.color()),
        Scenario::BasicAlerts => styles::button::accent(AlertKind::Success.color()),
        _ => styles::button::accent(color::BRAND),
    };
    let label = Container::new(Text::new(scenario.label()).size(font_size::BODY))
        .center_x(Length::Fill);

    let btn = button(label)
        .width(Length::Fill)
        .padding(space::XS)
        .on_press(Message::Run(scenario));

    if scenario == Scenario::ClearAll {
        btn.style(styles::button::secondary).into()
    } else {
        btn.style(style).into()
    }
}
