// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{Context, Message};
use crate::clock::Clock;
use crate::ui::demo::{self, Scenario};
use iced::{window, Task};

/// Routes a top-level message to the component that owns it.
pub fn update<C: Clock>(context: &mut Context<C>, message: Message) -> Task<Message> {
    match message {
        Message::Alerts(message) => {
            context.alerts_mut().handle_message(&message);
            Task::none()
        }
        Message::Loading(message) => {
            context.loading_mut().handle_message(message);
            Task::none()
        }
        Message::Demo(demo::Message::Run(scenario)) => handle_scenario(context, scenario),
        Message::DemoStep(step) => {
            context.apply(step);
            Task::none()
        }
        Message::Tick(_instant) => {
            context.tick();
            Task::none()
        }
        Message::WindowCloseRequested(window_id) => handle_close_request(context, window_id),
    }
}

/// Applies the scenario's immediate steps and schedules the delayed ones.
pub fn handle_scenario<C: Clock>(context: &mut Context<C>, scenario: Scenario) -> Task<Message> {
    tracing::debug!(scenario = scenario.label(), "running demo scenario");
    let mut delayed = Vec::new();
    for (delay, step) in scenario.steps() {
        if delay.is_zero() {
            context.apply(step);
        } else {
            // The timer is created on first poll, inside the executor.
            delayed.push(Task::perform(
                async move { tokio::time::sleep(delay).await },
                move |()| Message::DemoStep(step),
            ));
        }
    }
    Task::batch(delayed)
}

/// Tears the context down before the window goes away.
pub fn handle_close_request<C: Clock>(
    context: &mut Context<C>,
    window_id: window::Id,
) -> Task<Message> {
    context.teardown();
    window::close(window_id)
}
