// SPDX-License-Identifier: MPL-2.0
//! View composition: demo panel, status line, alert stack and busy overlay.

use super::{Context, Message};
use crate::clock::Clock;
use crate::ui::demo;
use crate::ui::design_tokens::{font_size, space};
use crate::ui::loading;
use crate::ui::notifications::Toast;
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

/// Renders the window. Layers from bottom to top: content, alerts, overlay.
pub fn view<C: Clock>(context: &Context<C>) -> Element<'_, Message> {
    let content = Column::new()
        .push(demo::view().map(Message::Demo))
        .push(status_line(context))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(Toast::view_overlay(context.alerts()).map(Message::Alerts));

    if let Some(overlay) = loading::overlay::view(context.loading()) {
        layers = layers.push(overlay);
    }

    layers.into()
}

fn status_line<C: Clock>(context: &Context<C>) -> Element<'_, Message> {
    Container::new(Text::new(status_text(context)).size(font_size::CAPTION))
        .padding(space::XS)
        .width(Length::Fill)
        .into()
}

fn status_text<C: Clock>(context: &Context<C>) -> String {
    let alerts = context.alerts();
    let loading = if context.loading().is_active() {
        "busy"
    } else {
        "idle"
    };
    format!(
        "{} of {} alerts | loading {} | {} events logged",
        alerts.len(),
        alerts.settings().max_alerts.value(),
        loading,
        context.diagnostics().len()
    )
}
