// SPDX-License-Identifier: MPL-2.0
//! Modal surface for the alert queue.
//!
//! The surface is a backdrop layer stacked over the host view, with the
//! dialog centered on it. It renders the tail of the queue, or the remembered
//! request while the closing fade runs.

use super::queue::{AlertQueue, Message};
use super::request::AlertRequest;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, center, mouse_area, opaque, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

impl<M> AlertQueue<M> {
    /// Renders the modal layer, or `None` when nothing is on screen.
    ///
    /// Buttons and backdrop only react while the queue is non-empty; during
    /// the closing fade the layer still blocks the host view underneath.
    pub fn view<'a>(&'a self, i18n: &I18n) -> Option<Element<'a, Message>> {
        if !self.is_visible() && !self.is_fading() {
            return None;
        }
        let request = self.displayed()?;
        let alpha = self.fade_opacity();
        let interactive = self.is_visible();

        Some(layer(
            dialog(request, i18n, alpha, interactive),
            alpha,
            interactive && self.dismiss_on_backdrop(),
        ))
    }
}

/// Stacks an optional alert layer over the host view.
pub fn with_alerts<'a, M: 'a>(
    base: impl Into<Element<'a, M>>,
    layer: Option<Element<'a, M>>,
) -> Element<'a, M> {
    match layer {
        Some(layer) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(layer)
            .into(),
        None => base.into(),
    }
}

fn layer(dialog: Element<'_, Message>, alpha: f32, dismiss_on_press: bool) -> Element<'_, Message> {
    let backdrop =
        mouse_area(center(opaque(dialog)).style(container_styles::backdrop(alpha)));
    let backdrop = if dismiss_on_press {
        backdrop.on_press(Message::Dismiss)
    } else {
        backdrop
    };

    opaque(backdrop)
}

fn dialog<'a, M>(
    request: &'a AlertRequest<M>,
    i18n: &I18n,
    alpha: f32,
    interactive: bool,
) -> Element<'a, Message> {
    let id = request.id();

    let buttons: Vec<Element<'a, Message>> = request
        .actions()
        .iter()
        .enumerate()
        .map(|(index, action)| {
            button(Text::new(action.label(i18n)).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press_maybe(interactive.then_some(Message::Activate { id, index }))
                .style(button_styles::action(action.resolved_style(), alpha))
                .into()
        })
        .collect();

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(request.display_title(i18n)).size(typography::TITLE_MD));

    if !request.body_text().is_empty() {
        content = content.push(Text::new(request.body_text()).size(typography::BODY));
    }

    content = content.push(
        Container::new(Row::with_children(buttons).spacing(spacing::XS))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
    );

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .max_height(sizing::DIALOG_MAX_HEIGHT)
        .padding(spacing::LG)
        .style(container_styles::dialog(alpha))
        .into()
}
