// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::inventory::{Inventory, Item};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::alert::{self, ActionStyle, AlertQueue};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::table::{Cell, Row, Table};
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

/// Number of columns of the inventory table.
const COLUMNS: u16 = 4;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub alerts: &'a AlertQueue<Message>,
    pub inventory: &'a Inventory,
    pub status: Option<&'a str>,
    pub striped: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let items = ctx.inventory.items();

    let toolbar = iced::widget::Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("demo-show-alert")).size(typography::BODY))
                .on_press(Message::ShowAlert)
                .style(button_styles::primary),
        )
        .push(
            button(Text::new(i18n.tr("demo-notify")).size(typography::BODY))
                .on_press(Message::Notify)
                .style(button_styles::primary),
        )
        .push(
            button(Text::new(i18n.tr("demo-confirm-chain")).size(typography::BODY))
                .on_press(Message::ConfirmChain)
                .style(button_styles::primary),
        )
        .push(
            button(Text::new(i18n.tr("demo-clear-rows")).size(typography::BODY))
                .on_press_maybe((!items.is_empty()).then_some(Message::ClearRows))
                .style(button_styles::action(ActionStyle::Outlined, 1.0)),
        )
        .push(
            button(Text::new(i18n.tr("demo-restore-rows")).size(typography::BODY))
                .on_press_maybe(ctx.inventory.has_removed().then_some(Message::RestoreRows))
                .style(button_styles::action(ActionStyle::Outlined, 1.0)),
        );

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_LG))
        .push(toolbar)
        .push(inventory_table(i18n, items, ctx.striped));

    if let Some(status) = ctx.status {
        content = content.push(Text::new(status).size(typography::CAPTION));
    }

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill);

    alert::with_alerts(
        base,
        ctx.alerts
            .view(i18n)
            .map(|layer| layer.map(Message::Alert)),
    )
}

fn inventory_table<'a>(i18n: &I18n, items: &'a [Item], striped: bool) -> Element<'a, Message> {
    let head = Row::<Element<'a, Message>>::new([
        text_cell(i18n.tr("demo-column-name")),
        text_cell(i18n.tr("demo-column-quantity")).align(Horizontal::Right),
        text_cell(i18n.tr("demo-column-location")),
        text_cell(i18n.tr("demo-column-actions")).align(Horizontal::Right),
    ]);

    let footer = Row::<Element<'a, Message>>::new([text_cell(i18n.tr_with_args(
        "demo-footer-total",
        &[("count", &items.len().to_string())],
    ))
    .span(COLUMNS)
    .align(Horizontal::Right)]);

    let delete_label = i18n.tr("demo-delete-row");

    Table::<Item, Element<'a, Message>>::new(items)
        .head(head)
        .body(move |item: &Item, _| {
            Row::<Element<'a, Message>>::new([
                text_cell(item.name.clone()),
                text_cell(item.quantity.to_string()).align(Horizontal::Right),
                text_cell(item.location.clone()),
                delete_cell(&delete_label, &item.id),
            ])
        })
        .key(|item: &Item, _| item.id.clone())
        .footer(footer)
        .empty(text_cell(i18n.tr("table-empty")).align(Horizontal::Center))
        .view(striped)
}

fn text_cell<'a>(content: String) -> Cell<Element<'a, Message>> {
    Cell::new(Text::new(content).size(typography::BODY).into())
}

fn delete_cell<'a>(label: &str, id: &str) -> Cell<Element<'a, Message>> {
    Cell::new(
        button(Text::new(label.to_string()).size(typography::BODY_SM))
            .on_press(Message::RequestDelete(id.to_string()))
            .style(button_styles::action(ActionStyle::Text, 1.0))
            .into(),
    )
    .align(Horizontal::Right)
}
