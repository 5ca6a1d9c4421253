// SPDX-License-Identifier: MPL-2.0
//! Widget pass for a computed table layout.

use super::cell::{Cell, Row};
use super::layout::{Layout, Table};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles::container as container_styles;
use iced::alignment::Vertical;
use iced::widget::{self, keyed_column, Column, Container};
use iced::{Element, Length};

impl<C> Layout<C> {
    /// Builds the table widgets. Header and footer sit outside the keyed body
    /// so only data rows are tracked by key.
    pub fn view<'a, M: 'a>(self, striped: bool) -> Element<'a, M>
    where
        C: Into<Element<'a, M>>,
    {
        let mut table = Column::new().width(Length::Fill);

        if let Some(head) = self.head {
            table = table.push(
                Container::new(row(head))
                    .width(Length::Fill)
                    .style(container_styles::table_header),
            );
        }

        let body = keyed_column(self.body.into_iter().enumerate().map(|(index, body)| {
            let key = body.key.id();
            let element: Element<'a, M> = if body.is_placeholder() {
                Container::new(row(body.row))
                    .width(Length::Fill)
                    .style(container_styles::table_empty)
                    .into()
            } else {
                Container::new(row(body.row))
                    .width(Length::Fill)
                    .style(container_styles::table_row(index, striped))
                    .into()
            };
            (key, element)
        }))
        .width(Length::Fill);
        table = table.push(body);

        if let Some(footer) = self.footer {
            table = table.push(
                Container::new(row(footer))
                    .width(Length::Fill)
                    .style(container_styles::table_header),
            );
        }

        Container::new(table)
            .width(Length::Fill)
            .style(container_styles::table_frame)
            .into()
    }
}

impl<'d, T, C> Table<'d, T, C> {
    /// Shorthand for `layout().view(striped)`.
    pub fn view<'a, M: 'a>(self, striped: bool) -> Element<'a, M>
    where
        C: Into<Element<'a, M>>,
    {
        self.layout().view(striped)
    }
}

fn row<'a, M: 'a, C>(row: Row<C>) -> Element<'a, M>
where
    C: Into<Element<'a, M>>,
{
    widget::Row::with_children(row.cells.into_iter().map(cell))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TABLE_ROW_HEIGHT))
        .align_y(Vertical::Center)
        .into()
}

fn cell<'a, M: 'a, C>(cell: Cell<C>) -> Element<'a, M>
where
    C: Into<Element<'a, M>>,
{
    Container::new(cell.content)
        .width(Length::FillPortion(cell.col_span.max(1)))
        .padding([spacing::XXS, spacing::SM])
        .align_x(cell.align)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::alignment::Horizontal;
    use iced::widget::{button, Text};

    #[derive(Debug, Clone)]
    enum Msg {}

    #[test]
    fn renders_populated_table() {
        let data = ["a", "b"];
        let _element: Element<'_, Msg> = Table::new(&data)
            .head(Row::new([Text::new("Name")]))
            .body(|item, _| Row::new([Text::new(*item)]))
            .key(|item, _| item.to_string())
            .footer(Row::new([Text::new("2 items")]))
            .view(true);
    }

    #[test]
    fn renders_placeholder_for_empty_data() {
        let data: Vec<&str> = Vec::new();
        let _element: Element<'_, Msg> = Table::new(&data)
            .head(Row::new([Text::new("Name"), Text::new("Qty")]))
            .body(|item, _| Row::new([Text::new(*item)]))
            .empty(Text::new("No rows"))
            .view(false);
    }

    fn element_cell<'a>(label: &str) -> Cell<Element<'a, Msg>> {
        Cell::new(Text::new(label.to_string()).into())
    }

    #[test]
    fn renders_prebuilt_element_cells() {
        let data = ["a", "b"];
        let head = Row::<Element<'_, Msg>>::new([
            element_cell("Name"),
            element_cell("Action").align(Horizontal::Right),
        ]);
        let footer =
            Row::<Element<'_, Msg>>::new([element_cell("Total").span(2).align(Horizontal::Right)]);

        let layout = Table::<&str, Element<'_, Msg>>::new(&data)
            .head(head)
            .body(|item, _| {
                let action: Element<'_, Msg> = button(Text::new("x")).into();
                Row::<Element<'_, Msg>>::new([
                    element_cell(item),
                    Cell::new(action).align(Horizontal::Right),
                ])
            })
            .footer(footer)
            .empty(element_cell("No rows").align(Horizontal::Center))
            .layout();

        assert_eq!(layout.body.len(), 2);
        assert_eq!(layout.body[1].row.cells[1].align, Horizontal::Right);
        assert_eq!(layout.footer.as_ref().map(|f| f.cells[0].col_span), Some(2));

        let _element: Element<'_, Msg> = layout.view(true);
    }
}
