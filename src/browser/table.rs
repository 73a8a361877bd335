// SPDX-License-Identifier: MPL-2.0
//! Columnar rendering of the collection.
//!
//! One header row with sortable column buttons, one body row per record
//! and the shared pagination footer. The checkbox column only exists when
//! some bulk action is wired; the trailing actions column only when at
//! least one rendered record carries row actions.

use crate::browser::columns::{Align, ColumnDescriptor, Record};
use crate::browser::component::{BodyContext, Message};
use crate::browser::pagination;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, checkbox, container, mouse_area, text, Column, Row, Text};
use iced::{Element, Length};

/// Glyphs for the active sort direction on the header.
const SORT_ASC: &str = "▲";
const SORT_DESC: &str = "▼";

pub(crate) fn view<'a>(ctx: &BodyContext<'a>) -> Element<'a, Message> {
    let has_actions = ctx.records.iter().any(|r| !r.actions.is_empty());

    let mut table = Column::new()
        .spacing(spacing::XXS)
        .push(header(ctx, has_actions));

    if ctx.loading {
        table = table.push(placeholder(&ctx.labels.loading));
    } else if ctx.records.is_empty() {
        table = table.push(placeholder(&ctx.labels.empty));
    } else {
        for (index, record) in ctx.records.iter().enumerate() {
            table = table.push(body_row(ctx, record, index, has_actions));
        }
    }

    table = table.push(pagination::view(ctx));
    table.width(Length::Fill).into()
}

fn header<'a>(ctx: &BodyContext<'a>, has_actions: bool) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .padding([spacing::XXS, spacing::XS]);

    if ctx.selectable {
        let eligible = ctx
            .selection
            .eligible_count(ctx.records.iter().map(|r| &r.id));
        let all_selected = eligible > 0 && ctx.selection.len() >= eligible;

        let select_all = checkbox(all_selected)
            .on_toggle(Message::SelectAll)
            .size(typography::BODY_LG);

        row = row.push(
            container(select_all)
                .width(Length::Fixed(sizing::CHECKBOX_COLUMN))
                .align_x(Horizontal::Center),
        );
    }

    for (index, column) in ctx.columns.iter().enumerate() {
        let active = ctx.pagination.order_by == column.id;
        let mut label = column.label.clone();
        if active {
            let glyph = match ctx.pagination.order {
                crate::browser::query::SortOrder::Asc => SORT_ASC,
                crate::browser::query::SortOrder::Desc => SORT_DESC,
            };
            label = format!("{label} {glyph}");
        }

        let sort_button = button(Text::new(label).size(typography::BODY))
            .on_press(Message::Sort(column.id))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::bare);

        row = row.push(
            container(sort_button)
                .width(column_width(column))
                .align_x(horizontal(column.effective_align(index))),
        );
    }

    if has_actions {
        row = row.push(
            container(text(""))
                .width(Length::Fixed(sizing::CHECKBOX_COLUMN))
                .align_x(Horizontal::Center),
        );
    }

    container(row)
        .width(Length::Fill)
        .style(styles::container::table_header)
        .into()
}

fn body_row<'a>(
    ctx: &BodyContext<'a>,
    record: &'a Record,
    index: usize,
    has_actions: bool,
) -> Element<'a, Message> {
    let selected = ctx.selection.contains(&record.id);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .padding([spacing::XXS, spacing::XS]);

    if ctx.selectable {
        let mut cell = checkbox(selected).size(typography::BODY_LG);
        if !ctx.selection.is_disabled(&record.id) {
            let id = record.id.clone();
            cell = cell.on_toggle(move |_| Message::ToggleRow(id.clone()));
        }
        row = row.push(
            container(cell)
                .width(Length::Fixed(sizing::CHECKBOX_COLUMN))
                .align_x(Horizontal::Center),
        );
    }

    for (col_index, column) in ctx.columns.iter().enumerate() {
        let value = record
            .get(column.id)
            .map(crate::browser::columns::CellValue::render)
            .unwrap_or_default();

        row = row.push(
            container(Text::new(value).size(typography::BODY))
                .width(column_width(column))
                .align_x(horizontal(column.effective_align(col_index))),
        );
    }

    if has_actions {
        let mut actions = Row::new().spacing(spacing::XXS);
        for action in &record.actions {
            let record_id = record.id.clone();
            let action_id = action.id;
            let pressable = button(Text::new(action.icon.clone()).size(typography::BODY))
                .on_press(Message::RowActionPressed {
                    record: record_id,
                    action: action_id,
                })
                .padding(spacing::XXS)
                .style(styles::button::bare);
            actions = actions.push(styles::tooltip::styled(
                pressable,
                action.label.clone(),
                iced::widget::tooltip::Position::Bottom,
            ));
        }
        row = row.push(
            container(actions)
                .width(Length::Fixed(sizing::CHECKBOX_COLUMN))
                .align_x(Horizontal::Center),
        );
    }

    let surface = container(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ROW_HEIGHT))
        .style(styles::container::table_row(selected, index % 2 == 0));

    mouse_area(surface)
        .on_press(Message::RowActivated(record.id.clone()))
        .into()
}

fn placeholder(label: &str) -> Element<'_, Message> {
    container(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::ROW_HEIGHT * 2.0))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn column_width(column: &ColumnDescriptor) -> Length {
    match column.width {
        Some(width) => Length::Fixed(width),
        None => Length::Fill,
    }
}

fn horizontal(align: Align) -> Horizontal {
    match align {
        Align::Left => Horizontal::Left,
        Align::Center => Horizontal::Center,
        Align::Right => Horizontal::Right,
    }
}
