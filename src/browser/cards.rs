// SPDX-License-Identifier: MPL-2.0
//! Card-grid rendering of the collection.
//!
//! Cards wrap to as many per row as the viewport fits. The collapsible
//! filter bar above the grid replaces the table header: it hosts the
//! select-all checkbox and the order-by/direction dropdowns, since cards
//! have no clickable column headers.

use crate::browser::columns::{ColumnDescriptor, ColumnId, Record, UPDATED_AT};
use crate::browser::component::{BodyContext, Labels, Message, ViewMode};
use crate::browser::pagination;
use crate::browser::query::SortOrder;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, checkbox, container, mouse_area, pick_list, Column, Row, Text};
use iced::{Element, Length};
use std::fmt;

const BAR_OPEN: &str = "▾";
const BAR_CLOSED: &str = "▸";

/// Order-by option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnOption {
    id: ColumnId,
    label: String,
}

impl fmt::Display for ColumnOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Sort direction option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderOption {
    order: SortOrder,
    label: String,
}

impl fmt::Display for OrderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub(crate) fn view<'a>(ctx: &BodyContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(filter_bar(ctx));

    if ctx.loading {
        column = column.push(placeholder(&ctx.labels.loading));
    } else if ctx.records.is_empty() {
        column = column.push(placeholder(&ctx.labels.empty));
    } else {
        column = column.push(grid(ctx));
    }

    column = column.push(pagination::view(ctx));
    column.width(Length::Fill).into()
}

/// Whether the bar body is visible: wide viewports always show it, the
/// toggle only exists on narrow ones.
fn bar_open(wide: bool, toggled_open: bool) -> bool {
    wide || toggled_open
}

fn filter_bar<'a>(ctx: &BodyContext<'a>) -> Element<'a, Message> {
    let open = bar_open(ctx.wide, ctx.filter_bar_open);

    let mut bar = Column::new().spacing(spacing::XS);

    if !ctx.wide {
        let glyph = if open { BAR_OPEN } else { BAR_CLOSED };
        let toggle = button(
            Text::new(format!("{glyph} {}", ctx.labels.order_by)).size(typography::BODY),
        )
        .on_press(Message::ToggleFilterBar)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::bare);
        bar = bar.push(toggle);
    }

    if open {
        let mut controls = Row::new().spacing(spacing::SM).align_y(Vertical::Center);

        if ctx.selectable {
            let eligible = ctx
                .selection
                .eligible_count(ctx.records.iter().map(|r| &r.id));
            let all_selected = eligible > 0 && ctx.selection.len() >= eligible;

            controls = controls.push(
                checkbox(all_selected)
                    .on_toggle(Message::SelectAll)
                    .size(typography::BODY_LG),
            );
        }

        let options = column_options(ctx.columns, ctx.labels);
        let selected = options
            .iter()
            .find(|opt| opt.id == ctx.pagination.order_by)
            .cloned();
        // Re-picking the active column goes through the same path as a
        // header click, so it flips the direction.
        let order_by_picker = pick_list(options, selected, |opt| Message::Sort(opt.id))
            .padding(spacing::XS)
            .width(Length::Fixed(160.0));

        let directions = vec![
            OrderOption {
                order: SortOrder::Asc,
                label: ctx.labels.ascending.clone(),
            },
            OrderOption {
                order: SortOrder::Desc,
                label: ctx.labels.descending.clone(),
            },
        ];
        let current = directions
            .iter()
            .find(|opt| opt.order == ctx.pagination.order)
            .cloned();
        let direction_picker = pick_list(directions, current, |opt| Message::OrderPicked(opt.order))
            .padding(spacing::XS)
            .width(Length::Fixed(130.0));

        controls = controls.push(order_by_picker).push(direction_picker);

        // Card mode hosts its own view-mode toggle; the card button is
        // the active one by definition here.
        let table_button = button(Text::new(ctx.labels.table_view.as_str()).size(typography::BODY_SM))
            .on_press(Message::SetViewMode(ViewMode::Table))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::unselected);
        let card_button = button(Text::new(ctx.labels.card_view.as_str()).size(typography::BODY_SM))
            .on_press(Message::SetViewMode(ViewMode::Card))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::selected);
        controls = controls
            .push(iced::widget::Space::new().width(Length::Fill))
            .push(table_button)
            .push(card_button);

        bar = bar.push(
            container(controls)
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::panel),
        );
    }

    bar.into()
}

/// Columns offered by the order-by dropdown. An `updated_at` entry is
/// injected when the caller declares no column with that id, so timestamp
/// ordering stays reachable from the card view.
fn column_options(columns: &[ColumnDescriptor], labels: &Labels) -> Vec<ColumnOption> {
    let mut options: Vec<ColumnOption> = columns
        .iter()
        .map(|c| ColumnOption {
            id: c.id,
            label: c.label.clone(),
        })
        .collect();

    if !options.iter().any(|opt| opt.id == UPDATED_AT) {
        options.push(ColumnOption {
            id: UPDATED_AT,
            label: labels.updated_at.clone(),
        });
    }
    options
}

fn grid<'a>(ctx: &BodyContext<'a>) -> Element<'a, Message> {
    let slot = sizing::CARD_WIDTH + spacing::SM;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let per_row = ((ctx.viewport_width / slot).floor() as usize).max(1);

    let mut rows = Column::new().spacing(spacing::SM);
    for chunk in ctx.records.chunks(per_row) {
        let mut row = Row::new().spacing(spacing::SM);
        for record in chunk {
            row = row.push(card(ctx, record));
        }
        rows = rows.push(row);
    }
    rows.into()
}

fn card<'a>(ctx: &BodyContext<'a>, record: &'a Record) -> Element<'a, Message> {
    let selected = ctx.selection.contains(&record.id);

    let mut content = Column::new().spacing(spacing::XXS).padding(spacing::SM);

    // First declared column doubles as the card title.
    let mut columns = ctx.columns.iter();
    if let Some(title_column) = columns.next() {
        let title = record
            .get(title_column.id)
            .map(crate::browser::columns::CellValue::render)
            .unwrap_or_default();
        content = content.push(Text::new(title).size(typography::BODY_LG));
    }

    for column in columns {
        let value = record
            .get(column.id)
            .map(crate::browser::columns::CellValue::render)
            .unwrap_or_default();
        content = content.push(
            Row::new()
                .spacing(spacing::XXS)
                .push(Text::new(format!("{}:", column.label)).size(typography::BODY_SM))
                .push(Text::new(value).size(typography::BODY_SM)),
        );
    }

    let mut footer = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if ctx.selectable {
        // The checkbox consumes its own clicks, so toggling never counts
        // as activating the card.
        let mut mark = checkbox(selected).size(typography::BODY_LG);
        if !ctx.selection.is_disabled(&record.id) {
            let id = record.id.clone();
            mark = mark.on_toggle(move |_| Message::ToggleRow(id.clone()));
        }
        footer = footer.push(mark);
    }
    footer = footer.push(iced::widget::Space::new().width(Length::Fill));
    for action in &record.actions {
        let record_id = record.id.clone();
        let pressable = button(Text::new(action.icon.clone()).size(typography::BODY))
            .on_press(Message::RowActionPressed {
                record: record_id,
                action: action.id,
            })
            .padding(spacing::XXS)
            .style(styles::button::bare);
        footer = footer.push(styles::tooltip::styled(
            pressable,
            action.label.clone(),
            iced::widget::tooltip::Position::Bottom,
        ));
    }
    content = content.push(footer);

    let style: fn(&iced::Theme) -> container::Style = if selected {
        styles::container::card_selected
    } else {
        styles::container::card
    };

    let surface = container(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(style);

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
