// SPDX-License-Identifier: MPL-2.0
//! Pagination footer shared by the table and card views.

use crate::browser::component::{BodyContext, Message};
use crate::browser::query::ROWS_PER_PAGE_OPTIONS;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, pick_list, Row, Space, Text};
use iced::{Element, Length};

const PREV: &str = "‹";
const NEXT: &str = "›";

pub(crate) fn view<'a>(ctx: &BodyContext<'a>) -> Element<'a, Message> {
    let pagination = ctx.pagination;

    let rows_label = Text::new(ctx.labels.rows_per_page.as_str()).size(typography::BODY_SM);
    let rows_picker = pick_list(
        ROWS_PER_PAGE_OPTIONS.to_vec(),
        Some(pagination.rows_per_page),
        Message::RowsPerPageChanged,
    )
    .padding(spacing::XXS)
    .text_size(typography::BODY_SM);

    let range = Text::new(range_label(ctx)).size(typography::BODY_SM);

    let page = pagination.current_page;
    let last_page = pagination.page_count(ctx.count) - 1;

    let mut prev = button(Text::new(PREV).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected);
    if page > 0 {
        prev = prev.on_press(Message::PageChanged(page - 1));
    }

    let mut next = button(Text::new(NEXT).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected);
    if page < last_page {
        next = next.on_press(Message::PageChanged(page + 1));
    }

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(rows_label)
        .push(rows_picker)
        .push(range)
        .push(prev)
        .push(next)
        .into()
}

/// Range text of the visible slice, e.g. `11-20 of 23`.
fn range_label(ctx: &BodyContext<'_>) -> String {
    if ctx.count == 0 {
        return format!("0-0 {} 0", ctx.labels.range_of);
    }
    let start = ctx.pagination.skip() + 1;
    let end = (ctx.pagination.skip() + ctx.pagination.rows_per_page).min(ctx.count);
    format!("{start}-{end} {} {}", ctx.labels.range_of, ctx.count)
}
