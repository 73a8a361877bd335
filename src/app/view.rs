// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application shell.
//!
//! The shell contributes the header, the quick-search input, the
//! advanced-search form and the status line; everything between them is
//! the browser rendering itself.

use super::{App, Message, StatusChoice};
use crate::browser::{self, search_panel, ViewEnv};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, pick_list, scrollable, text_input, Column, Row, Text};
use iced::{Element, Length};

const QUICK_SEARCH_PLACEHOLDER: &str = "Search title or author…";

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(iced::Alignment::Center)
        .push(Text::new("Articles").size(typography::TITLE_SM))
        .push(
            text_input(QUICK_SEARCH_PLACEHOLDER, app.browser.search_text("q"))
                .on_input(|value| {
                    Message::Browser(browser::Message::Search {
                        field: "q".to_string(),
                        value,
                    })
                })
                .width(Length::Fixed(260.0)),
        );

    let advanced = search_panel::view(search_panel::ViewContext {
        open: app.search_panel_open,
        title: "Advanced search",
        on_toggle: Message::ToggleSearchPanel,
        content: advanced_form(app),
    });

    let browser = app
        .browser
        .view(ViewEnv {
            loading: app.loading,
        })
        .map(Message::Browser);

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(header)
        .push(advanced)
        .push(browser)
        .push(status_line(app))
        .width(Length::Fill);

    container(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The host-owned advanced-search form; applying it replaces the
/// browser's search criteria wholesale.
fn advanced_form(app: &App) -> Element<'_, Message> {
    let status = pick_list(
        StatusChoice::ALL.to_vec(),
        Some(app.status_draft),
        Message::StatusDraftPicked,
    )
    .width(Length::Fill)
    .text_size(typography::BODY_SM);

    let apply = button(Text::new("Apply").size(typography::BODY_SM))
        .on_press(Message::FilterApply)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::primary);
    let reset = button(Text::new("Reset").size(typography::BODY_SM))
        .on_press(Message::FilterReset)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::unselected);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new("Status").size(typography::CAPTION))
        .push(status)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(apply)
                .push(reset),
        )
        .into()
}

fn status_line(app: &App) -> Element<'_, Message> {
    let text = match &app.last_opened {
        Some(title) => format!("Last opened: {title}"),
        None => format!("{} articles in store", app.store.len()),
    };
    Text::new(text).size(typography::CAPTION).into()
}
