// SPDX-License-Identifier: MPL-2.0
//! Collapsible shell around caller-supplied search and filter widgets.
//!
//! The browser does not know what the advanced search form looks like;
//! the host builds it in its own message type and hands it over as a
//! finished element. This module only contributes the collapsible frame.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Text};
use iced::{Element, Length};

const OPEN: &str = "▾";
const CLOSED: &str = "▸";

pub struct ViewContext<'a, M> {
    pub open: bool,
    pub title: &'a str,
    /// Message the host maps the collapse toggle to.
    pub on_toggle: M,
    /// The host-built form, shown while the panel is open.
    pub content: Element<'a, M>,
}

pub fn view<'a, M: Clone + 'a>(ctx: ViewContext<'a, M>) -> Element<'a, M> {
    let glyph = if ctx.open { OPEN } else { CLOSED };

    let toggle = button(Text::new(format!("{glyph} {}", ctx.title)).size(typography::BODY))
        .on_press(ctx.on_toggle)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::bare);

    let mut panel = Column::new().spacing(spacing::XS).push(toggle);

    if ctx.open {
        panel = panel.push(
            container(ctx.content)
                .width(Length::Fixed(sizing::SEARCH_PANEL_WIDTH))
                .padding(spacing::SM)
                .style(styles::container::panel),
        );
    }

    panel.into()
}
