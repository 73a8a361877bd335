// SPDX-License-Identifier: MPL-2.0
//! Contextual bulk-action toolbar and the delete confirmation dialog.
//!
//! The toolbar only exists while the selection is non-empty. It shows the
//! selected count, then any caller-supplied actions, then the built-in
//! mark-as-seen and delete actions gated by their permissions. Delete
//! never fires directly; it opens the confirmation dialog first.

use crate::browser::component::{Labels, Message, ToolbarMenu};
use crate::browser::selection::SelectionModel;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, Column, Row, Space, Text};
use iced::{Element, Length};

#[derive(Clone)]
pub(crate) struct ViewContext<'a> {
    pub selection: &'a SelectionModel,
    pub can_delete: bool,
    pub can_update: bool,
    pub menus: &'a [ToolbarMenu],
    pub labels: &'a Labels,
}

pub(crate) fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if ctx.selection.is_empty() {
        return None;
    }

    let count = Text::new(format!("{} {}", ctx.selection.len(), ctx.labels.selected))
        .size(typography::BODY);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(count)
        .push(Space::new().width(Length::Fill));

    for (index, menu) in ctx.menus.iter().enumerate() {
        let pressable = button(Text::new(menu.icon.clone()).size(typography::BODY))
            .on_press(Message::CustomActionPressed(index))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::unselected);
        row = row.push(styles::tooltip::styled(
            pressable,
            menu.label.clone(),
            iced::widget::tooltip::Position::Bottom,
        ));
    }

    if ctx.can_update {
        row = row.push(
            button(Text::new(ctx.labels.mark_seen.as_str()).size(typography::BODY))
                .on_press(Message::MarkSeenPressed)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::unselected),
        );
    }

    if ctx.can_delete {
        row = row.push(
            button(Text::new(ctx.labels.delete.as_str()).size(typography::BODY))
                .on_press(Message::DeleteRequested)
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::danger),
        );
    }

    Some(
        container(row)
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::panel)
            .into(),
    )
}

/// Modal dialog asking the user to confirm the bulk delete.
pub(crate) fn confirm_dialog(selected: usize, labels: &Labels) -> Element<'_, Message> {
    let title = Text::new(labels.confirm_title.as_str()).size(typography::TITLE_SM);
    let body = Text::new(format!("{selected} {}", labels.selected)).size(typography::BODY);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(labels.confirm_cancel.as_str()).size(typography::BODY))
                .on_press(Message::DeleteCancelled)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::unselected),
        )
        .push(
            button(Text::new(labels.confirm_delete.as_str()).size(typography::BODY))
                .on_press(Message::DeleteConfirmed)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::danger),
        );

    let dialog = container(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(body)
            .push(buttons),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .style(styles::overlay::dialog);

    container(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::columns::RecordId;

    fn bar<'a>(
        selection: &'a SelectionModel,
        menus: &'a [ToolbarMenu],
        labels: &'a Labels,
    ) -> Option<Element<'a, Message>> {
        view(ViewContext {
            selection,
            can_delete: true,
            can_update: true,
            menus,
            labels,
        })
    }

    #[test]
    fn empty_selection_renders_nothing() {
        let selection = SelectionModel::new(None);
        let labels = Labels::default();
        assert!(bar(&selection, &[], &labels).is_none());
    }

    #[test]
    fn first_selected_row_makes_the_toolbar_appear() {
        let mut selection = SelectionModel::new(None);
        let labels = Labels::default();
        let menus = [ToolbarMenu::new("Export selection", "⇩")];

        selection.toggle(RecordId::new("r1"));
        assert!(bar(&selection, &menus, &labels).is_some());

        selection.toggle(RecordId::new("r1"));
        assert!(bar(&selection, &menus, &labels).is_none());
    }
}
