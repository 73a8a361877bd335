// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the search panel and the card filter bar.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Surface of one card in the grid view.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Card surface for a selected record, tinted with the primary color.
pub fn card_selected(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.primary.weak.color)),
        border: Border {
            color: palette.primary.strong.color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// A table row; even and odd rows alternate backgrounds.
pub fn table_row(selected: bool, even: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = if selected {
            palette.primary.weak.color
        } else if even {
            palette.background.base.color
        } else {
            palette.background.weak.color
        };

        container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        }
    }
}

/// Header row of the table view.
pub fn table_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_row_differs_from_unselected() {
        let theme = Theme::Light;
        let selected = table_row(true, true)(&theme);
        let unselected = table_row(false, true)(&theme);
        assert_ne!(selected.background, unselected.background);
    }

    #[test]
    fn alternating_rows_have_distinct_backgrounds() {
        let theme = Theme::Dark;
        let even = table_row(false, true)(&theme);
        let odd = table_row(false, false)(&theme);
        assert_ne!(even.background, odd.background);
    }
}
