// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal backdrop and the confirmation dialog.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimming layer behind a modal dialog.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Surface of a modal dialog.
#[must_use]
pub fn dialog(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(ext.background.base.color)),
        text_color: Some(ext.background.base.text),
        border: Border {
            color: ext.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_semi_transparent() {
        let style = backdrop(&Theme::Light);
        let Some(Background::Color(color)) = style.background else {
            panic!("Expected color background");
        };
        assert!(color.a > 0.0 && color.a < 1.0);
    }

    #[test]
    fn dialog_casts_a_shadow() {
        let style = dialog(&Theme::Dark);
        assert!(style.shadow.blur_radius > 0.0);
    }
}
