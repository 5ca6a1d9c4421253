// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::faded;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Dimmed layer behind the dialog.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dialog surface, derived from the theme background so it reads in both
/// light and dark modes.
pub fn dialog(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.base;

        container::Style {
            background: Some(Background::Color(faded(base.color, alpha))),
            text_color: Some(faded(base.text, alpha)),
            border: Border {
                color: faded(palette.background.strong.color, alpha),
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: Shadow {
                color: faded(shadow::LG.color, alpha * opacity::OVERLAY_MEDIUM),
                ..shadow::LG
            },
            ..Default::default()
        }
    }
}

/// Header and footer rows of a table.
pub fn table_header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Body row; odd rows get a subtle tint when `striped`.
pub fn table_row(index: usize, striped: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = if striped && index % 2 == 1 {
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette.background.weak.color
            }))
        } else {
            None
        };

        container::Style {
            background,
            border: Border {
                color: palette.background.strong.color,
                width: 0.0,
                radius: radius::NONE.into(),
            },
            ..Default::default()
        }
    }
}

/// Placeholder row shown when a table has no data.
pub fn table_empty(theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(theme.extended_palette().background.strong.color),
        ..Default::default()
    }
}

/// Outer frame of a table.
pub fn table_frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
