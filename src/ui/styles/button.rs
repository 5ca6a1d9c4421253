// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::faded;
use crate::ui::alert::ActionStyle;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary button (main action).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    contained(theme, status, opacity::OPAQUE)
}

/// Style for an alert action button, faded by `alpha` while the dialog closes.
pub fn action(style: ActionStyle, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| match style {
        ActionStyle::Contained => contained(theme, status, alpha),
        ActionStyle::Outlined => outlined(theme, status, alpha),
        ActionStyle::Text => text_only(theme, status, alpha),
    }
}

fn contained(_theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let (bg, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };
    let text_color = if matches!(status, button::Status::Disabled) {
        palette::GRAY_400
    } else {
        WHITE
    };

    button::Style {
        background: Some(Background::Color(faded(bg, alpha))),
        text_color: faded(text_color, alpha),
        border: Border {
            color: faded(border_color, alpha),
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn outlined(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let accent = if is_light {
        palette::PRIMARY_600
    } else {
        palette::PRIMARY_400
    };

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE * alpha,
            ..accent
        })),
        _ => None,
    };
    let color = if matches!(status, button::Status::Disabled) {
        palette::GRAY_400
    } else {
        accent
    };

    button::Style {
        background,
        text_color: faded(color, alpha),
        border: Border {
            color: faded(color, alpha),
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn text_only(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let base = outlined(theme, status, alpha);
    button::Style {
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn action_styles_are_distinct() {
        let theme = Theme::Light;
        let contained = action(ActionStyle::Contained, 1.0)(&theme, button::Status::Active);
        let outlined = action(ActionStyle::Outlined, 1.0)(&theme, button::Status::Active);
        let text = action(ActionStyle::Text, 1.0)(&theme, button::Status::Active);

        assert!(contained.background.is_some());
        assert!(outlined.background.is_none());
        assert!(outlined.border.width > 0.0);
        assert_eq!(text.border.width, 0.0);
    }

    #[test]
    fn fading_lowers_text_alpha() {
        let theme = Theme::Dark;
        let opaque = action(ActionStyle::Contained, 1.0)(&theme, button::Status::Active);
        let fading = action(ActionStyle::Contained, 0.25)(&theme, button::Status::Active);

        assert!(fading.text_color.a < opaque.text_color.a);
    }
}
