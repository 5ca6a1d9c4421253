// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the alert modal and table renderer.

pub mod button;
pub mod container;

use iced::Color;

/// Scales a color's alpha, used by the closing fade.
pub(crate) fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
