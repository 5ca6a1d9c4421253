// SPDX-License-Identifier: MPL-2.0
//! User interface helpers.
//!
//! Both helpers follow the Elm-style "state down, messages up" pattern and
//! stay independent of each other.
//!
//! - [`alert`] - Stacked modal alert and confirmation queue
//! - [`table`] - Data-table renderer with header, footer and empty state
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod alert;
pub mod design_tokens;
pub mod styles;
pub mod table;
pub mod theming;
