// SPDX-License-Identifier: MPL-2.0
//! Data-table renderer.
//!
//! A [`Table`] maps a typed slice into header, body and footer rows. The
//! [`layout`] pass is pure and testable on its own; the [`view`] pass turns
//! the result into iced widgets.
//!
//! # Example
//!
//! ```ignore
//! use iced_helpers::ui::table::{Cell, Row, Table};
//!
//! Table::new(&items)
//!     .head(Row::new([text("Name"), text("Qty")]))
//!     .body(|item, _| Row::new([text(&item.name), text(item.qty.to_string())]))
//!     .key(|item, _| item.id.clone())
//!     .empty(text("No items"))
//!     .view(config.table.striped())
//! ```

pub mod cell;
pub mod layout;
pub mod view;

pub use cell::{Cell, Row};
pub use layout::{BodyRow, Layout, RowKey, Table};
