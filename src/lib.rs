// SPDX-License-Identifier: MPL-2.0
//! `iced_helpers` provides two reusable building blocks for Iced
//! applications: a stacked modal alert queue and a data-table renderer.
//!
//! A small demo application in [`app`] wires both together with Fluent
//! localization and user preferences.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
