// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale**: Fallback language
//! - **Alert**: Modal queue behavior and closing transition
//! - **Table**: Table rendering options

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Alert Defaults
// ==========================================================================

/// Default duration of the closing fade once the last alert is dismissed.
pub const DEFAULT_ALERT_TRANSITION_MS: u64 = 150;

/// Longest closing fade accepted from the settings file.
pub const MAX_ALERT_TRANSITION_MS: u64 = 2_000;

/// Whether clicking outside the dialog dismisses the top alert.
pub const DEFAULT_DISMISS_ON_BACKDROP: bool = true;

/// Interval between animation ticks while the closing fade runs.
pub const ALERT_TICK_MS: u64 = 16;

// ==========================================================================
// Table Defaults
// ==========================================================================

/// Whether body rows alternate background colors.
pub const DEFAULT_TABLE_STRIPED: bool = true;
