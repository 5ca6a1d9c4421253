// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::alert;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the alert queue.
    Alert(alert::Message),
    /// Opens an alert with only a title and body; the default action closes it.
    ShowAlert,
    /// Opens a single-action notification.
    Notify,
    /// Opens three alerts at once to exercise stacking.
    ConfirmChain,
    /// A stacked alert was confirmed.
    ChainStep(usize),
    /// Asks for confirmation before deleting the row with this id.
    RequestDelete(String),
    /// Confirmed deletion of the row with this id.
    Delete(String),
    /// The deletion alert was cancelled.
    Cancelled,
    /// The notification was acknowledged.
    Acknowledged,
    /// Removes every row to show the empty state.
    ClearRows,
    /// Brings back every removed row.
    RestoreRows,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    /// The `--config-dir` override is recorded in `config::paths` instead.
    pub lang: Option<String>,
}
