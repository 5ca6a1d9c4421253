// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::ui::alert::AlertQueue;
use iced::Subscription;

/// Escape-to-dismiss and fade ticks, only while an alert is on screen or
/// closing.
pub fn create_alert_subscription(alerts: &AlertQueue<Message>) -> Subscription<Message> {
    alerts.subscription().map(Message::Alert)
}
