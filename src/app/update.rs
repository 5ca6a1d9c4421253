// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the demo application.

use super::inventory::Inventory;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::alert::{self, ActionStyle, AlertAction, AlertQueue, AlertRequest};
use iced::Task;

/// Number of alerts opened by [`Message::ConfirmChain`].
pub const CHAIN_LENGTH: usize = 3;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub alerts: &'a mut AlertQueue<Message>,
    pub inventory: &'a mut Inventory,
    pub status: &'a mut Option<String>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Alert(alert_message) => match route_alert(ctx.alerts, alert_message) {
            Some(callback) => Task::done(callback),
            None => Task::none(),
        },
        Message::ShowAlert => {
            let title = ctx.i18n.tr("demo-heading");
            let body = ctx.i18n.tr("demo-notify-body");
            ctx.alerts.show(Some(&title), Some(&body), None);
            Task::none()
        }
        Message::Notify => {
            let body = ctx.i18n.tr("demo-notify-body");
            let label = ctx.i18n.tr("demo-notify-ok");
            ctx.alerts
                .handle()
                .notify(&body, Message::Acknowledged, Some(&label));
            Task::none()
        }
        Message::ConfirmChain => {
            let total = CHAIN_LENGTH.to_string();
            for index in 1..=CHAIN_LENGTH {
                let body = ctx.i18n.tr_with_args(
                    "demo-chain-body",
                    &[("index", &index.to_string()), ("total", &total)],
                );
                ctx.alerts.push(
                    AlertRequest::new()
                        .body(body)
                        .action(AlertAction::default().on_activate(Message::ChainStep(index))),
                );
            }
            Task::none()
        }
        Message::ChainStep(index) => {
            let status = ctx
                .i18n
                .tr_with_args("demo-chain-step", &[("index", &index.to_string())]);
            set_status(ctx, status);
            Task::none()
        }
        Message::RequestDelete(id) => {
            handle_request_delete(ctx, &id);
            Task::none()
        }
        Message::Delete(id) => {
            if let Some(item) = ctx.inventory.remove(&id) {
                tracing::info!(id = %item.id, "row deleted");
                let status = ctx.i18n.tr_with_args("demo-deleted", &[("name", &item.name)]);
                set_status(ctx, status);
            }
            Task::none()
        }
        Message::Cancelled => {
            let status = ctx.i18n.tr("demo-cancelled");
            set_status(ctx, status);
            Task::none()
        }
        Message::Acknowledged => {
            let status = ctx.i18n.tr("demo-acknowledged");
            set_status(ctx, status);
            Task::none()
        }
        Message::ClearRows => {
            ctx.inventory.clear();
            Task::none()
        }
        Message::RestoreRows => {
            ctx.inventory.restore();
            Task::none()
        }
    }
}

/// Forwards a modal message to the queue and returns the activated callback.
pub fn route_alert(alerts: &mut AlertQueue<Message>, message: alert::Message) -> Option<Message> {
    let callback = alerts.update(message);
    if let Some(callback) = &callback {
        tracing::debug!(?callback, "alert action activated");
    }
    callback
}

fn handle_request_delete(ctx: &mut UpdateContext<'_>, id: &str) {
    let Some(item) = ctx.inventory.find(id) else {
        tracing::debug!(id, "delete requested for a row that no longer exists");
        return;
    };

    let request = AlertRequest::new()
        .title(ctx.i18n.tr("demo-alert-title"))
        .body(ctx.i18n.tr_with_args("demo-alert-body", &[("name", &item.name)]))
        .action(
            AlertAction::new(ctx.i18n.tr("demo-alert-cancel"))
                .style(ActionStyle::Text)
                .on_activate(Message::Cancelled),
        )
        .action(
            AlertAction::new(ctx.i18n.tr("demo-alert-delete"))
                .on_activate(Message::Delete(item.id.clone())),
        );

    ctx.alerts.handle().push(request);
}

fn set_status(ctx: &mut UpdateContext<'_>, status: String) {
    *ctx.status = Some(status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::inventory::sample_items;
    use crate::config::{AlertConfig, Config};

    struct Fixture {
        i18n: I18n,
        alerts: AlertQueue<Message>,
        inventory: Inventory,
        status: Option<String>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                i18n: I18n::new(Some("en-US".into()), &Config::default()),
                alerts: AlertQueue::new(&AlertConfig::default()),
                inventory: Inventory::new(sample_items()),
                status: None,
            }
        }

        fn send(&mut self, message: Message) {
            let mut ctx = UpdateContext {
                i18n: &self.i18n,
                alerts: &mut self.alerts,
                inventory: &mut self.inventory,
                status: &mut self.status,
            };
            let _ = update(&mut ctx, message);
        }

        /// Activates `index` on the alert on screen and feeds back the callback.
        fn activate(&mut self, index: usize) {
            let id = self.alerts.current().map(AlertRequest::id).expect("alert on screen");
            if let Some(callback) = route_alert(&mut self.alerts, alert::Message::Activate { id, index }) {
                self.send(callback);
            }
        }
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut app = Fixture::new();
        app.send(Message::RequestDelete("sku-001".into()));

        assert_eq!(app.alerts.len(), 1);
        assert_eq!(app.inventory.items().len(), 5);

        app.activate(1);
        assert!(app.alerts.is_empty());
        assert!(app.inventory.find("sku-001").is_none());
        assert!(app.status.is_some());
    }

    #[test]
    fn cancel_keeps_row() {
        let mut app = Fixture::new();
        app.send(Message::RequestDelete("sku-003".into()));
        app.activate(0);

        assert!(app.alerts.is_empty());
        assert!(app.inventory.find("sku-003").is_some());
    }

    #[test]
    fn delete_unknown_row_opens_nothing() {
        let mut app = Fixture::new();
        app.send(Message::RequestDelete("missing".into()));
        assert!(app.alerts.is_empty());
    }

    #[test]
    fn chain_closes_in_reverse_order() {
        let mut app = Fixture::new();
        app.send(Message::ConfirmChain);
        assert_eq!(app.alerts.len(), CHAIN_LENGTH);

        app.activate(0);
        assert_eq!(app.alerts.len(), CHAIN_LENGTH - 1);
        let first_status = app.status.clone();

        app.activate(0);
        app.activate(0);
        assert!(app.alerts.is_empty());
        assert_ne!(app.status, first_status);
    }

    #[test]
    fn show_alert_uses_default_action() {
        let mut app = Fixture::new();
        app.send(Message::ShowAlert);

        let request = app.alerts.current().expect("alert on screen");
        assert_eq!(request.actions().len(), 1);
        assert_eq!(request.actions()[0].label(&app.i18n), "Confirm");
        app.activate(0);
        assert!(app.alerts.is_empty());
        assert!(app.status.is_none());
    }

    #[test]
    fn notify_reports_acknowledgement() {
        let mut app = Fixture::new();
        app.send(Message::Notify);
        app.activate(0);
        assert_eq!(app.status.as_deref(), Some("Notification acknowledged."));
    }
}
