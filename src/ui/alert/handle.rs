// SPDX-License-Identifier: MPL-2.0
//! Restricted access to an [`AlertQueue`] for child components.

use super::queue::AlertQueue;
use super::request::{AlertAction, AlertRequest};

/// Borrowed view of the provider exposing only the two entry points.
///
/// ```ignore
/// fn save(&mut self, alerts: &mut AlertHandle<'_, Message>) {
///     alerts.notify(&i18n.tr("saved"), Message::Saved, None);
/// }
/// ```
#[derive(Debug)]
pub struct AlertHandle<'a, M> {
    queue: &'a mut AlertQueue<M>,
}

impl<'a, M: Clone> AlertHandle<'a, M> {
    pub(super) fn new(queue: &'a mut AlertQueue<M>) -> Self {
        Self { queue }
    }

    /// See [`AlertQueue::show`].
    pub fn show(
        &mut self,
        title: Option<&str>,
        body: Option<&str>,
        actions: Option<Vec<AlertAction<M>>>,
    ) {
        self.queue.show(title, body, actions);
    }

    /// See [`AlertQueue::notify`].
    pub fn notify(&mut self, body: &str, on_activate: M, label: Option<&str>) {
        self.queue.notify(body, on_activate, label);
    }

    /// Queues a request assembled with the [`AlertRequest`] builder.
    pub fn push(&mut self, request: AlertRequest<M>) {
        self.queue.push(request);
    }
}
