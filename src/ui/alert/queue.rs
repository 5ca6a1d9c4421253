// SPDX-License-Identifier: MPL-2.0
//! Alert queue provider.
//!
//! The `AlertQueue` owns the pending requests of one application subtree.
//! The host keeps it in its state, routes [`Message`]s to [`AlertQueue::update`]
//! and hands [`AlertHandle`]s to child components that need to raise alerts.

use super::command::{transition, Command, State};
use super::fade::Fade;
use super::handle::AlertHandle;
use super::request::{AlertAction, AlertId, AlertRequest};
use crate::config::{AlertConfig, ALERT_TICK_MS};
use iced::{event, keyboard, time, Event, Subscription};
use std::time::{Duration, Instant};

/// Messages produced by the modal surface.
#[derive(Debug, Clone)]
pub enum Message {
    /// An action button of request `id` was pressed.
    Activate { id: AlertId, index: usize },
    /// Backdrop click or Escape: close the top alert without a callback.
    Dismiss,
    /// Animation tick while the closing fade runs.
    Tick(Instant),
}

/// Stack of pending alerts; the tail is the one on screen.
#[derive(Debug)]
pub struct AlertQueue<M> {
    requests: Vec<AlertRequest<M>>,
    /// Base request of the current stack, rendered while the surface fades out.
    remembered: Option<AlertRequest<M>>,
    fade: Fade,
    dismiss_on_backdrop: bool,
}

impl<M> Default for AlertQueue<M> {
    fn default() -> Self {
        Self::new(&AlertConfig::default())
    }
}

impl<M> AlertQueue<M> {
    /// Creates an empty queue configured from the `[alert]` settings.
    pub fn new(config: &AlertConfig) -> Self {
        Self {
            requests: Vec::new(),
            remembered: None,
            fade: Fade::new(config.transition()),
            dismiss_on_backdrop: config
                .dismiss_on_backdrop
                .unwrap_or(crate::config::DEFAULT_DISMISS_ON_BACKDROP),
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        State::of_len(self.requests.len())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Whether the modal is logically open. Ignores the closing fade.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.requests.is_empty()
    }

    /// Whether the surface is still fading out after the queue emptied.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_running()
    }

    /// The request currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&AlertRequest<M>> {
        self.requests.last()
    }

    /// The content to render: the tail, or the remembered request while
    /// the queue is empty.
    #[must_use]
    pub fn displayed(&self) -> Option<&AlertRequest<M>> {
        self.requests.last().or(self.remembered.as_ref())
    }

    #[must_use]
    pub fn remembered(&self) -> Option<&AlertRequest<M>> {
        self.remembered.as_ref()
    }

    /// Pending requests in arrival order.
    #[must_use]
    pub fn requests(&self) -> &[AlertRequest<M>] {
        &self.requests
    }

    #[must_use]
    pub fn dismiss_on_backdrop(&self) -> bool {
        self.dismiss_on_backdrop
    }

    pub(super) fn fade_opacity(&self) -> f32 {
        if self.is_visible() {
            1.0
        } else {
            self.fade.opacity()
        }
    }

    /// Escape key and fade ticks; empty while nothing is on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        let keys = if self.is_visible() {
            event::listen_with(|event, status, _window| match event {
                Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) if matches!(status, event::Status::Ignored) => Some(Message::Dismiss),
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let ticks = if self.fade.is_running() {
            time::every(Duration::from_millis(ALERT_TICK_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keys, ticks])
    }
}

impl<M: Clone> AlertQueue<M> {
    /// Gives a child component access to `show`/`notify` only.
    pub fn handle(&mut self) -> AlertHandle<'_, M> {
        AlertHandle::new(self)
    }

    /// Queues a request built from optional parts; it shows immediately.
    pub fn show(
        &mut self,
        title: Option<&str>,
        body: Option<&str>,
        actions: Option<Vec<AlertAction<M>>>,
    ) {
        self.apply(Command::Open(AlertRequest::from_parts(title, body, actions)));
    }

    /// Queues a single-action alert with the default title.
    ///
    /// `label` defaults to the localized "Confirm".
    pub fn notify(&mut self, body: &str, on_activate: M, label: Option<&str>) {
        let action = match label {
            Some(label) => AlertAction::new(label),
            None => AlertAction::default(),
        }
        .on_activate(on_activate);
        self.show(None, Some(body), Some(vec![action]));
    }

    /// Queues a prebuilt request.
    pub fn push(&mut self, request: AlertRequest<M>) {
        self.apply(Command::Open(request));
    }

    /// Removes the alert on screen, revealing the previous one.
    pub fn dismiss_top(&mut self) {
        self.apply(Command::Close);
    }

    /// Drops every pending alert.
    pub fn reset(&mut self) {
        self.apply(Command::Reset);
    }

    /// Applies a command and refreshes the presentation cache.
    pub fn apply(&mut self, command: Command<M>) {
        let was_visible = self.is_visible();
        let kind = match &command {
            Command::Open(_) => "open",
            Command::Close => "close",
            Command::Reset => "reset",
        };

        let requests = std::mem::take(&mut self.requests);
        self.requests = transition(requests, command);

        if let [base] = self.requests.as_slice() {
            if self.remembered.as_ref().map(AlertRequest::id) != Some(base.id()) {
                self.remembered = Some(base.clone());
            }
        }

        if self.is_visible() {
            self.fade.cancel();
        } else if was_visible {
            self.fade.start(Instant::now());
        }

        tracing::debug!(command = kind, pending = self.requests.len(), "alert queue updated");
    }

    /// Handles a modal message.
    ///
    /// Returns the host message of the activated action, if any. The alert is
    /// dismissed before the message is returned, so the callback runs once
    /// against a queue that no longer holds its alert.
    pub fn update(&mut self, message: Message) -> Option<M> {
        match message {
            Message::Activate { id, index } => {
                if self.current().map(AlertRequest::id) != Some(id) {
                    tracing::debug!(?id, "ignoring activation of an alert not on screen");
                    return None;
                }
                let message = self
                    .current()
                    .and_then(|request| request.actions().get(index))
                    .and_then(|action| action.message().cloned());
                self.dismiss_top();
                message
            }
            Message::Dismiss => {
                if self.is_visible() {
                    self.dismiss_top();
                }
                None
            }
            Message::Tick(now) => {
                self.fade.tick(now);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::alert::request::ActionStyle;

    #[derive(Debug, Clone, PartialEq)]
    enum Host {
        Deleted,
        Acknowledged,
    }

    fn queue() -> AlertQueue<Host> {
        AlertQueue::new(&AlertConfig::default())
    }

    fn no_fade() -> AlertQueue<Host> {
        AlertQueue::new(&AlertConfig {
            dismiss_on_backdrop: Some(true),
            transition_ms: Some(0),
        })
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = queue();
        assert_eq!(queue.state(), State::Empty);
        assert!(!queue.is_visible());
        assert!(queue.displayed().is_none());
    }

    #[test]
    fn show_displays_most_recent() {
        let mut queue = queue();
        for i in 0..5 {
            queue.show(Some(&format!("title-{i}")), None, None);
            assert_eq!(queue.len(), i + 1);
            assert_eq!(
                queue.displayed().and_then(AlertRequest::raw_title),
                Some(format!("title-{i}").as_str())
            );
        }
        assert_eq!(queue.state(), State::Showing(5));
    }

    #[test]
    fn dismissal_is_lifo() {
        let mut queue = no_fade();
        let titles = ["a", "b", "c", "d"];
        for title in titles {
            queue.show(Some(title), None, None);
        }

        for expected in titles.iter().rev().skip(1) {
            queue.dismiss_top();
            assert_eq!(queue.current().and_then(AlertRequest::raw_title), Some(*expected));
        }
        queue.dismiss_top();
        assert_eq!(queue.state(), State::Empty);
    }

    #[test]
    fn notify_builds_single_action() {
        let mut queue = queue();
        queue.notify("Saved", Host::Acknowledged, Some("OK"));

        let request = queue.current().unwrap();
        assert!(request.raw_title().is_none());
        assert_eq!(request.body_text(), "Saved");
        assert_eq!(request.actions().len(), 1);
        assert_eq!(request.actions()[0].raw_label(), Some("OK"));
        assert_eq!(request.actions()[0].resolved_style(), ActionStyle::Contained);
    }

    #[test]
    fn activation_dismisses_then_returns_callback_once() {
        let mut queue = queue();
        queue.show(Some("below"), None, None);
        queue.notify("Delete?", Host::Deleted, Some("OK"));
        let id = queue.current().unwrap().id();

        let first = queue.update(Message::Activate { id, index: 0 });
        let second = queue.update(Message::Activate { id, index: 0 });

        assert_eq!(first, Some(Host::Deleted));
        assert_eq!(second, None);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().and_then(AlertRequest::raw_title), Some("below"));
    }

    #[test]
    fn activating_a_noop_action_only_dismisses() {
        let mut queue = queue();
        queue.show(None, Some("hello"), None);
        let id = queue.current().unwrap().id();

        assert_eq!(queue.update(Message::Activate { id, index: 0 }), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn stale_activation_is_ignored() {
        let mut queue = queue();
        queue.notify("first", Host::Acknowledged, None);
        let stale = queue.current().unwrap().id();
        queue.notify("second", Host::Deleted, None);

        assert_eq!(queue.update(Message::Activate { id: stale, index: 0 }), None);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn remembered_tracks_base_of_stack() {
        let mut queue = queue();
        queue.show(Some("first"), None, None);
        let first = queue.current().unwrap().id();
        assert_eq!(queue.remembered().map(AlertRequest::id), Some(first));

        queue.show(Some("second"), None, None);
        assert_eq!(queue.remembered().map(AlertRequest::id), Some(first));

        queue.dismiss_top();
        queue.dismiss_top();
        assert!(!queue.is_visible());
        assert_eq!(queue.displayed().map(AlertRequest::id), Some(first));

        queue.show(Some("third"), None, None);
        assert_eq!(queue.displayed().and_then(AlertRequest::raw_title), Some("third"));
        assert_eq!(queue.remembered().and_then(AlertRequest::raw_title), Some("third"));
    }

    #[test]
    fn reset_empties_from_any_length() {
        let mut queue = queue();
        queue.show(None, None, None);
        queue.show(None, None, None);
        queue.show(None, None, None);

        queue.apply(Command::parse("bogus", None));
        assert_eq!(queue.state(), State::Empty);
        assert!(!queue.is_visible());
    }

    #[test]
    fn emptying_starts_fade_and_open_cancels_it() {
        let mut queue = queue();
        queue.show(None, None, None);
        assert!(!queue.is_fading());

        queue.update(Message::Dismiss);
        assert!(queue.is_fading());
        assert!(!queue.is_visible());

        queue.show(None, None, None);
        assert!(!queue.is_fading());
    }

    #[test]
    fn tick_past_transition_ends_fade() {
        let mut queue = queue();
        queue.show(None, None, None);
        queue.dismiss_top();

        queue.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
        assert!(!queue.is_fading());
    }

    #[test]
    fn dismiss_on_empty_queue_is_noop() {
        let mut queue = no_fade();
        assert_eq!(queue.update(Message::Dismiss), None);
        assert_eq!(queue.state(), State::Empty);
    }

    #[test]
    fn disabled_transition_never_fades() {
        let mut queue = no_fade();
        queue.show(None, None, None);
        queue.dismiss_top();
        assert!(!queue.is_fading());
    }

    #[test]
    fn backdrop_setting_is_read_from_config() {
        let queue: AlertQueue<Host> = AlertQueue::new(&AlertConfig {
            dismiss_on_backdrop: Some(false),
            transition_ms: None,
        });
        assert!(!queue.dismiss_on_backdrop());
    }
}
