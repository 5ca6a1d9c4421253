// SPDX-License-Identifier: MPL-2.0
//! Alert request data structures.
//!
//! Optional fields are stored as given and defaulted when read. `None` means
//! "absent"; an empty string is a real value and is kept.

use crate::i18n::fluent::I18n;

/// i18n key of the title used when a request has none.
pub const DEFAULT_TITLE_KEY: &str = "alert-default-title";

/// i18n key of the label used by actions without one.
pub const DEFAULT_ACTION_KEY: &str = "alert-default-action";

/// Unique identifier for an alert request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    /// Allocates a new unique alert ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    /// Filled with the primary color.
    #[default]
    Contained,
    /// Primary-colored border, transparent fill.
    Outlined,
    /// Borderless text button.
    Text,
}

/// One button of an alert.
///
/// `on_activate` is the host message emitted after the alert is dismissed.
/// `None` is the no-op callback.
#[derive(Debug, Clone)]
pub struct AlertAction<M> {
    label: Option<String>,
    on_activate: Option<M>,
    style: Option<ActionStyle>,
}

impl<M> Default for AlertAction<M> {
    fn default() -> Self {
        Self {
            label: None,
            on_activate: None,
            style: None,
        }
    }
}

impl<M> AlertAction<M> {
    /// Creates an action with the given label and no callback.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Sets the message emitted on activation.
    #[must_use]
    pub fn on_activate(mut self, message: M) -> Self {
        self.on_activate = Some(message);
        self
    }

    #[must_use]
    pub fn style(mut self, style: ActionStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Label as given, `None` when the default applies.
    #[must_use]
    pub fn raw_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label to display, falling back to the localized "Confirm".
    pub fn label(&self, i18n: &I18n) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| i18n.tr(DEFAULT_ACTION_KEY))
    }

    #[must_use]
    pub fn resolved_style(&self) -> ActionStyle {
        self.style.unwrap_or_default()
    }

    #[must_use]
    pub fn message(&self) -> Option<&M> {
        self.on_activate.as_ref()
    }
}

/// A pending alert. Never mutated once queued.
#[derive(Debug, Clone)]
pub struct AlertRequest<M> {
    id: AlertId,
    title: Option<String>,
    body: String,
    actions: Vec<AlertAction<M>>,
}

impl<M> Default for AlertRequest<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> AlertRequest<M> {
    /// Creates a request with every field defaulted.
    pub fn new() -> Self {
        Self {
            id: AlertId::new(),
            title: None,
            body: String::new(),
            actions: Vec::new(),
        }
    }

    /// Builds a request from optional parts, the shape `show` accepts.
    ///
    /// An omitted or empty action list becomes the single default action.
    pub fn from_parts(
        title: Option<&str>,
        body: Option<&str>,
        actions: Option<Vec<AlertAction<M>>>,
    ) -> Self {
        Self {
            id: AlertId::new(),
            title: title.map(str::to_owned),
            body: body.map(str::to_owned).unwrap_or_default(),
            actions: actions.unwrap_or_default(),
        }
        .with_default_action()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Appends an action button.
    #[must_use]
    pub fn action(mut self, action: AlertAction<M>) -> Self {
        self.actions.push(action);
        self
    }

    fn with_default_action(mut self) -> Self {
        if self.actions.is_empty() {
            self.actions.push(AlertAction::default());
        }
        self
    }

    /// Ensures the request has at least one action before it is queued.
    pub(super) fn finalized(self) -> Self {
        self.with_default_action()
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    /// Title as given, `None` when the default applies.
    #[must_use]
    pub fn raw_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title to display, falling back to the localized "Notice".
    pub fn display_title(&self, i18n: &I18n) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| i18n.tr(DEFAULT_TITLE_KEY))
    }

    #[must_use]
    pub fn body_text(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn actions(&self) -> &[AlertAction<M>] {
        &self.actions
    }
}
