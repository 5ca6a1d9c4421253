// SPDX-License-Identifier: MPL-2.0
//! Stacked modal alert and confirmation queue.
//!
//! Alerts are shown one at a time. A new alert covers the current one; closing
//! it reveals the previous one (last in, first out). The modal is open exactly
//! while the queue holds at least one request.
//!
//! # Components
//!
//! - [`request`] - `AlertRequest` and `AlertAction` with their defaults
//! - [`command`] - `Command` and the pure `transition` fold
//! - [`queue`] - `AlertQueue` provider owning the requests
//! - [`handle`] - `AlertHandle` given to child components
//! - [`modal`] - Backdrop and dialog rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_helpers::ui::alert::{self, AlertAction, AlertQueue};
//!
//! // The host owns the provider
//! let mut alerts: AlertQueue<Message> = AlertQueue::new(&config.alert);
//!
//! // Anywhere in update()
//! alerts.notify("Saved", Message::Saved, None);
//!
//! // Route modal messages back; activated actions yield a host message
//! Message::Alert(msg) => match alerts.update(msg) {
//!     Some(next) => Task::done(next),
//!     None => Task::none(),
//! }
//!
//! // In view()
//! alert::with_alerts(content, alerts.view(&i18n).map(|l| l.map(Message::Alert)))
//! ```

pub mod command;
mod fade;
pub mod handle;
pub mod modal;
pub mod queue;
pub mod request;

pub use command::{transition, Command, State};
pub use handle::AlertHandle;
pub use modal::with_alerts;
pub use queue::{AlertQueue, Message};
pub use request::{ActionStyle, AlertAction, AlertId, AlertRequest};
