// SPDX-License-Identifier: MPL-2.0
//! Queue commands and the pure transition function that folds them.

use super::request::AlertRequest;

/// A control action applied to the alert queue.
#[derive(Debug)]
pub enum Command<M> {
    /// Append a request at the tail; it becomes the displayed one.
    Open(AlertRequest<M>),
    /// Remove the tail request.
    Close,
    /// Drop every request. Fallback for unrecognized controls.
    Reset,
}

impl<M> Command<M> {
    /// Maps a control name to a command.
    ///
    /// `"open"` needs a request; any other combination that is not `"close"`
    /// yields [`Command::Reset`].
    pub fn parse(tag: &str, request: Option<AlertRequest<M>>) -> Self {
        match (tag, request) {
            ("open", Some(request)) => Command::Open(request),
            ("close", _) => Command::Close,
            _ => Command::Reset,
        }
    }
}

/// Observable state of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No pending request, modal hidden.
    Empty,
    /// `n >= 1` pending requests, modal shows request `n - 1`.
    Showing(usize),
}

impl State {
    #[must_use]
    pub fn of_len(len: usize) -> Self {
        if len == 0 {
            State::Empty
        } else {
            State::Showing(len)
        }
    }
}

/// Folds one command over the queue.
///
/// The queue only grows at the tail and only shrinks from the tail, except
/// for `Reset`, which empties it.
pub fn transition<M>(mut queue: Vec<AlertRequest<M>>, command: Command<M>) -> Vec<AlertRequest<M>> {
    match command {
        Command::Open(request) => {
            queue.push(request.finalized());
            queue
        }
        Command::Close => {
            queue.pop();
            queue
        }
        Command::Reset => Vec::new(),
    }
}
