// SPDX-License-Identifier: MPL-2.0
//! Closing fade of the modal surface.
//!
//! Purely cosmetic: the queue is already empty while the fade runs.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Fade {
    duration: Duration,
    started_at: Option<Instant>,
    now: Option<Instant>,
}

impl Fade {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
            now: None,
        }
    }

    pub(crate) fn start(&mut self, at: Instant) {
        if self.duration.is_zero() {
            return;
        }
        self.started_at = Some(at);
        self.now = Some(at);
    }

    pub(crate) fn cancel(&mut self) {
        self.started_at = None;
        self.now = None;
    }

    /// Advances the clock. Stops the fade once it has run its course.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.now = Some(now);
        if let Some(started_at) = self.started_at {
            if now.saturating_duration_since(started_at) >= self.duration {
                self.cancel();
            }
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Surface opacity: `1.0` when the fade starts, towards `0.0` at its end.
    pub(crate) fn opacity(&self) -> f32 {
        match (self.started_at, self.now) {
            (Some(started_at), Some(now)) => {
                let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
                let total = self.duration.as_secs_f32();
                if total <= 0.0 {
                    0.0
                } else {
                    (1.0 - elapsed / total).clamp(0.0, 1.0)
                }
            }
            _ => 1.0,
        }
    }
}
