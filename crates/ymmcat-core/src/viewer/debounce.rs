//! Timer-based coalescing of search input: only the latest value is applied,
//! once `delay` has passed without another keystroke.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a new input value, replacing any pending one and restarting the timer.
    pub fn push(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some((value.into(), now + self.delay));
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.deadline()?;
        if now < due {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// Drops any pending value.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
