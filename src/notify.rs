//! Single-slot notification channel with auto-expiry

use std::time::{Duration, Instant};

/// Transient user-facing message slot.
///
/// At most one message is visible at a time. Each [`show`](Notifier::show)
/// replaces the current message and restarts the expiry window, so
/// overlapping notifications supersede the pending clear instead of
/// queueing.
#[derive(Debug)]
pub struct Notifier {
    slot: Option<(String, Instant)>,
    ttl: Duration,
}

impl Notifier {
    /// Create a notifier whose messages expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self { slot: None, ttl }
    }

    /// Replace the visible message and restart the expiry window.
    pub fn show(&mut self, message: impl Into<String>) {
        self.slot = Some((message.into(), Instant::now()));
    }

    /// The currently visible message, if it has not expired.
    pub fn current(&self) -> Option<&str> {
        match &self.slot {
            Some((message, shown_at)) if shown_at.elapsed() < self.ttl => Some(message),
            _ => None,
        }
    }

    /// Drop the visible message without waiting for expiry.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}
