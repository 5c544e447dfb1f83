//! Debounce window tracking
//!
//! Tracks when a burst of writes started and when it last grew. A flush is
//! due after a quiet gap, or unconditionally once the burst has been open
//! for the max-wait ceiling.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct DebounceWindow {
    first_write: Option<Instant>,
    last_write: Option<Instant>,
}

impl DebounceWindow {
    /// Record a staged write at `now`. The burst start is kept from the
    /// first write so the max-wait ceiling cannot be pushed back.
    pub(crate) fn record(&mut self, now: Instant) {
        self.first_write.get_or_insert(now);
        self.last_write = Some(now);
    }

    /// Whether a flush should fire at `now`.
    pub(crate) fn due(&self, now: Instant, quiet: Duration, max_wait: Duration) -> bool {
        let (Some(first), Some(last)) = (self.first_write, self.last_write) else {
            return false;
        };
        now.saturating_duration_since(last) >= quiet
            || now.saturating_duration_since(first) >= max_wait
    }

    pub(crate) fn is_open(&self) -> bool {
        self.first_write.is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.first_write = None;
        self.last_write = None;
    }
}
