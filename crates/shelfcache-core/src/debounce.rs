//! Debounced callbacks driven by an explicit clock.
//!
//! Rapid input (typing a search term, editing a price bound) should cause
//! one re-render once the user pauses, not one per keystroke. `Debouncer`
//! keeps the latest value and releases it after `delay` has passed without
//! another trigger. It never sleeps or spawns; the caller polls it from its
//! own loop with the current instant.

use std::time::{Duration, Instant};

/// Delay before a search term is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Delay before edited price bounds are applied.
pub const PRICE_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the delay from `now`.
    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its delay has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, due)) if now >= due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Take the pending value immediately, regardless of the delay.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(SEARCH_DEBOUNCE);
        debouncer.trigger("d", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), Some("d"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_rapid_triggers_coalesce() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(SEARCH_DEBOUNCE);
        debouncer.trigger("d", start);
        debouncer.trigger("d2", start + Duration::from_millis(200));
        debouncer.trigger("d20", start + Duration::from_millis(400));

        // The first deadline has passed, but it was superseded
        assert_eq!(debouncer.poll(start + Duration::from_millis(600)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(700)), Some("d20"));
    }

    #[test]
    fn test_flush_and_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(PRICE_DEBOUNCE);
        debouncer.trigger(1, start);
        assert_eq!(debouncer.flush(), Some(1));
        assert_eq!(debouncer.flush(), None);

        debouncer.trigger(2, start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + PRICE_DEBOUNCE), None);
    }
}
