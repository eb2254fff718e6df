//! Search debouncing
//!
//! Each edit of the search box pushes the deadline back; the search runs
//! once the user has stopped typing for the configured delay. Time is
//! passed in explicitly so the event loop drives it from ticks.

use std::time::{Duration, Instant};

/// Trailing-edge debouncer
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Restart the countdown from `now`
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending run
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(start);
        assert!(debouncer.is_pending());
        assert!(!debouncer.fire_if_due(start + Duration::from_millis(999)));
        assert!(debouncer.fire_if_due(start + DELAY));
        assert!(!debouncer.fire_if_due(start + DELAY * 2));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_pushes_deadline_back() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(start);
        debouncer.schedule(start + Duration::from_millis(600));

        assert!(!debouncer.fire_if_due(start + DELAY));
        assert!(debouncer.fire_if_due(start + Duration::from_millis(1600)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(start);
        debouncer.cancel();
        assert!(!debouncer.fire_if_due(start + DELAY * 5));
    }

    #[test]
    fn test_idle_never_fires() {
        let mut debouncer = Debouncer::new(DELAY);
        assert!(!debouncer.fire_if_due(Instant::now()));
    }
}
