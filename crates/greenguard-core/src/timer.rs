//! Owned, testable timer handles.
//!
//! Every periodic or delayed activity in the engine is an explicit handle
//! with idempotent `start`/`stop`. Nothing here touches the wall clock: the
//! caller passes `Instant`s in, so tests can drive time synthetically and
//! cancellation is just clearing a deadline — no timer can fire after its
//! owner stopped it.

use std::time::{Duration, Instant};

/// A repeating deadline with a fixed period.
#[derive(Debug, Clone, Copy)]
pub struct Periodic {
    period: Duration,
    next_due: Option<Instant>,
}

impl Periodic {
    /// A stopped timer with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Arm the timer; the first tick is due one period from `now`.
    /// Starting a running timer is a no-op — never a duplicate schedule.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.period);
        }
    }

    /// Disarm. Idempotent; a stopped timer never fires.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// True when a tick is due at `now`; advances the deadline by one period.
    /// Fires at most once per call, so a stalled caller catches up one tick
    /// at a time instead of bursting.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(due + self.period);
                true
            }
            _ => false,
        }
    }
}

/// A one-shot deadline.
#[derive(Debug, Clone, Copy)]
pub struct Delayed {
    delay: Duration,
    due: Option<Instant>,
}

impl Delayed {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due: None }
    }

    /// Arm the one-shot. A pending one-shot is left untouched.
    pub fn start(&mut self, now: Instant) {
        if self.due.is_none() {
            self.due = Some(now + self.delay);
        }
    }

    /// Cancel without firing. Idempotent.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// True exactly once, when the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn test_periodic_fires_only_after_period() {
        let t0 = Instant::now();
        let mut timer = Periodic::new(4 * SEC);
        timer.start(t0);

        assert!(!timer.fire(t0));
        assert!(!timer.fire(t0 + 3 * SEC));
        assert!(timer.fire(t0 + 4 * SEC));
        // Next tick is due one period after the previous deadline.
        assert!(!timer.fire(t0 + 5 * SEC));
        assert!(timer.fire(t0 + 8 * SEC));
    }

    #[test]
    fn test_periodic_start_is_idempotent() {
        let t0 = Instant::now();
        let mut timer = Periodic::new(4 * SEC);
        timer.start(t0);
        // A second start must not push the deadline out or duplicate it.
        timer.start(t0 + 3 * SEC);
        assert!(timer.fire(t0 + 4 * SEC));
        assert!(!timer.fire(t0 + 4 * SEC));
    }

    #[test]
    fn test_periodic_stop_prevents_late_fire() {
        let t0 = Instant::now();
        let mut timer = Periodic::new(4 * SEC);
        timer.start(t0);
        timer.stop();
        assert!(!timer.is_running());
        assert!(!timer.fire(t0 + 60 * SEC));
        // Stopping again is harmless.
        timer.stop();
    }

    #[test]
    fn test_periodic_fires_at_most_once_per_call() {
        let t0 = Instant::now();
        let mut timer = Periodic::new(SEC);
        timer.start(t0);
        // Far in the future: still one tick per fire() call.
        assert!(timer.fire(t0 + 10 * SEC));
        assert!(timer.fire(t0 + 10 * SEC));
    }

    #[test]
    fn test_delayed_fires_exactly_once() {
        let t0 = Instant::now();
        let mut shot = Delayed::new(2 * SEC);
        shot.start(t0);
        assert!(shot.is_pending());
        assert!(!shot.fire(t0 + SEC));
        assert!(shot.fire(t0 + 2 * SEC));
        assert!(!shot.is_pending());
        assert!(!shot.fire(t0 + 10 * SEC));
    }

    #[test]
    fn test_delayed_cancel_and_restart() {
        let t0 = Instant::now();
        let mut shot = Delayed::new(2 * SEC);
        shot.start(t0);
        shot.cancel();
        assert!(!shot.fire(t0 + 10 * SEC));

        shot.start(t0 + 10 * SEC);
        assert!(shot.fire(t0 + 12 * SEC));
    }
}
