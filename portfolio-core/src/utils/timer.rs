//! Cancellable one-shot timer.
//!
//! The host drives time: every operation receives `now`, a monotonic offset
//! from host start. A timer holds at most one deadline; scheduling again
//! replaces the pending one.

use std::time::Duration;

/// One-shot deadline owned by a state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CancellableTimer {
    deadline: Option<Duration>,
}

impl CancellableTimer {
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` after `now`, cancelling any pending deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Drops the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Time left before the deadline; zero once due.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_sub(now))
    }

    /// Consumes the deadline when it is due. Returns `true` exactly once per arming.
    pub fn fire(&mut self, now: Duration) -> bool {
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

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_once_at_deadline() {
        let mut timer = CancellableTimer::new();
        timer.schedule(ms(100), ms(200));

        assert!(!timer.fire(ms(299)));
        assert!(timer.fire(ms(300)));
        assert!(!timer.fire(ms(400)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn rescheduling_replaces_pending_deadline() {
        let mut timer = CancellableTimer::new();
        timer.schedule(ms(0), ms(200));
        timer.schedule(ms(150), ms(200));

        assert!(!timer.fire(ms(200)));
        assert_eq!(timer.deadline(), Some(ms(350)));
        assert!(timer.fire(ms(350)));
    }

    #[test]
    fn cancel_reports_whether_pending() {
        let mut timer = CancellableTimer::new();
        assert!(!timer.cancel());
        timer.schedule(ms(0), ms(10));
        assert!(timer.cancel());
        assert!(!timer.fire(ms(100)));
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let mut timer = CancellableTimer::new();
        timer.schedule(ms(0), ms(50));
        assert_eq!(timer.remaining(ms(20)), Some(ms(30)));
        assert_eq!(timer.remaining(ms(80)), Some(Duration::ZERO));
    }
}
