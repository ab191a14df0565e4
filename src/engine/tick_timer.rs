//=========================================================================
// Tick Timer
//=========================================================================
//
// Fixed-interval deadline checked by the event loop without blocking.
//
// Time is passed in rather than read from the clock so the loop can be
// driven deterministically in tests.
//
//=========================================================================

use std::time::{Duration, Instant};

use log::debug;

/// Fires at most once per call when its deadline has passed.
#[derive(Debug, Clone)]
pub(crate) struct TickTimer {
    interval: Duration,
    next_due: Instant,
}

impl TickTimer {
    /// Starts a timer whose first tick is due one interval after `now`.
    pub(crate) fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    /// Returns `true` if a tick is due at `now` and schedules the next one.
    ///
    /// A loop that stalled for several intervals gets one tick, not a burst:
    /// missed deadlines are dropped and the schedule restarts from `now`.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }

        self.next_due += self.interval;
        if self.next_due <= now {
            debug!(target: "engine::tick", "Tick deadline missed, rescheduling");
            self.next_due = now + self.interval;
        }
        true
    }

    /// Time left until the next tick is due (zero if overdue).
    pub(crate) fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn does_not_fire_before_interval() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);

        assert!(!timer.fire(start));
        assert!(!timer.fire(start + Duration::from_millis(99)));
    }

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);

        assert!(timer.fire(start + INTERVAL));
        assert!(!timer.fire(start + INTERVAL), "same instant must not fire twice");
        assert!(timer.fire(start + INTERVAL * 2));
    }

    #[test]
    fn keeps_cadence_when_slightly_late() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);

        assert!(timer.fire(start + Duration::from_millis(130)));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(130)),
            Duration::from_millis(70)
        );
    }

    #[test]
    fn stall_does_not_cause_burst() {
        let start = Instant::now();
        let mut timer = TickTimer::new(INTERVAL, start);
        let late = start + Duration::from_millis(550);

        assert!(timer.fire(late));
        assert!(!timer.fire(late));
        assert_eq!(timer.remaining(late), INTERVAL);
    }

    #[test]
    fn remaining_is_zero_when_overdue() {
        let start = Instant::now();
        let timer = TickTimer::new(INTERVAL, start);

        assert_eq!(timer.remaining(start + INTERVAL * 3), Duration::ZERO);
        assert_eq!(timer.remaining(start), INTERVAL);
        assert_eq!(timer.interval(), INTERVAL);
    }
}
