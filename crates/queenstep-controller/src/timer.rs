//! Cancellable single-deadline tick timer.

use std::time::{Duration, Instant};

/// Holds at most one pending tick deadline.
///
/// This is the cooperative replacement for an event-loop timer handle:
/// `schedule` arms the deadline, `fire` consumes it once due, and
/// `cancel` disarms it synchronously: after `cancel` returns, no call to
/// `fire` can succeed until something schedules again. At most one tick
/// is ever pending because scheduling overwrites the previous deadline.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use queenstep_controller::TickTimer;
///
/// let mut timer = TickTimer::new();
/// let now = Instant::now();
///
/// timer.schedule(now, Duration::from_millis(60));
/// assert!(!timer.fire(now));
/// assert!(timer.fire(now + Duration::from_millis(60)));
/// assert!(!timer.is_scheduled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    /// Creates a timer with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay` after `now`, replacing any pending
    /// deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarms the timer. Returns true if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns true while a deadline is pending.
    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consumes the deadline if it is due at `now`.
    ///
    /// Returns true exactly once per schedule: the tick it paces must be
    /// re-scheduled explicitly.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
