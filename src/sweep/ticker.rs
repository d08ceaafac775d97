//! Repeating Task Module
//! Frame-driven fixed-period timer with explicit start and cancel.

use std::time::{Duration, Instant};

/// Identifies one started schedule; a restart hands out a new handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle(u64);

/// Fixed-period timer polled from the UI loop.
///
/// At most one schedule is active: `start` replaces whatever was running, so
/// repeated starts never stack up extra ticks.
#[derive(Debug)]
pub struct RepeatingTask {
    period: Duration,
    next_due: Option<Instant>,
    generation: u64,
}

impl RepeatingTask {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
            generation: 0,
        }
    }

    /// Cancel any active schedule and start a fresh one; first tick is one period from `now`.
    pub fn start(&mut self, now: Instant) -> TaskHandle {
        self.cancel();
        self.generation += 1;
        self.next_due = Some(now + self.period);
        TaskHandle(self.generation)
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Handle of the active schedule.
    #[cfg(test)]
    pub fn handle(&self) -> Option<TaskHandle> {
        self.next_due.map(|_| TaskHandle(self.generation))
    }

    /// Number of ticks that fell due up to `now`; moves the deadline past them.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due || self.period.is_zero() {
            return 0;
        }

        let overdue = now - due;
        let ticks = 1 + (overdue.as_nanos() / self.period.as_nanos()) as u32;
        self.next_due = Some(due + self.period * ticks);
        ticks
    }

    /// Time left until the next tick, `None` when cancelled.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
