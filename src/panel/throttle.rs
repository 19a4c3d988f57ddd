//! Rate limiting for repeated notifications
//!
//! `Throttle` coalesces bursts of values into at most one release per
//! interval. The most recent value submitted before the deadline is the one
//! released; earlier values in the same window are dropped, never queued.
//!
//! Time is passed in by the caller so behaviour is deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Throttle<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            deadline: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval. An already scheduled release keeps its deadline.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Submit a value, replacing any pending one.
    ///
    /// Opens a new window if none is running. Returns the value right away
    /// when the window is already due (always the case for a zero interval).
    pub fn submit(&mut self, value: T, now: Instant) -> Option<T> {
        self.pending = Some(value);
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
        self.poll(now)
    }

    /// Release the pending value if its window has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// When the pending value becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without releasing it
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }
}
