//! Bounded retry policy for rate-limited lookups.

use std::cell::RefCell;
use std::time::Duration;

/// How many times to try a lookup and how long to pause between tries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per item, including the first.
    pub max_attempts: u32,
    /// Courtesy pause after a lookup that completed (match or no match).
    pub success_delay: Duration,
    /// Pause after a lookup that errored.
    pub failure_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            success_delay: Duration::from_secs(1),
            failure_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy that never pauses, useful for local services and tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            success_delay: Duration::ZERO,
            failure_delay: Duration::ZERO,
        }
    }

    /// Pause to take after an attempt, given whether the lookup completed.
    pub fn delay_after(&self, completed: bool) -> Duration {
        if completed {
            self.success_delay
        } else {
            self.failure_delay
        }
    }
}

/// Blocks the current thread for a duration.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Real-time sleeper backed by [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Sleeper that records requested pauses instead of waiting.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    calls: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pause requested so far, in order.
    pub fn calls(&self) -> Vec<Duration> {
        self.calls.borrow().clone()
    }

    pub fn total(&self) -> Duration {
        self.calls.borrow().iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.calls.borrow_mut().push(duration);
    }
}
