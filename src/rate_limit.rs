//! Throttle and debounce gates driven by caller-supplied timestamps.
//!
//! Neither primitive reads the clock itself: the host loop passes `now` in,
//! which keeps them deterministic under test and free of timers to cancel.

use std::time::{Duration, Instant};

/// At most one emission per `interval`, leading edge first, latest value on the trailing edge.
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval: Duration,
    last_fired: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Offer a value. Returns it right away when the window is open; otherwise
    /// parks it (replacing any older parked value) for [`Throttle::poll`].
    pub fn call(&mut self, now: Instant, value: T) -> Option<T> {
        if self.window_open(now) {
            self.pending = None;
            self.last_fired = Some(now);
            return Some(value);
        }
        self.pending = Some(value);
        None
    }

    /// Release the parked value once the window boundary has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_none() || !self.window_open(now) {
            return None;
        }
        self.last_fired = Some(now);
        self.pending.take()
    }

    /// When the parked value becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref()?;
        self.last_fired.map(|at| at + self.interval)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any parked value and forget the last emission.
    pub fn reset(&mut self) {
        self.last_fired = None;
        self.pending = None;
    }

    fn window_open(&self, now: Instant) -> bool {
        match self.last_fired {
            None => true,
            Some(at) => now.saturating_duration_since(at) >= self.interval,
        }
    }
}

/// Fires on the first trigger, then ignores triggers until `cooldown` has elapsed.
#[derive(Debug, Clone)]
pub struct DebounceGuard {
    cooldown: Duration,
    last_fired: Option<Instant>,
}

impl DebounceGuard {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_fired: None,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn try_fire(&mut self, now: Instant) -> bool {
        if self.in_cooldown(now) {
            return false;
        }
        self.last_fired = Some(now);
        true
    }

    pub fn in_cooldown(&self, now: Instant) -> bool {
        self.last_fired
            .is_some_and(|at| now.saturating_duration_since(at) < self.cooldown)
    }

    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}
