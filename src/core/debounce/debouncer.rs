//! Clock-driven debounce state machine
//!
//! [`Debouncer`] holds no timers of its own. Callers pass the current
//! instant into every transition and call [`Debouncer::poll`] when the
//! deadline has passed. This keeps the emission rules testable without a
//! runtime; [`super::DebouncedValue`] drives it from a tokio timer.

use std::time::Duration;

use tokio::time::Instant;

/// Deadline used when `now + delay` does not fit in an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Debounced mirror of a value
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    source: T,
    emitted: T,
    delay: Duration,
    deadline: Option<Instant>,
}

impl<T: Clone> Debouncer<T> {
    /// Start stable, with `initial` as both the source and the emitted value
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            source: initial.clone(),
            emitted: initial,
            delay,
            deadline: None,
        }
    }

    /// Record a new source value and restart the quiet period at `now`
    pub fn set_value(&mut self, value: T, now: Instant) {
        self.source = value;
        self.deadline = Some(deadline_after(now, self.delay));
    }

    /// Change the quiet period; a pending window restarts at `now` with the new delay
    pub fn set_delay(&mut self, delay: Duration, now: Instant) {
        self.delay = delay;
        if self.deadline.is_some() {
            self.deadline = Some(deadline_after(now, delay));
        }
    }

    /// Emit the source value if the quiet period has elapsed by `now`
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.emitted = self.source.clone();
                Some(&self.emitted)
            },
            _ => None,
        }
    }

    /// Drop the pending window without emitting
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Last emitted value
    #[must_use]
    pub const fn emitted(&self) -> &T {
        &self.emitted
    }

    /// Latest value supplied by the caller
    #[must_use]
    pub const fn source(&self) -> &T {
        &self.source
    }

    /// Current quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// When the pending value will be emitted, if one is pending
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a value is waiting out its quiet period
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

fn deadline_after(now: Instant, delay: Duration) -> Instant {
    now.checked_add(delay).unwrap_or_else(|| now + FAR_FUTURE)
}
