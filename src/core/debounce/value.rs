//! Tokio-driven debounced value
//!
//! [`DebouncedValue`] owns at most one timer task. Every change to the
//! source value or the delay aborts that task before a new one is spawned,
//! and dropping the value aborts it too. Emitted values are published on a
//! [`watch`] channel so any number of observers can follow them.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use super::Debouncer;

struct Shared<T> {
    debouncer: Debouncer<T>,
    /// Bumped on every reschedule or cancel; a timer only emits if its
    /// generation is still current.
    generation: u64,
    tx: watch::Sender<T>,
}

/// A value that follows its source only after the source has been quiet for `delay`
pub struct DebouncedValue<T> {
    shared: Arc<Mutex<Shared<T>>>,
    timer: Option<JoinHandle<()>>,
}

impl<T> DebouncedValue<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a stable debounced value emitting `initial`
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial.clone());
        Self {
            shared: Arc::new(Mutex::new(Shared {
                debouncer: Debouncer::new(initial, delay),
                generation: 0,
                tx,
            })),
            timer: None,
        }
    }

    /// Supply a new source value, restarting the quiet period.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn set_value(&mut self, value: T) {
        let (generation, deadline) = {
            let mut shared = lock(&self.shared);
            shared.debouncer.set_value(value, Instant::now());
            shared.generation += 1;
            (shared.generation, shared.debouncer.deadline())
        };
        self.reschedule(generation, deadline);
    }

    /// Change the quiet period; a pending value restarts its window with the new delay.
    ///
    /// # Panics
    ///
    /// Panics if a value is pending and this is called outside a tokio runtime.
    pub fn set_delay(&mut self, delay: Duration) {
        let pending = {
            let mut shared = lock(&self.shared);
            shared.debouncer.set_delay(delay, Instant::now());
            if shared.debouncer.is_pending() {
                shared.generation += 1;
                Some((shared.generation, shared.debouncer.deadline()))
            } else {
                None
            }
        };
        if let Some((generation, deadline)) = pending {
            self.reschedule(generation, deadline);
        }
    }

    /// Drop any pending value without emitting it
    pub fn cancel(&mut self) {
        {
            let mut shared = lock(&self.shared);
            shared.debouncer.cancel();
            shared.generation += 1;
        }
        self.abort_timer();
    }

    /// The last emitted value
    #[must_use]
    pub fn emitted(&self) -> T {
        lock(&self.shared).debouncer.emitted().clone()
    }

    /// The latest source value
    #[must_use]
    pub fn source(&self) -> T {
        lock(&self.shared).debouncer.source().clone()
    }

    /// The current quiet period
    #[must_use]
    pub fn delay(&self) -> Duration {
        lock(&self.shared).debouncer.delay()
    }

    /// Whether a value is waiting out its quiet period
    #[must_use]
    pub fn is_pending(&self) -> bool {
        lock(&self.shared).debouncer.is_pending()
    }

    /// Follow emitted values
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        lock(&self.shared).tx.subscribe()
    }

    fn reschedule(&mut self, generation: u64, deadline: Option<Instant>) {
        self.abort_timer();
        let Some(deadline) = deadline else {
            return;
        };

        let shared = Arc::clone(&self.shared);
        log::trace!("debounce timer {generation} scheduled");
        self.timer = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            let mut state = lock(&shared);
            if state.generation != generation {
                return;
            }
            if let Some(value) = state.debouncer.poll(Instant::now()) {
                let value = value.clone();
                log::debug!("debounce timer {generation} emitted");
                state.tx.send_replace(value);
            }
        }));
    }

    fn abort_timer(&mut self) {
        if let Some(timer) = self.timer.take()
            && !timer.is_finished()
        {
            log::trace!("debounce timer cancelled");
            timer.abort();
        }
    }
}

impl<T> Drop for DebouncedValue<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DebouncedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("DebouncedValue")
            .field("debouncer", &shared.debouncer)
            .field("generation", &shared.generation)
            .finish_non_exhaustive()
    }
}

fn lock<T>(shared: &Mutex<Shared<T>>) -> MutexGuard<'_, Shared<T>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}
