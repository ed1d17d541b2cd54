//! One-shot notifications shared between the pool and its render worker.

use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// A latch that can be fired once and awaited by any number of threads.
#[derive(Debug, Default)]
pub(crate) struct Latch {
    fired: Mutex<bool>,
    cond: Condvar,
}

impl Latch {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Fire the latch, waking every waiter. Returns `false` if it had already fired.
    pub(crate) fn fire(&self) -> bool {
        let mut fired = self.fired.lock();
        if *fired {
            return false;
        }
        *fired = true;
        self.cond.notify_all();
        true
    }

    pub(crate) fn is_fired(&self) -> bool {
        *self.fired.lock()
    }

    /// Block until the latch fires.
    pub(crate) fn wait(&self) {
        let mut fired = self.fired.lock();
        while !*fired {
            self.cond.wait(&mut fired);
        }
    }

    /// Block until the latch fires or `timeout` elapses, returning whether it fired.
    pub(crate) fn wait_timeout(&self, timeout: Duration) -> bool {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.wait();
            return true;
        };
        let mut fired = self.fired.lock();
        while !*fired {
            if self.cond.wait_until(&mut fired, deadline).timed_out() {
                break;
            }
        }
        *fired
    }
}

/// Cancellation request for the render worker.
///
/// The compare-and-swap on `requested` elects a single closer, so the latch
/// transitions from open to closed exactly once however many threads ask.
#[derive(Debug, Default)]
pub(crate) struct Cancellation {
    requested: AtomicBool,
    latch: Latch,
}

impl Cancellation {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Returns `true` only for the caller that closed the signal.
    pub(crate) fn request(&self) -> bool {
        if self
            .requested
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        self.latch.fire();
        true
    }

    /// Wait up to `timeout` for a cancellation request.
    pub(crate) fn wait_timeout(&self, timeout: Duration) -> bool {
        self.latch.wait_timeout(timeout)
    }
}
