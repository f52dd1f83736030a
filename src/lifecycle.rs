//! One-shot lifecycle primitives.
//!
//! - [`Once`]: runs an effect at most once, however many threads call it
//! - [`ShutdownSignal`]: a latch that is closed once and can be waited on

use parking_lot::{Condvar, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Runs an effect exactly once.
///
/// The `done` flag gives a lock-free fast path for repeat calls. The mutex
/// serializes the first callers, so a caller that returns from
/// [`Once::run_once`] always observes the effect as completed.
#[derive(Debug, Default)]
pub struct Once {
    done: AtomicBool,
    lock: Mutex<()>,
}

impl Once {
    /// Create a guard whose effect has not run yet
    pub fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
            lock: Mutex::new(()),
        }
    }

    /// Run `effect` if no previous call has.
    ///
    /// Returns `true` if this call ran the effect.
    pub fn run_once<F: FnOnce()>(&self, effect: F) -> bool {
        if self.done.load(Ordering::Acquire) {
            return false;
        }

        let _guard = self.lock.lock();
        if self.done.load(Ordering::Acquire) {
            return false;
        }
        effect();
        self.done.store(true, Ordering::Release);
        true
    }

    /// Whether the effect has completed
    pub fn has_run(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

/// Completion latch closed on shutdown.
///
/// Closing is idempotent; waiters are released on the first close and any
/// wait started afterwards returns immediately.
#[derive(Debug, Default)]
pub struct ShutdownSignal {
    closed: Mutex<bool>,
    cond: Condvar,
}

impl ShutdownSignal {
    /// Create an open signal
    pub fn new() -> Self {
        Self {
            closed: Mutex::new(false),
            cond: Condvar::new(),
        }
    }

    /// Close the signal and wake all waiters.
    pub fn close(&self) {
        let mut closed = self.closed.lock();
        *closed = true;
        self.cond.notify_all();
    }

    /// Whether the signal has been closed
    pub fn is_closed(&self) -> bool {
        *self.closed.lock()
    }

    /// Block until the signal is closed.
    pub fn wait(&self) {
        let mut closed = self.closed.lock();
        while !*closed {
            self.cond.wait(&mut closed);
        }
    }

    /// Block until the signal is closed or `timeout` elapses.
    ///
    /// Returns `true` if the signal was closed.
    /// A timeout too large to express as a deadline waits without limit.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.wait();
            return true;
        };
        let mut closed = self.closed.lock();
        while !*closed {
            if self.cond.wait_until(&mut closed, deadline).timed_out() {
                break;
            }
        }
        *closed
    }
}
