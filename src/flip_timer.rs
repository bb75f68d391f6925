//! Fixed-delay timer for the fun-fact flip.
//!
//! The flip card turns over, and once the delay has elapsed the new fact is
//! swapped in. The timer is polled from the UI event loop rather than
//! mutating state from another thread, so expiry is always observed on the
//! thread that owns the page state.
//!
//! # Usage
//!
//! ```no_run
//! use all_about_cats::flip_timer::FlipTimer;
//!
//! let mut timer = FlipTimer::new();
//! timer.schedule();
//!
//! // In the event loop:
//! if timer.poll_expired() {
//!     // swap in the new fact
//! }
//! ```
//!
//! Scheduling again restarts the delay. Cancelling, or dropping the timer
//! along with its view, discards a pending expiry.

use std::time::{Duration, Instant};

use crossbeam::channel::{after, Receiver, TryRecvError};

pub const FLIP_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct FlipTimer {
    delay: Duration,
    pending: Option<Receiver<Instant>>,
}

impl FlipTimer {
    pub fn new() -> Self {
        Self::with_delay(FLIP_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Starts the delay, replacing any pending one.
    pub fn schedule(&mut self) {
        if self.pending.is_some() {
            tracing::debug!("Restarting pending flip timer");
        }
        self.pending = Some(after(self.delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `true` exactly once per scheduled delay, after it has elapsed.
    pub fn poll_expired(&mut self) -> bool {
        let Some(rx) = &self.pending else {
            return false;
        };
        match rx.try_recv() {
            Ok(_) | Err(TryRecvError::Disconnected) => {
                self.pending = None;
                true
            }
            Err(TryRecvError::Empty) => false,
        }
    }
}

impl Default for FlipTimer {
    fn default() -> Self {
        Self::new()
    }
}
