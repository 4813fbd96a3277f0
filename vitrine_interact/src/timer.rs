// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual-clock timer queue.
//!
//! Everything runs on one UI thread, so timers are plain entries in a queue
//! keyed by deadline. The host advances the clock; due handles come back in
//! deadline order and the session turns them into
//! [`Signal::TimerElapsed`](crate::signal::Signal::TimerElapsed).
//!
//! Owners keep the handle they scheduled and compare it on delivery. A handle
//! that was cancelled never fires, and a handle the owner has since replaced
//! is ignored by the owner, so neither path can act on a stale cycle.
//!
//! ```
//! use core::time::Duration;
//! use vitrine_interact::timer::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let first = timers.schedule(Duration::from_millis(1000));
//! timers.cancel(first);
//! let second = timers.schedule(Duration::from_millis(1000));
//! assert_eq!(timers.advance_to(Duration::from_millis(1000)), vec![second]);
//! ```

use core::time::Duration;

/// Handle to a scheduled timer. Handles are never reused within a queue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Copy, Clone, Debug)]
struct Entry {
    handle: TimerHandle,
    deadline: Duration,
}

/// Single-threaded timer queue over a monotonic virtual clock.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    /// Empty queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value, measured from session start.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a timer `delay` from now.
    pub fn schedule(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next);
        self.next += 1;
        self.entries.push(Entry {
            handle,
            deadline: self.now.saturating_add(delay),
        });
        handle
    }

    /// Cancel a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Whether `handle` is still waiting to fire.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Number of timers waiting to fire.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Move the clock to `now` and return every handle that became due, by
    /// deadline and then by scheduling order.
    ///
    /// The clock never runs backwards; an earlier `now` fires nothing new.
    pub fn advance_to(&mut self, now: Duration) -> Vec<TimerHandle> {
        self.now = self.now.max(now);
        let mut due: Vec<Entry> = Vec::new();
        self.entries.retain(|e| {
            if e.deadline <= self.now {
                due.push(*e);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|e| (e.deadline, e.handle));
        due.into_iter().map(|e| e.handle).collect()
    }

    /// Move the clock forward by `delta`.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<TimerHandle> {
        self.advance_to(self.now.saturating_add(delta))
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
