// SPDX-License-Identifier: MPL-2.0
//! Scheduler adapters.
//!
//! - [`ManualScheduler`]: a virtual clock advanced explicitly. Used by tests
//!   and by the CLI replay, where time is part of the script.
//! - [`TokioScheduler`]: one tokio task per timer, aborted on cancel. Fired
//!   ids are delivered on an unbounded channel for the host loop to forward
//!   to the viewer.

use crate::application::port::scheduler::{Scheduler, TimerId};
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

// =============================================================================
// ManualScheduler
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    id: TimerId,
    deadline: Duration,
    /// Insertion order, breaks ties between equal deadlines.
    seq: u64,
}

/// Deterministic scheduler driven by a virtual clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    seq: u64,
    pending: Vec<PendingTimer>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|timer| timer.id == id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Virtual time at which `id` fires, if pending.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<Duration> {
        self.pending
            .iter()
            .find(|timer| timer.id == id)
            .map(|timer| timer.deadline)
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its deadline.
    ///
    /// Callers that react to a firing by scheduling new timers should pop one
    /// at a time so those timers are considered too.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let (position, timer) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= until)
            .min_by_key(|(_, timer)| (timer.deadline, timer.seq))
            .map(|(position, timer)| (position, *timer))?;
        self.pending.remove(position);
        self.now = self.now.max(timer.deadline);
        Some(timer.id)
    }

    /// Moves the clock forward to `to` without firing anything.
    pub fn set_now(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    /// Advances the clock by `by` and returns every timer that fired, in order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let target = self.now + by;
        let mut fired = Vec::new();
        while let Some(id) = self.pop_due(target) {
            fired.push(id);
        }
        self.set_now(target);
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, id: TimerId, delay: Duration) {
        self.cancel(id);
        self.seq += 1;
        self.pending.push(PendingTimer {
            id,
            deadline: self.now + delay,
            seq: self.seq,
        });
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|timer| timer.id != id);
    }
}

// =============================================================================
// TokioScheduler
// =============================================================================

/// Scheduler backed by tokio timers.
#[derive(Debug)]
pub struct TokioScheduler {
    handle: Handle,
    fired: mpsc::UnboundedSender<TimerId>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Creates a scheduler spawning on `handle`, plus the receiver of fired ids.
    #[must_use]
    pub fn new(handle: Handle) -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (fired, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            handle,
            fired,
            tasks: HashMap::new(),
        };
        (scheduler, receiver)
    }

    /// Number of timers not yet fired or cancelled.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, id: TimerId, delay: Duration) {
        self.tasks.retain(|_, task| !task.is_finished());
        let fired = self.fired.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the host shuts down.
            let _ = fired.send(id);
        });
        if let Some(previous) = self.tasks.insert(id, task) {
            previous.abort();
        }
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
