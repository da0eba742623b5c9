// SPDX-License-Identifier: MPL-2.0
//! Timer port definition.
//!
//! The viewer never sleeps. It asks a [`Scheduler`] to fire a [`TimerId`]
//! after a delay and receives the firing back as a message. Ids are never
//! reused within a session, so a late firing is recognizable as stale.

use std::fmt;
use std::time::Duration;

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// One-shot timer service.
pub trait Scheduler {
    /// Fires `id` once after `delay`.
    fn schedule(&mut self, id: TimerId, delay: Duration);

    /// Cancels `id`. Cancelling an unknown or already fired id is a no-op.
    fn cancel(&mut self, id: TimerId);
}
