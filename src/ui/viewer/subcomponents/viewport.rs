// SPDX-License-Identifier: MPL-2.0
//! Viewport sub-component: device profile with debounced orientation changes.
//!
//! Resizes are applied immediately. Orientation changes are applied once the
//! debounce timer fires, using the latest signals received by then.

use crate::application::port::scheduler::TimerId;
use crate::ui::state::device::{DeviceProfile, ViewportSignals};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct State {
    pub profile: DeviceProfile,
    signals: ViewportSignals,
    mobile_max_width: f32,
    debounce: Duration,
    pending_orientation: Option<TimerId>,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Resized(ViewportSignals),
    /// The device rotated; re-detect after the debounce using `timer`.
    OrientationChanged {
        signals: ViewportSignals,
        timer: TimerId,
    },
    TimerFired(TimerId),
    /// Drop the pending debounce.
    CancelPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Cancel `cancel` if set, then arm `timer`.
    Debounce {
        cancel: Option<TimerId>,
        timer: TimerId,
        delay: Duration,
    },
    ProfileChanged {
        previous: DeviceProfile,
        current: DeviceProfile,
    },
    Cancelled(TimerId),
}

impl State {
    #[must_use]
    pub fn new(signals: ViewportSignals, mobile_max_width: f32, debounce: Duration) -> Self {
        Self {
            profile: DeviceProfile::detect(signals, mobile_max_width),
            signals,
            mobile_max_width,
            debounce,
            pending_orientation: None,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Resized(signals) => {
                self.signals = signals;
                self.redetect()
            }
            Message::OrientationChanged { signals, timer } => {
                self.signals = signals;
                let cancel = self.pending_orientation.replace(timer);
                Effect::Debounce {
                    cancel,
                    timer,
                    delay: self.debounce,
                }
            }
            Message::TimerFired(id) => {
                if self.pending_orientation != Some(id) {
                    return Effect::None;
                }
                self.pending_orientation = None;
                self.redetect()
            }
            Message::CancelPending => self
                .pending_orientation
                .take()
                .map_or(Effect::None, Effect::Cancelled),
        }
    }

    fn redetect(&mut self) -> Effect {
        let previous = self.profile;
        let current = DeviceProfile::detect(self.signals, self.mobile_max_width);
        if previous == current {
            return Effect::None;
        }
        self.profile = current;
        Effect::ProfileChanged { previous, current }
    }

    #[must_use]
    pub fn signals(&self) -> ViewportSignals {
        self.signals
    }

    #[must_use]
    pub fn pending_orientation(&self) -> Option<TimerId> {
        self.pending_orientation
    }
}
