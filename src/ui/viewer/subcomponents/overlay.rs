// SPDX-License-Identifier: MPL-2.0
//! Chrome visibility sub-component with a single-flight hide timer.
//!
//! At most one hide timer is pending. Every show cancels the pending timer
//! before arming a new one, and a firing whose id is not the pending one is
//! stale and ignored.

use crate::application::port::scheduler::TimerId;
use crate::domain::ui::newtypes::HideDelay;

/// Overlay visibility state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Whether the viewer chrome is visible.
    pub visible: bool,
    /// The hide timer currently armed.
    pending_hide: Option<TimerId>,
}

/// Messages for the overlay sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Show now and hide after `delay`, using the fresh `timer` id.
    Show { timer: TimerId, delay: HideDelay },
    /// Hide now and drop any pending timer.
    HideNow,
    /// A timer fired.
    TimerFired(TimerId),
    /// Drop the pending timer without changing visibility.
    CancelPending,
}

/// Effects produced by overlay changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Cancel `cancel` if set, then arm `timer`. `shown` is true if the
    /// chrome was hidden before.
    Armed {
        cancel: Option<TimerId>,
        timer: TimerId,
        delay: HideDelay,
        shown: bool,
    },
    /// Cancel `cancel` if set. `changed` is true if the chrome was visible.
    Hidden { cancel: Option<TimerId>, changed: bool },
    /// The pending timer must be cancelled.
    Cancelled(TimerId),
}

impl State {
    /// Starts hidden with no timer.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Handle an overlay message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Show { timer, delay } => {
                let cancel = self.pending_hide.replace(timer);
                let shown = !self.visible;
                self.visible = true;
                Effect::Armed {
                    cancel,
                    timer,
                    delay,
                    shown,
                }
            }
            Message::HideNow => {
                let cancel = self.pending_hide.take();
                let changed = self.visible;
                self.visible = false;
                Effect::Hidden { cancel, changed }
            }
            Message::TimerFired(id) => {
                if self.pending_hide != Some(id) {
                    return Effect::None;
                }
                self.pending_hide = None;
                let changed = self.visible;
                self.visible = false;
                Effect::Hidden {
                    cancel: None,
                    changed,
                }
            }
            Message::CancelPending => self
                .pending_hide
                .take()
                .map_or(Effect::None, Effect::Cancelled),
        }
    }

    /// The hide timer currently armed, if any.
    #[must_use]
    pub fn pending_hide(&self) -> Option<TimerId> {
        self.pending_hide
    }
}
