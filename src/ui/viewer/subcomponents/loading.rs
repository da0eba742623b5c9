// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component.
//!
//! Each display load is identified by a [`LoadTicket`]. Completions carrying
//! any other ticket belong to a photo that is no longer current and are
//! dropped. The host hears about the current photo at most once.

use crate::application::port::loader::LoadTicket;

/// Loading state for the current photo.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Ticket of the load for the current photo.
    current: Option<LoadTicket>,
    /// Whether the current photo has finished loading.
    pub image_loaded: bool,
    /// Error reported for the current photo, if any.
    pub error: Option<String>,
    /// Whether the host has been told about the outcome.
    reported: bool,
}

/// Messages for the loading sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new display load started.
    Start(LoadTicket),
    /// The loader finished a display load.
    Loaded(LoadTicket),
    /// The loader failed a display load.
    Failed { ticket: LoadTicket, reason: String },
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The result belongs to a photo that is no longer current.
    Stale,
    /// The current photo loaded; notify the host.
    Loaded,
    /// The current photo failed; notify the host.
    Failed(String),
}

impl State {
    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start(ticket) => {
                self.current = Some(ticket);
                self.image_loaded = false;
                self.error = None;
                self.reported = false;
                Effect::None
            }
            Message::Loaded(ticket) => {
                if self.current != Some(ticket) {
                    return Effect::Stale;
                }
                if self.reported {
                    return Effect::None;
                }
                self.image_loaded = true;
                self.reported = true;
                Effect::Loaded
            }
            Message::Failed { ticket, reason } => {
                if self.current != Some(ticket) {
                    return Effect::Stale;
                }
                if self.reported {
                    return Effect::None;
                }
                self.error = Some(reason.clone());
                self.reported = true;
                Effect::Failed(reason)
            }
        }
    }

    /// Ticket of the load in progress for the current photo.
    #[must_use]
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        self.current
    }

    /// Whether the spinner should be shown, given the host's own flag.
    #[must_use]
    pub fn spinner_visible(&self, host_loading: bool) -> bool {
        !self.image_loaded || host_loading
    }
}
