// SPDX-License-Identifier: MPL-2.0
//! Fullscreen sub-component.
//!
//! Toggling only issues a request. `is_fullscreen` follows the platform
//! change event, so a denied request leaves the state untouched.

/// Fullscreen state as last reported by the platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    pub is_fullscreen: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Toggle,
    /// The platform entered (`true`) or left (`false`) fullscreen.
    Changed(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Request,
    Exit,
    Changed(bool),
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => {
                if self.is_fullscreen {
                    Effect::Exit
                } else {
                    Effect::Request
                }
            }
            Message::Changed(active) => {
                if self.is_fullscreen == active {
                    return Effect::None;
                }
                self.is_fullscreen = active;
                Effect::Changed(active)
            }
        }
    }
}
