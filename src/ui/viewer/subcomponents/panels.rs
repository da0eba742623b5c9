// SPDX-License-Identifier: MPL-2.0
//! Info panel and like toggles.

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    /// Desktop extended info panel.
    pub info_open: bool,
    pub liked: bool,
    /// Mobile expanded details; collapses on every photo switch.
    pub mobile_info_expanded: bool,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleInfo,
    ToggleLike,
    ToggleMobileInfo,
    PhotoChanged,
}

impl State {
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleInfo => self.info_open = !self.info_open,
            Message::ToggleLike => self.liked = !self.liked,
            Message::ToggleMobileInfo => self.mobile_info_expanded = !self.mobile_info_expanded,
            Message::PhotoChanged => self.mobile_info_expanded = false,
        }
    }
}
