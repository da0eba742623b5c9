// SPDX-License-Identifier: MPL-2.0
//! Viewer host port definition.
//!
//! The host is the page or window embedding the viewer. It owns routing and
//! the outer photo context, so the viewer reports navigation and load
//! outcomes to it instead of acting on them.

use crate::domain::photo::PhotoRecord;

/// Callbacks from the viewer into its host.
pub trait ViewerHost {
    /// The session ended.
    fn on_close(&mut self);

    /// The viewer moved back to `index`.
    fn on_prev(&mut self, index: usize, photo: &PhotoRecord);

    /// The viewer moved forward to `index`.
    fn on_next(&mut self, index: usize, photo: &PhotoRecord);

    /// The current photo finished loading. Called at most once per photo.
    fn on_image_loaded(&mut self, _index: usize, _photo: &PhotoRecord) {}

    /// The current photo failed to load.
    fn on_image_error(&mut self, _index: usize, _photo: &PhotoRecord, _reason: &str) {}

    /// Attach (`true`) or detach (`false`) the global keyboard listener.
    fn listen_keyboard(&mut self, _active: bool) {}
}
