// SPDX-License-Identifier: MPL-2.0
//! Image loading port definition.
//!
//! Loads are asynchronous. The adapter reports the outcome of
//! [`ImageLoader::load`] back to the viewer as a message carrying the same
//! [`LoadTicket`], which lets the viewer discard results for photos that are
//! no longer current.

use std::fmt;

/// Identifies one display load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(pub u64);

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load#{}", self.0)
    }
}

/// Fetches and decodes images.
pub trait ImageLoader {
    /// Starts loading `url` for display.
    ///
    /// When `url` was already warmed the viewer marks it loaded without
    /// waiting; a signal for that ticket afterwards is ignored.
    fn load(&mut self, ticket: LoadTicket, url: &str);

    /// Warms `url` so a later display load is served from cache.
    fn preload(&mut self, url: &str);
}
