// SPDX-License-Identifier: MPL-2.0
//! Fullscreen port definition.
//!
//! Vendor-prefixed browser APIs and desktop window modes are hidden behind
//! [`Fullscreen`]. Requests are fire-and-forget: the platform later reports
//! the actual mode through a change event fed back into the viewer.

use thiserror::Error;

/// Errors returned when the platform refuses a fullscreen transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    /// The platform has no fullscreen support.
    #[error("fullscreen is not supported")]
    Unsupported,

    /// The request was rejected (e.g., not triggered by a user gesture).
    #[error("fullscreen request denied: {0}")]
    Denied(String),
}

/// Platform fullscreen control.
pub trait Fullscreen {
    /// Asks the platform to enter fullscreen.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected synchronously.
    fn request(&mut self) -> Result<(), FullscreenError>;

    /// Asks the platform to leave fullscreen.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected synchronously.
    fn exit(&mut self) -> Result<(), FullscreenError>;
}
