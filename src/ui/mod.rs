// SPDX-License-Identifier: MPL-2.0
//! User interface state and the image viewer.
//!
//! This module follows the Elm-style "state down, messages up" pattern. No
//! rendering happens here: hosts read snapshots and feed events back in.
//!
//! # Modules
//!
//! - [`viewer`] - Image viewer session, effects and driver
//! - [`state`] - Reusable state (transform, gestures, device, preload cache)

pub mod state;
pub mod viewer;
