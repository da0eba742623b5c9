// SPDX-License-Identifier: MPL-2.0
//! Full-screen image viewer.
//!
//! The viewer is a pure state machine ([`ViewerSession`]) that turns
//! messages into effects, plus a [`ViewerDriver`] that executes those effects
//! against the platform ports.
//!
//! # Modules
//!
//! - [`component`] - Session orchestrator, messages, effects and snapshot
//! - [`driver`] - Effect execution against scheduler, loader and host
//! - [`keyboard`] - Key names and shortcut mapping
//! - [`settings`] - Resolved viewer settings
//! - [`subcomponents`] - Overlay, loading, navigation, viewport and panels

pub mod component;
pub mod driver;
pub mod keyboard;
pub mod settings;
pub mod subcomponents;

pub use component::{Effect, Message, ViewerSession, ViewerSnapshot};
pub use driver::{Ports, ViewerDriver};
pub use keyboard::{shortcut_for, Key, Shortcut};
pub use settings::ViewerSettings;
pub use subcomponents::navigation::{Direction, NavigationOutcome};
