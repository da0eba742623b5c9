// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters and
//! hosts implement. These traits use only domain types, ensuring the viewer
//! state machine remains independent of any browser or toolkit binding.
//!
//! # Available Ports
//!
//! - [`source`]: Photo listing from a remote backend
//! - [`host`]: Callbacks into the page embedding the viewer
//! - [`loader`]: Image decoding and neighbour warming
//! - [`scheduler`]: One-shot timers
//! - [`fullscreen`]: Platform fullscreen requests
//!
//! # Design Notes
//!
//! - No `async fn`: completions come back to the viewer as messages
//! - `PhotoSource` is `Send + Sync` so it can run on a blocking pool

pub mod fullscreen;
pub mod host;
pub mod loader;
pub mod scheduler;
pub mod source;

// Re-export main types for convenience
pub use fullscreen::{Fullscreen, FullscreenError};
pub use host::ViewerHost;
pub use loader::{ImageLoader, LoadTicket};
pub use scheduler::{Scheduler, TimerId};
pub use source::{PhotoSource, SourceError};
