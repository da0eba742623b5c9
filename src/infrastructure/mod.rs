// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`listing`]: Listing payload transforms and an on-disk [`PhotoSource`]
//! - [`timer`]: Virtual-clock and tokio-backed [`Scheduler`]s
//!
//! [`PhotoSource`]: crate::application::port::PhotoSource
//! [`Scheduler`]: crate::application::port::Scheduler

pub mod listing;
pub mod timer;

// Re-export main types for convenience
pub use listing::{ListingFileSource, ListingFormat};
pub use timer::{ManualScheduler, TokioScheduler};
