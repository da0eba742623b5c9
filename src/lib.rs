// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is the headless core of a photo gallery and its full-screen
//! image viewer.
//!
//! Photos are listed from a remote source, paged into a grid and opened in a
//! viewer that merges pointer, keyboard, resize, timer and image-load events
//! into one consistent state. Nothing here renders: hosts feed events in as
//! [`ui::viewer::Message`]s and execute the returned [`ui::viewer::Effect`]s.

#![doc(html_root_url = "https://docs.rs/gallery_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
