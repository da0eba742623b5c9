// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (pagination of the gallery)
//! - [`gallery`]: Gallery loading state and viewer entry point
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Hosts drive the viewer through the ports and messages
//!
//! # Example
//!
//! ```ignore
//! use gallery_lens::application::gallery::GalleryState;
//! use gallery_lens::infrastructure::ListingFileSource;
//!
//! let mut state = GalleryState::default();
//! state.load(Arc::new(source), "photos", &config.gallery).await;
//! ```

pub mod gallery;
pub mod port;
pub mod query;
