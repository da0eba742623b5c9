// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading gallery data.
//! These services do not modify the photo sequence; they provide read-only
//! views over it.
//!
//! # Available Services
//!
//! - [`pagination`]: Page arithmetic for the grid and list (`Pagination`)

pub mod pagination;

// Re-export main types
pub use pagination::{PageLink, Pagination};
