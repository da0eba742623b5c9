// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any presentation framework.

pub mod geometry;
pub mod newtypes;

// Re-export commonly used types
pub use geometry::Point;
pub use newtypes::{HideDelay, PreloadDepth, RotationAngle, Scale, ZoomFactor};
