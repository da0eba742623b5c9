// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transform**: Zoom factor
//! - **Overlay**: Chrome auto-hide delays
//! - **Gestures**: Tap/swipe thresholds and wheel factors
//! - **Device**: Mobile breakpoint and orientation debounce
//! - **Preload**: Neighbour depth and warm-set capacity
//! - **Gallery**: Page sizes

// ==========================================================================
// Transform Defaults
// ==========================================================================

/// Multiplicative step for zoom in/out.
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.2;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Auto-hide delay on pointer (non-touch) devices, in milliseconds.
pub const DEFAULT_DESKTOP_HIDE_DELAY_MS: u64 = 3000;

/// Auto-hide delay on touch devices, in milliseconds.
pub const DEFAULT_TOUCH_HIDE_DELAY_MS: u64 = 4000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Movement below which a release counts as a tap, per axis, in pixels.
pub const DEFAULT_TAP_SLOP_PX: f32 = 10.0;

/// Horizontal displacement above which a drag counts as a swipe, in pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Scale factor applied when the wheel scrolls down (away).
pub const DEFAULT_WHEEL_ZOOM_OUT: f32 = 0.9;

/// Scale factor applied when the wheel scrolls up (toward).
pub const DEFAULT_WHEEL_ZOOM_IN: f32 = 1.1;

// ==========================================================================
// Device Defaults
// ==========================================================================

/// Viewports at or below this width are treated as mobile, in pixels.
pub const DEFAULT_MOBILE_MAX_WIDTH_PX: f32 = 768.0;

/// Settle time after an orientation change before re-detecting, in milliseconds.
pub const DEFAULT_ORIENTATION_DEBOUNCE_MS: u64 = 100;

// ==========================================================================
// Preload Defaults
// ==========================================================================

/// Neighbours warmed in each direction.
pub const DEFAULT_PRELOAD_DEPTH: usize = 2;

/// Maximum number of warm URLs remembered.
pub const DEFAULT_PRELOAD_CAPACITY: usize = 64;

/// Minimum warm-set capacity.
pub const MIN_PRELOAD_CAPACITY: usize = 4;

/// Maximum warm-set capacity.
pub const MAX_PRELOAD_CAPACITY: usize = 4096;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Page sizes offered by the gallery controls.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [8, 12, 20, 40];

/// Default page size.
pub const DEFAULT_PAGE_SIZE: usize = 12;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ZOOM_FACTOR > 1.0);

    assert!(DEFAULT_DESKTOP_HIDE_DELAY_MS > 0);
    assert!(DEFAULT_TOUCH_HIDE_DELAY_MS >= DEFAULT_DESKTOP_HIDE_DELAY_MS);

    assert!(DEFAULT_TAP_SLOP_PX > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX > DEFAULT_TAP_SLOP_PX);
    assert!(DEFAULT_WHEEL_ZOOM_OUT < 1.0);
    assert!(DEFAULT_WHEEL_ZOOM_IN > 1.0);

    assert!(DEFAULT_MOBILE_MAX_WIDTH_PX > 0.0);

    assert!(MIN_PRELOAD_CAPACITY > 0);
    assert!(DEFAULT_PRELOAD_CAPACITY >= MIN_PRELOAD_CAPACITY);
    assert!(DEFAULT_PRELOAD_CAPACITY <= MAX_PRELOAD_CAPACITY);
    // A full default neighbourhood plus the current photo must fit.
    assert!(DEFAULT_PRELOAD_CAPACITY > 2 * DEFAULT_PRELOAD_DEPTH + 1);

    assert!(DEFAULT_PAGE_SIZE == PAGE_SIZE_OPTIONS[1]);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_delays_match_device_classes() {
        assert_eq!(DEFAULT_DESKTOP_HIDE_DELAY_MS, 3000);
        assert_eq!(DEFAULT_TOUCH_HIDE_DELAY_MS, 4000);
    }

    #[test]
    fn gesture_thresholds_are_ordered() {
        assert_eq!(DEFAULT_TAP_SLOP_PX, 10.0);
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_PX, 50.0);
        assert!(DEFAULT_SWIPE_THRESHOLD_PX > DEFAULT_TAP_SLOP_PX);
    }

    #[test]
    fn page_size_default_is_an_option() {
        assert!(PAGE_SIZE_OPTIONS.contains(&DEFAULT_PAGE_SIZE));
    }
}
