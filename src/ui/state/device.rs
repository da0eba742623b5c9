// SPDX-License-Identifier: MPL-2.0
//! Device profile detection
//!
//! Classifies the viewport as mobile or desktop and as landscape or portrait.
//! The profile only changes how the viewer reacts to input; it never touches
//! the transform or the current index.

use crate::config::DEFAULT_MOBILE_MAX_WIDTH_PX;

/// Raw signals the host reports about its viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSignals {
    /// Viewport width in CSS pixels.
    pub width: f32,
    /// Viewport height in CSS pixels.
    pub height: f32,
    /// Whether the platform reports touch input.
    pub touch_capable: bool,
}

impl ViewportSignals {
    #[must_use]
    pub fn new(width: f32, height: f32, touch_capable: bool) -> Self {
        Self {
            width,
            height,
            touch_capable,
        }
    }

    /// A typical desktop window.
    #[must_use]
    pub fn desktop() -> Self {
        Self::new(1920.0, 1080.0, false)
    }

    /// A typical phone held upright.
    #[must_use]
    pub fn phone_portrait() -> Self {
        Self::new(390.0, 844.0, true)
    }
}

impl Default for ViewportSignals {
    fn default() -> Self {
        Self::desktop()
    }
}

/// Derived device classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    pub is_mobile: bool,
    pub is_landscape: bool,
}

impl DeviceProfile {
    /// Touch devices and narrow viewports are mobile.
    #[must_use]
    pub fn detect(signals: ViewportSignals, mobile_max_width: f32) -> Self {
        Self {
            is_mobile: signals.touch_capable || signals.width <= mobile_max_width,
            is_landscape: signals.width > signals.height,
        }
    }

    /// Detects with the default 768 px breakpoint.
    #[must_use]
    pub fn from_signals(signals: ViewportSignals) -> Self {
        Self::detect(signals, DEFAULT_MOBILE_MAX_WIDTH_PX)
    }
}
