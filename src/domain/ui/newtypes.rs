// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for viewer values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Scale Bounds
// =============================================================================

/// Image scale bounds (0.1× to 5.0×).
pub mod scale_bounds {
    /// Minimum scale multiplier.
    pub const MIN: f32 = 0.1;
    /// Maximum scale multiplier.
    pub const MAX: f32 = 5.0;
    /// Identity scale.
    pub const IDENTITY: f32 = 1.0;
}

// =============================================================================
// Scale
// =============================================================================

/// Scale multiplier applied to the displayed image, always within 0.1–5.0.
///
/// Every constructor clamps, so a `Scale` obtained from any sequence of
/// zoom operations satisfies the bounds without checks at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// Unscaled (1.0×).
    pub const IDENTITY: Self = Self(scale_bounds::IDENTITY);

    /// Creates a new scale, clamping to the valid range.
    ///
    /// NaN collapses to the identity scale.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::IDENTITY;
        }
        Self(value.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the scale as a whole percentage (e.g., 1.2× → 120).
    #[must_use]
    pub fn percent(self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.0 * 100.0).round() as u32;
        percent
    }

    /// Multiplies by `factor`, clamped.
    #[must_use]
    pub fn multiplied(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }

    /// Zooms in by `factor`.
    #[must_use]
    pub fn zoom_in(self, factor: ZoomFactor) -> Self {
        self.multiplied(factor.value())
    }

    /// Zooms out by `factor`.
    #[must_use]
    pub fn zoom_out(self, factor: ZoomFactor) -> Self {
        Self::new(self.0 / factor.value())
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= scale_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= scale_bounds::MAX
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        (self.0 - scale_bounds::IDENTITY).abs() < f32::EPSILON
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Zoom factor bounds (1.01× to 4.0× per step).
pub mod zoom_factor_bounds {
    /// Minimum zoom factor per step.
    pub const MIN: f32 = 1.01;
    /// Maximum zoom factor per step.
    pub const MAX: f32 = 4.0;
    /// Default zoom factor per step.
    pub const DEFAULT: f32 = 1.2;
}

/// Multiplicative step used by zoom in/out, always strictly greater than 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(zoom_factor_bounds::MIN, zoom_factor_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(zoom_factor_bounds::DEFAULT)
    }
}

// =============================================================================
// RotationAngle
// =============================================================================

/// Accumulated rotation in 90° increments.
///
/// Unlike a normalized angle, the stored value keeps growing (450° is valid).
/// [`display_degrees`](Self::display_degrees) gives the visual angle, which is
/// congruent to the stored value mod 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(i32);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a rotation, rounding down to a 90° increment.
    #[must_use]
    pub fn new(degrees: i32) -> Self {
        Self(degrees.div_euclid(90) * 90)
    }

    /// Returns the accumulated angle in degrees.
    #[must_use]
    pub fn degrees(self) -> i32 {
        self.0
    }

    /// Returns the visual angle in `0..360`.
    #[must_use]
    pub fn display_degrees(self) -> u16 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let display = self.0.rem_euclid(360) as u16;
        display
    }

    /// Returns the visual angle in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.display_degrees()) * std::f32::consts::PI / 180.0
    }

    /// Rotates 90° clockwise. Near overflow the angle restarts from its
    /// visual value, so it stays a multiple of 90.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        match self.0.checked_add(90) {
            Some(degrees) => Self(degrees),
            None => Self(self.0.rem_euclid(360) + 90),
        }
    }

    /// Returns true if the visual angle is not zero.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.display_degrees() != 0
    }

    /// Returns true if width and height should be swapped when rendering.
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self.display_degrees(), 90 | 270)
    }
}

// =============================================================================
// HideDelay
// =============================================================================

/// Auto-hide delay bounds (0.5 to 30 seconds).
pub mod hide_delay_bounds {
    /// Minimum hide delay in milliseconds.
    pub const MIN_MS: u64 = 500;
    /// Maximum hide delay in milliseconds.
    pub const MAX_MS: u64 = 30_000;
}

/// Delay before the viewer chrome hides itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a new hide delay in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(hide_delay_bounds::MIN_MS, hide_delay_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

// =============================================================================
// PreloadDepth
// =============================================================================

/// Preload depth bounds (0 to 8 neighbours per direction).
pub mod preload_depth_bounds {
    /// Maximum neighbours preloaded in each direction.
    pub const MAX: usize = 8;
    /// Default neighbours preloaded in each direction.
    pub const DEFAULT: usize = 2;
}

/// Number of neighbours to warm in each direction. Zero disables preloading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreloadDepth(usize);

impl PreloadDepth {
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self(depth.min(preload_depth_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PreloadDepth {
    fn default() -> Self {
        Self(preload_depth_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
