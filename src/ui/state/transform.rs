// SPDX-License-Identifier: MPL-2.0
//! Image transform state
//!
//! Holds the scale and accumulated rotation applied to the current photo.
//! Every operation goes through the clamped [`Scale`] newtype, so the scale
//! stays within its bounds whatever sequence of zoom, pinch and wheel input
//! produced it.

use crate::domain::ui::newtypes::{RotationAngle, Scale, ZoomFactor};

/// Scale and rotation of the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformState {
    pub scale: Scale,
    pub rotation: RotationAngle,
}

impl TransformState {
    /// Multiplies the scale by `factor`.
    pub fn zoom_in(&mut self, factor: ZoomFactor) {
        self.scale = self.scale.zoom_in(factor);
    }

    /// Divides the scale by `factor`.
    pub fn zoom_out(&mut self, factor: ZoomFactor) {
        self.scale = self.scale.zoom_out(factor);
    }

    /// Sets an absolute scale, clamped.
    pub fn set_scale(&mut self, value: f32) {
        self.scale = Scale::new(value);
    }

    /// Multiplies the current scale by an arbitrary factor (wheel steps).
    pub fn multiply(&mut self, factor: f32) {
        self.scale = self.scale.multiplied(factor);
    }

    /// Adds a quarter turn clockwise.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.rotate_clockwise();
    }

    /// Back to unscaled and unrotated.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_identity() && self.rotation == RotationAngle::ZERO
    }

    /// CSS `transform` value. Uses the accumulated angle so animated
    /// rotations always turn clockwise.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "scale({}) rotate({}deg)",
            self.scale.value(),
            self.rotation.degrees()
        )
    }
}
