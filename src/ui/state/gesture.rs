// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition state
//!
//! Turns raw pointer, wheel and pinch input into viewer intents.
//!
//! # Drag classification
//!
//! While the pointer is down, a move whose horizontal displacement exceeds
//! the tap slop and dominates the vertical one marks the drag as horizontal.
//! The mark is sticky until release. On release:
//!
//! - a horizontal drag past the swipe threshold is a swipe,
//! - a drag that never left the tap slop on either axis is a tap,
//! - anything else is ignored.

use crate::config::{
    GestureConfig, DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_TAP_SLOP_PX, DEFAULT_WHEEL_ZOOM_IN,
    DEFAULT_WHEEL_ZOOM_OUT,
};
use crate::domain::ui::geometry::Point;
use crate::domain::ui::newtypes::Scale;

/// Pinch start distances below this are treated as noise, in pixels.
const MIN_PINCH_START_DISTANCE: f32 = 10.0;

/// Input device behind a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// The platform took the pointer away (scroll, system gesture).
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerKind, phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            kind,
            phase,
            position: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinchPhase {
    Start,
    Update,
    End,
}

/// Two-finger pinch input: the distance between the touch points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchEvent {
    pub phase: PinchPhase,
    pub distance: f32,
}

/// Horizontal swipe direction, named after the finger movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right: go to the previous photo.
    Right,
    /// Finger moved left: go to the next photo.
    Left,
}

/// What a completed pointer gesture means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    None,
    Swipe(SwipeDirection),
    Tap,
}

/// Recognition thresholds, in pixels and scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    pub tap_slop: f32,
    pub swipe_threshold: f32,
    pub wheel_zoom_out: f32,
    pub wheel_zoom_in: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            tap_slop: DEFAULT_TAP_SLOP_PX,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD_PX,
            wheel_zoom_out: DEFAULT_WHEEL_ZOOM_OUT,
            wheel_zoom_in: DEFAULT_WHEEL_ZOOM_IN,
        }
    }
}

impl From<&GestureConfig> for GestureThresholds {
    fn from(config: &GestureConfig) -> Self {
        Self {
            tap_slop: config.tap_slop_px,
            swipe_threshold: config.swipe_threshold_px,
            wheel_zoom_out: config.wheel_zoom_out,
            wheel_zoom_in: config.wheel_zoom_in,
        }
    }
}

impl GestureThresholds {
    /// Scale factor for a wheel step, or `None` for a purely horizontal one.
    #[must_use]
    pub fn wheel_factor(&self, delta_y: f32) -> Option<f32> {
        if delta_y > 0.0 {
            Some(self.wheel_zoom_out)
        } else if delta_y < 0.0 {
            Some(self.wheel_zoom_in)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    start: Point,
    last: Point,
    /// Largest absolute displacement seen on each axis.
    max_abs: (f32, f32),
    horizontal: bool,
}

#[derive(Debug, Clone, Copy)]
struct ActivePinch {
    baseline: Scale,
    start_distance: f32,
}

/// Tracks the pointer and pinch gestures in progress.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    drag: Option<ActiveDrag>,
    pinch: Option<ActivePinch>,
}

impl GestureTracker {
    /// Feeds a pointer event. Returns the outcome on release, `None` otherwise.
    pub fn pointer(&mut self, event: PointerEvent, thresholds: &GestureThresholds) -> GestureOutcome {
        match event.phase {
            PointerPhase::Down => {
                self.drag = Some(ActiveDrag {
                    start: event.position,
                    last: event.position,
                    max_abs: (0.0, 0.0),
                    horizontal: false,
                });
                GestureOutcome::None
            }
            PointerPhase::Move => {
                if let Some(drag) = self.drag.as_mut() {
                    let (dx, dy) = event.position.delta_from(drag.start);
                    drag.last = event.position;
                    drag.max_abs = (drag.max_abs.0.max(dx.abs()), drag.max_abs.1.max(dy.abs()));
                    if dx.abs() > thresholds.tap_slop && dx.abs() > dy.abs() {
                        drag.horizontal = true;
                    }
                }
                GestureOutcome::None
            }
            PointerPhase::Up => {
                let Some(mut drag) = self.drag.take() else {
                    return GestureOutcome::None;
                };
                let (dx, dy) = event.position.delta_from(drag.start);
                drag.max_abs = (drag.max_abs.0.max(dx.abs()), drag.max_abs.1.max(dy.abs()));
                Self::classify(&drag, dx, thresholds)
            }
            PointerPhase::Cancel => {
                self.drag = None;
                GestureOutcome::None
            }
        }
    }

    fn classify(drag: &ActiveDrag, dx: f32, thresholds: &GestureThresholds) -> GestureOutcome {
        if drag.horizontal && dx.abs() > thresholds.swipe_threshold {
            let direction = if dx > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            };
            return GestureOutcome::Swipe(direction);
        }
        if drag.max_abs.0 < thresholds.tap_slop && drag.max_abs.1 < thresholds.tap_slop {
            return GestureOutcome::Tap;
        }
        GestureOutcome::None
    }

    /// Feeds a pinch event. Returns the new absolute scale while pinching.
    ///
    /// The baseline scale is captured once at pinch start; later updates
    /// scale it by `distance / start_distance`.
    pub fn pinch(&mut self, event: PinchEvent, current: Scale) -> Option<Scale> {
        match event.phase {
            PinchPhase::Start => {
                // A pinch also ends any drag in progress.
                self.drag = None;
                self.pinch = (event.distance >= MIN_PINCH_START_DISTANCE).then_some(ActivePinch {
                    baseline: current,
                    start_distance: event.distance,
                });
                None
            }
            PinchPhase::Update => {
                let pinch = self.pinch?;
                if !event.distance.is_finite() || event.distance <= 0.0 {
                    return None;
                }
                Some(pinch.baseline.multiplied(event.distance / pinch.start_distance))
            }
            PinchPhase::End => {
                self.pinch = None;
                None
            }
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Last pointer position of the drag in progress.
    #[must_use]
    pub fn drag_position(&self) -> Option<Point> {
        self.drag.map(|drag| drag.last)
    }

    /// Drops any gesture in progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
