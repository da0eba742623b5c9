// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state holders used by the viewer sub-components. None of them knows
//! about timers or effects; the viewer orchestrator wires them together.

pub mod device;
pub mod gesture;
pub mod preload;
pub mod transform;

// Re-export commonly used types for convenience
pub use device::{DeviceProfile, ViewportSignals};
pub use gesture::{
    GestureOutcome, GestureThresholds, GestureTracker, PinchEvent, PinchPhase, PointerEvent,
    PointerKind, PointerPhase, SwipeDirection,
};
pub use preload::{PreloadCache, PreloadConfig, PreloadStats};
pub use transform::TransformState;
