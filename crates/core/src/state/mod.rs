//! Kinematic state of one emulated device
//!
//! All state is owned by the emulated device and handed to the stepping
//! functions once per frame. Nothing in this crate keeps state between calls.
//!
//! Created zeroed at power-on or reset (`Default`), rotation = identity.

use nalgebra::{Matrix3, Vector3};

use crate::math::get_pitch;

/// Linear motion of the device
///
/// `position` and `velocity` are integrated state. `acceleration` is the
/// output of the last step: each planner step recomputes it from its own
/// control decision rather than carrying it forward as an integral.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionalState {
    /// Position (m)
    pub position: Vector3<f32>,
    /// Velocity (m/s)
    pub velocity: Vector3<f32>,
    /// Acceleration produced by the last step (m/s²)
    pub acceleration: Vector3<f32>,
}

impl PositionalState {
    /// Device resting at `position`
    pub fn at_rest(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Angular motion of the device
///
/// Angle wrapping is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationalState {
    /// Euler angles `(pitch, roll, yaw)` (rad)
    pub angle: Vector3<f32>,
    /// Angular velocity (rad/s)
    pub angular_velocity: Vector3<f32>,
}

/// Full kinematic state for gestures expressed in Euler/linear terms
///
/// The two halves are advanced by independent planners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionState {
    /// Translation, advanced by the jerk-limited planner
    pub positional: PositionalState,
    /// Euler orientation, advanced by the acceleration-limited planner
    pub rotational: RotationalState,
}

/// Orientation state for gyroscope-driven pointing
///
/// Kept apart from [`MotionState`]: it is produced by continuous gyroscope
/// integration and sensor fusion, not by Euler-angle targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuCursorState {
    /// Rotation of the world around the device
    pub rotation: Matrix3<f32>,
    /// Pitch captured by the last recenter (rad)
    pub recentered_pitch: f32,
}

impl Default for ImuCursorState {
    fn default() -> Self {
        Self {
            rotation: Matrix3::identity(),
            recentered_pitch: 0.0,
        }
    }
}

impl ImuCursorState {
    /// Pitch relative to the last recenter baseline (rad)
    pub fn relative_pitch(&self) -> f32 {
        get_pitch(&self.rotation) - self.recentered_pitch
    }
}
