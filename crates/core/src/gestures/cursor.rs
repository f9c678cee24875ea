//! Pointer cursor emulation
//!
//! Places the device in front of the sensor bar and turns it so the
//! pointer lands on the requested screen position. A hidden pointer moves
//! the device far behind the sensor bar, where the camera sees nothing.

use core::f32::consts::TAU;

use nalgebra::Vector3;

use super::clamp_unit;
use crate::input::CursorInput;
use crate::parameters::CursorParams;
use crate::planner::approach_angle_with_accel;
use crate::state::{MotionState, PositionalState, RotationalState};

/// Distance from the sensor bar while pointing (meters)
pub const NEUTRAL_DISTANCE: f32 = 2.0;

/// Forward offset used while the pointer is hidden (meters)
pub const HIDDEN_DISTANCE: f32 = -1000.0;

/// Angular acceleration limit while following the pointer (rad/s²)
///
/// Responsive enough to look instant without the gyroscope readings of an
/// attached motion extension falling out of step.
const MAX_ACCEL: f32 = TAU * 8.0;

/// Advance the pointing orientation by one step
pub fn emulate_cursor(
    state: &MotionState,
    input: &CursorInput,
    params: &CursorParams,
    dt: f32,
) -> MotionState {
    if !(dt > 0.0) {
        return *state;
    }

    let Some(pointer) = input.pointer else {
        return MotionState {
            positional: PositionalState::at_rest(hidden_position()),
            rotational: RotationalState::default(),
        };
    };

    let was_hidden = state.positional.position.y < 0.0;

    let positional = PositionalState::at_rest(Vector3::new(0.0, NEUTRAL_DISTANCE, -params.height()));

    let yaw_scale = (params.total_yaw / 2.0).to_radians();
    let pitch_scale = (params.total_pitch / 2.0).to_radians();
    let target_angle = Vector3::new(
        pitch_scale * -clamp_unit(pointer.y),
        0.0,
        yaw_scale * -clamp_unit(pointer.x),
    );

    let rotational = if was_hidden {
        RotationalState {
            angle: target_angle,
            angular_velocity: Vector3::zeros(),
        }
    } else {
        approach_angle_with_accel(&state.rotational, &target_angle, MAX_ACCEL, dt)
    };

    MotionState {
        positional,
        rotational,
    }
}

/// Device position while the pointer is hidden
pub fn hidden_position() -> Vector3<f32> {
    Vector3::new(0.0, HIDDEN_DISTANCE, 0.0)
}
