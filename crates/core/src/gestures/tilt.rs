//! Tilt emulation
//!
//! A stick in [-1, 1]² maps to pitch (forward/back) and roll (left/right).
//! Full deflection reaches the configured maximum angle.

use core::f32::consts::{PI, TAU};

use libm::{copysignf, fabsf};
use nalgebra::Vector3;

use super::clamp_unit;
use crate::input::TiltInput;
use crate::parameters::TiltParams;
use crate::planner::approach_angle_with_accel;
use crate::state::RotationalState;

/// Advance the tilt angles by one step
pub fn emulate_tilt(
    state: &RotationalState,
    input: &TiltInput,
    params: &TiltParams,
    dt: f32,
) -> RotationalState {
    if !(dt > 0.0) {
        return *state;
    }

    let max_angle = params.max_angle_rad();
    let roll = clamp_unit(input.x) * max_angle;
    let pitch = clamp_unit(input.y) * max_angle;
    let target = Vector3::new(pitch, -roll, 0.0);

    // Go the short way round
    let mut current = *state;
    for i in 0..3 {
        let angle = &mut current.angle[i];
        if fabsf(*angle - target[i]) > PI {
            *angle -= copysignf(TAU, *angle);
        }
    }

    // Reaches max_velocity after half a turn of acceleration
    let max_velocity = params.max_velocity_rad();
    let max_accel = max_velocity * max_velocity / TAU;

    approach_angle_with_accel(&current, &target, max_accel, dt)
}
