//! Shake emulation
//!
//! While a shake button is held the device bounces between `±intensity/2`
//! on that axis. The target flips as soon as the device has moved past half
//! of it, or while it is still travelling the other way, which keeps the
//! motion a steady oscillation around the resting point.

use libm::{fabsf, fmaxf};
use nalgebra::Vector3;

use crate::input::ShakeInput;
use crate::parameters::ShakeParams;
use crate::planner::approach_position_with_jerk;
use crate::state::PositionalState;

/// Advance the shake displacement by one step
pub fn emulate_shake(
    state: &PositionalState,
    input: &ShakeInput,
    params: &ShakeParams,
    dt: f32,
) -> PositionalState {
    if !(dt > 0.0) {
        return *state;
    }

    let amplitude = params.intensity / 2.0;
    // Jerk sized so half of one travel covers the amplitude, or the current
    // displacement if larger. Released axes keep it while returning to rest.
    let half_travel_time = params.travel_time() / 2.0;
    let jerk_scale = 1.0 / (half_travel_time * half_travel_time * half_travel_time);

    let mut target = Vector3::zeros();
    let mut max_jerk = Vector3::zeros();
    for i in 0..3 {
        if input.axes.is_held(i) {
            let heading_back = state.velocity[i] < 0.0 || state.position[i] / amplitude > 0.5;
            target[i] = if heading_back { -amplitude } else { amplitude };
        }

        let half_distance = fmaxf(amplitude, fabsf(state.position[i]));
        max_jerk[i] = half_distance * jerk_scale;
    }

    approach_position_with_jerk(state, &target, &max_jerk, dt)
}
