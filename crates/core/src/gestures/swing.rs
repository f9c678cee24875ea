//! Swing emulation
//!
//! The swing stick moves the device within a circle of `max_distance` in
//! the left/right/up/down plane plus forward/back along the pointing axis.
//! The device also twists towards the swing direction, and the twist pulls
//! it backwards as an outstretched arm would.
//!
//! Wind-up, strike and return are not explicit phases: they follow from
//! how far the current state is from the stick target. Speed grows with
//! distance from center, so swings out are fast and the return is slow.

use libm::{cosf, fabsf, fmaxf};
use nalgebra::{Vector2, Vector3};

use super::clamp_unit;
use crate::input::SwingInput;
use crate::parameters::SwingParams;
use crate::planner::{approach_angle_with_accel, approach_position_with_jerk};
use crate::state::MotionState;

/// Advance the swing motion by one step
pub fn emulate_swing(
    state: &MotionState,
    input: &SwingInput,
    params: &SwingParams,
    dt: f32,
) -> MotionState {
    if !(dt > 0.0) {
        return *state;
    }
    let max_distance = params.max_distance;
    if !(max_distance > 0.0) {
        return MotionState::default();
    }
    let twist_angle = params.twist_angle_rad();

    // Stick X/Y are device X/Z; device X+ is to the left
    let target_position = Vector3::new(
        -clamp_unit(input.x),
        -clamp_unit(input.z),
        clamp_unit(input.y),
    ) * max_distance;

    // X and Z share one speed so motion about the circle stays round
    let xz_distance = Vector2::new(target_position.x, target_position.z).norm();
    let target_distance = Vector3::new(xz_distance, fabsf(target_position.y), xz_distance);
    let speed = target_distance.map(|distance| {
        params.return_speed + (params.speed - params.return_speed) * distance / max_distance
    });

    // Jerk that reaches `speed` over one meter
    let max_jerk = speed.map(|s| 4.0 * s * s * s);

    // Twist completes in roughly the time of the swing
    let max_accel = 2.0 * twist_angle * speed.x * speed.x;
    let target_angle =
        Vector3::new(-target_position.z, 0.0, target_position.x) / max_distance * twist_angle;

    let mut rotational = approach_angle_with_accel(&state.rotational, &target_angle, max_accel, dt);
    for axis in [0, 2] {
        let angle = rotational.angle[axis];
        if fabsf(angle) > twist_angle && rotational.angular_velocity[axis] * angle > 0.0 {
            rotational.angular_velocity[axis] = 0.0;
        }
    }

    let backwards_angle = fmaxf(fabsf(rotational.angle.x), fabsf(rotational.angle.z));
    let backwards_movement = (1.0 - cosf(backwards_angle)) * max_distance;

    let mut positional = approach_position_with_jerk(
        &state.positional,
        &(target_position + Vector3::new(0.0, backwards_movement, 0.0)),
        &max_jerk,
        dt,
    );

    // Left/right/up/down stays inside the circle
    let xz_progress =
        Vector2::new(positional.position.x, positional.position.z).norm() / max_distance;
    if xz_progress > 1.0 {
        for axis in [0, 2] {
            positional.position[axis] /= xz_progress;
            positional.velocity[axis] = 0.0;
            positional.acceleration[axis] = 0.0;
        }
    }

    // Forward/back, with room for the backwards pull of the twist
    let y_limit = max_distance + backwards_movement;
    if fabsf(positional.position.y) > y_limit {
        positional.position.y = positional.position.y.clamp(-y_limit, y_limit);
        positional.velocity.y = 0.0;
        positional.acceleration.y = 0.0;
    }

    MotionState {
        positional,
        rotational,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    const DT: f32 = 1.0 / 200.0;

    fn run(state: MotionState, input: SwingInput, params: &SwingParams, steps: usize) -> MotionState {
        (0..steps).fold(state, |state, _| emulate_swing(&state, &input, params, DT))
    }

    #[test]
    fn test_swing_right_reaches_edge_and_twists() {
        let params = SwingParams::default();
        let state = run(MotionState::default(), SwingInput::new(1.0, 0.0, 0.0), &params, 200);

        let position = state.positional.position;
        assert!((position.x + 0.25).abs() < 1e-4, "x {}", position.x);
        assert!(position.z.abs() < 1e-4);
        // Full twist pulls the device back by the whole distance
        assert!((position.y - 0.25).abs() < 1e-4, "y {}", position.y);

        assert!((state.rotational.angle.z + FRAC_PI_2).abs() < 1e-4);
        assert!(state.rotational.angle.x.abs() < 1e-4);
    }

    #[test]
    fn test_swing_up_pitches() {
        let params = SwingParams::default();
        let state = run(MotionState::default(), SwingInput::new(0.0, 1.0, 0.0), &params, 200);

        assert!((state.positional.position.z - 0.25).abs() < 1e-4);
        assert!((state.rotational.angle.x + FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn test_release_returns_to_rest() {
        let params = SwingParams::default();
        let swung = run(MotionState::default(), SwingInput::new(1.0, 0.0, 0.0), &params, 200);
        assert_ne!(swung, MotionState::default());

        let state = run(swung, SwingInput::default(), &params, 400);
        assert_eq!(state.positional.position, Vector3::zeros());
        assert_eq!(state.positional.velocity, Vector3::zeros());
        assert_eq!(state.positional.acceleration, Vector3::zeros());
        assert_eq!(state.rotational.angle, Vector3::zeros());
        assert_eq!(state.rotational.angular_velocity, Vector3::zeros());
    }

    #[test]
    fn test_push_moves_away_from_twist_pull() {
        let params = SwingParams::default();

        // Pushing forward heads the opposite way to the backwards pull of a twist
        let pushed = run(MotionState::default(), SwingInput::new(0.0, 0.0, 1.0), &params, 200);
        assert!((pushed.positional.position.y + 0.25).abs() < 1e-4);
        assert_eq!(pushed.rotational.angle, Vector3::zeros());

        let twisted = run(MotionState::default(), SwingInput::new(1.0, 0.0, 0.0), &params, 200);
        assert!(twisted.positional.position.y > 0.0);
    }

    #[test]
    fn test_stays_inside_circle() {
        let params = SwingParams::default();
        let input = SwingInput::new(1.0, 1.0, -1.0);
        let mut state = MotionState::default();

        for _ in 0..300 {
            state = emulate_swing(&state, &input, &params, DT);
            let position = state.positional.position;
            let radius = Vector2::new(position.x, position.z).norm();
            assert!(radius <= params.max_distance + 1e-5, "radius {}", radius);
            assert!(position.y.abs() <= 2.0 * params.max_distance + 1e-5);
        }
    }

    #[test]
    fn test_strike_is_faster_than_return() {
        let params = SwingParams::default();
        let input = SwingInput::new(0.0, 1.0, 0.0);

        let mut state = MotionState::default();
        let mut out_steps = 0;
        while (state.positional.position.z - 0.25).abs() > 1e-3 && out_steps < 1000 {
            state = emulate_swing(&state, &input, &params, DT);
            out_steps += 1;
        }

        let mut back_steps = 0;
        while state.positional.position.z.abs() > 1e-3 && back_steps < 1000 {
            state = emulate_swing(&state, &SwingInput::default(), &params, DT);
            back_steps += 1;
        }

        assert!(out_steps < back_steps, "out {} back {}", out_steps, back_steps);
    }

    #[test]
    fn test_zero_twist_keeps_orientation() {
        let params = SwingParams {
            twist_angle: 0.0,
            ..SwingParams::default()
        };
        let state = run(MotionState::default(), SwingInput::new(-1.0, 0.5, 0.0), &params, 100);
        assert_eq!(state.rotational.angle, Vector3::zeros());
        assert!(state.positional.position.y.abs() < 1e-6);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let state = run(
            MotionState::default(),
            SwingInput::new(1.0, 0.0, 0.0),
            &SwingParams::default(),
            10,
        );
        let next = emulate_swing(&state, &SwingInput::default(), &SwingParams::default(), 0.0);
        assert_eq!(next, state);
    }
}
