//! Gyroscope pointer emulation
//!
//! Integrates host gyroscope rates into an orientation, corrects drift with
//! the host accelerometer and keeps yaw inside the configured range so the
//! pointer sticks to the screen edge instead of wandering off.

use nalgebra::Vector3;

use crate::fusion::complementary_filter_gravity;
use crate::input::{ImuAccelerometerInput, ImuCursorInput, ImuGyroscopeInput};
use crate::math::{get_matrix_from_gyroscope, get_pitch, get_yaw, orthonormalize, rotate_z};
use crate::parameters::ImuCursorParams;
use crate::state::ImuCursorState;

/// Advance the gyroscope pointer orientation by one step
///
/// Pointing disabled, or no gyroscope data, resets the state. Holding the
/// recenter button makes the current pitch the new zero and turns yaw back
/// to center.
pub fn emulate_imu_cursor(
    state: &ImuCursorState,
    input: &ImuCursorInput,
    accelerometer: &ImuAccelerometerInput,
    gyroscope: &ImuGyroscopeInput,
    params: &ImuCursorParams,
    dt: f32,
) -> ImuCursorState {
    if !(dt > 0.0) {
        return *state;
    }

    let angular_velocity = match gyroscope.angular_velocity {
        Some(rate) if input.enabled => rate,
        _ => return ImuCursorState::default(),
    };

    // The world turns opposite to the device
    let gyro_rotation = get_matrix_from_gyroscope(&(-angular_velocity * dt));
    let mut rotation = gyro_rotation * state.rotation;

    if let Some(acceleration) = accelerometer.acceleration {
        if acceleration != Vector3::zeros() {
            rotation = complementary_filter_gravity(&rotation, &acceleration, params.accel_weight);
        }
    }

    let yaw = get_yaw(&rotation);
    let max_yaw = params.max_yaw_rad().max(0.0);
    let mut target_yaw = yaw.clamp(-max_yaw, max_yaw);

    let mut recentered_pitch = state.recentered_pitch;
    if input.recenter {
        recentered_pitch = get_pitch(&rotation);
        target_yaw = 0.0;
    }

    if yaw != target_yaw {
        rotation = rotate_z(target_yaw - yaw) * rotation;
    }

    ImuCursorState {
        rotation: orthonormalize(&rotation),
        recentered_pitch,
    }
}
