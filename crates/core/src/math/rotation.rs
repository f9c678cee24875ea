//! Rotation matrices and Euler angle conversions
//!
//! All matrices here are "rotation of the world around the device" and share
//! one Euler convention:
//!
//! ```text
//! R = Rz(yaw) * Rx(pitch) * Ry(roll)       angle = (pitch, roll, yaw)
//! ```
//!
//! Pitch is the middle rotation, so extraction is exact for pitch in
//! (-90°, 90°). At ±90° pitch (gimbal lock) roll and yaw rotate about the
//! same axis; extraction then reports roll = 0 and folds the combined
//! rotation into yaw. The reconstructed matrix is still the original one.

use libm::{acosf, atan2f, sqrtf};
use nalgebra::{Matrix3, Rotation3, Unit, UnitQuaternion, Vector3};

use crate::constants::{GIMBAL_LOCK_EPSILON, NORMALIZE_EPSILON};

/// Rotation about the X axis (pitch)
pub fn rotate_x(angle: f32) -> Matrix3<f32> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), angle).into_inner()
}

/// Rotation about the Y axis (roll)
pub fn rotate_y(angle: f32) -> Matrix3<f32> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), angle).into_inner()
}

/// Rotation about the Z axis (yaw)
pub fn rotate_z(angle: f32) -> Matrix3<f32> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), angle).into_inner()
}

/// Rotation of `angle` radians about an arbitrary unit axis
pub fn rotate_about_axis(angle: f32, axis: &Unit<Vector3<f32>>) -> Matrix3<f32> {
    Rotation3::from_axis_angle(axis, angle).into_inner()
}

/// Estimate orientation from accelerometer data
///
/// Returns the shortest rotation taking +Z onto the measured gravity
/// direction, so `R * (0, 0, 1)` is the normalized `accel`. Yaw is
/// unobservable from gravity and is always zero.
///
/// Degenerate input:
/// - near-zero or non-finite `accel`: identity
/// - `accel` along -Z: half turn about +Y
pub fn get_matrix_from_acceleration(accel: &Vector3<f32>) -> Matrix3<f32> {
    let length = accel.norm();
    if !(length > NORMALIZE_EPSILON) || !length.is_finite() {
        return Matrix3::identity();
    }

    let direction = accel / length;
    let up = Vector3::z();

    let angle = acosf(up.dot(&direction).clamp(-1.0, 1.0));
    let axis = up.cross(&direction);

    // Axis vanishes when the device is perfectly upright or upside down.
    let axis = if axis.norm() > NORMALIZE_EPSILON {
        Unit::new_normalize(axis)
    } else {
        Vector3::y_axis()
    };

    rotate_about_axis(angle, &axis)
}

/// Rotation matrix for one step of gyroscope data
///
/// `gyro` is a rotation vector (rate * time): its direction is the axis and
/// its length the angle. Uses the exponential map rather than composing
/// Euler angles, so large rates do not run into gimbal lock.
pub fn get_matrix_from_gyroscope(gyro: &Vector3<f32>) -> Matrix3<f32> {
    Rotation3::new(*gyro).into_inner()
}

/// Build a rotation matrix from Euler angles `(pitch, roll, yaw)`
pub fn get_rotational_matrix(angle: &Vector3<f32>) -> Matrix3<f32> {
    rotate_z(angle.z) * rotate_x(angle.x) * rotate_y(angle.y)
}

/// Pitch (rotation about X) in [-π/2, π/2]
pub fn get_pitch(world_rotation: &Matrix3<f32>) -> f32 {
    let m = world_rotation;
    atan2f(m[(2, 1)], pitch_cosine(m))
}

/// Roll (rotation about Y) in [-π, π], zero at gimbal lock
pub fn get_roll(world_rotation: &Matrix3<f32>) -> f32 {
    let m = world_rotation;
    if pitch_cosine(m) < GIMBAL_LOCK_EPSILON {
        return 0.0;
    }
    atan2f(-m[(2, 0)], m[(2, 2)])
}

/// Yaw (rotation about Z) in [-π, π]
///
/// At gimbal lock this includes the roll component.
pub fn get_yaw(world_rotation: &Matrix3<f32>) -> f32 {
    let m = world_rotation;
    if pitch_cosine(m) < GIMBAL_LOCK_EPSILON {
        return atan2f(m[(1, 0)], m[(0, 0)]);
    }
    atan2f(-m[(0, 1)], m[(1, 1)])
}

/// Euler angles `(pitch, roll, yaw)` of a rotation matrix
pub fn get_euler_angles(world_rotation: &Matrix3<f32>) -> Vector3<f32> {
    Vector3::new(
        get_pitch(world_rotation),
        get_roll(world_rotation),
        get_yaw(world_rotation),
    )
}

/// Project a nearly-orthonormal matrix back onto the rotation group
///
/// Goes through a normalized quaternion. Non-finite input yields identity.
pub fn orthonormalize(matrix: &Matrix3<f32>) -> Matrix3<f32> {
    if matrix.iter().any(|v| !v.is_finite()) {
        return Matrix3::identity();
    }

    let rotation = Rotation3::from_matrix_unchecked(*matrix);
    let quaternion = UnitQuaternion::from_rotation_matrix(&rotation).into_inner();
    UnitQuaternion::from_quaternion(quaternion)
        .to_rotation_matrix()
        .into_inner()
}

/// `cos(pitch)`, always non-negative
fn pitch_cosine(m: &Matrix3<f32>) -> f32 {
    sqrtf(m[(2, 0)] * m[(2, 0)] + m[(2, 2)] * m[(2, 2)])
}
