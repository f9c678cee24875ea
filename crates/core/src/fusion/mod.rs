//! Sensor fusion
//!
//! Complementary filter blending a gyroscope-integrated orientation with
//! the leveling implied by an accelerometer reading.
//!
//! The gyroscope matrix is accurate over short periods but drifts. The
//! accelerometer has no drift but is noisy and carries no yaw. Each call
//! nudges the gyroscope orientation a fraction of the way towards the
//! accelerometer, so the drift is bled off over many frames.

use libm::atan2f;
use nalgebra::{Matrix3, Unit, Vector3};

use crate::constants::NORMALIZE_EPSILON;
use crate::math::{orthonormalize, rotate_about_axis};

/// Blend a gyroscope orientation towards accelerometer leveling
///
/// # Arguments
///
/// * `gyroscope` - Current orientation (rotation of the world around the device)
/// * `accelerometer` - Raw accelerometer reading, any magnitude
/// * `accel_weight` - Fraction of the correction to apply, clamped to [0, 1]
/// * `accelerometer_normal` - Direction the accelerometer reads when level
///
/// # Returns
///
/// The corrected orientation. With `accel_weight = 0` the gyroscope matrix is
/// returned unchanged. With `accel_weight = 1` the result maps
/// `accelerometer_normal` exactly onto the measured direction.
///
/// A near-zero accelerometer reading carries no direction and leaves the
/// gyroscope matrix unchanged, as does a reading exactly opposite to the
/// predicted one (the correction axis is undefined there).
pub fn complementary_filter(
    gyroscope: &Matrix3<f32>,
    accelerometer: &Vector3<f32>,
    accel_weight: f32,
    accelerometer_normal: &Vector3<f32>,
) -> Matrix3<f32> {
    if !(accel_weight > 0.0) {
        return *gyroscope;
    }
    let weight = accel_weight.min(1.0);

    let Some(measured) = unit_direction(accelerometer) else {
        return *gyroscope;
    };
    let Some(predicted) = unit_direction(&(gyroscope * accelerometer_normal)) else {
        return *gyroscope;
    };

    let axis = predicted.cross(&measured);
    let sine = axis.norm();
    if !(sine > NORMALIZE_EPSILON) {
        return *gyroscope;
    }

    let angle = atan2f(sine, predicted.dot(&measured));
    let correction = rotate_about_axis(angle * weight, &Unit::new_normalize(axis));

    orthonormalize(&(correction * gyroscope))
}

/// [`complementary_filter`] against gravity, level when reading +Z
pub fn complementary_filter_gravity(
    gyroscope: &Matrix3<f32>,
    accelerometer: &Vector3<f32>,
    accel_weight: f32,
) -> Matrix3<f32> {
    complementary_filter(gyroscope, accelerometer, accel_weight, &Vector3::z())
}

fn unit_direction(v: &Vector3<f32>) -> Option<Vector3<f32>> {
    let length = v.norm();
    if length > NORMALIZE_EPSILON && length.is_finite() {
        Some(v / length)
    } else {
        None
    }
}
