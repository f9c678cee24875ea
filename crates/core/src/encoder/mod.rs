//! Accelerometer encoding
//!
//! Converts physical acceleration into the calibrated 10-bit values the
//! emulated hardware reports.

use libm::roundf;
use nalgebra::Vector3;

use crate::constants::{ACCEL_RANGE_MAX, GRAVITY_ACCELERATION};

/// One accelerometer sample in hardware units, 10 bits per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccelData {
    pub x: u16,
    pub y: u16,
    pub z: u16,
}

impl AccelData {
    pub fn new(x: u16, y: u16, z: u16) -> Self {
        Self { x, y, z }
    }
}

/// Encode `accel` (m/s²) against the `zero_g` / `one_g` calibration points
///
/// The mapping is linear: `zero_g` for no acceleration, `one_g` for one
/// standard gravity. Gravity itself is not added; include it in `accel` for
/// a device at rest. Each axis is rounded to the nearest count (halves round
/// up) and saturates at 0 and 1023, however large the input. Non-finite
/// components encode as `zero_g`, saturated like any other value.
pub fn convert_accel_data(accel: &Vector3<f32>, zero_g: u16, one_g: u16) -> AccelData {
    let counts_per_g = f32::from(one_g) - f32::from(zero_g);
    let scale = counts_per_g / GRAVITY_ACCELERATION;

    AccelData {
        x: encode_axis(accel.x, scale, zero_g),
        y: encode_axis(accel.y, scale, zero_g),
        z: encode_axis(accel.z, scale, zero_g),
    }
}

fn encode_axis(accel: f32, scale: f32, zero_g: u16) -> u16 {
    let max = f32::from(ACCEL_RANGE_MAX);
    // Huge finite input may scale to ±inf, which the clamp saturates
    let scaled = if accel.is_finite() { accel * scale } else { 0.0 };
    let value = roundf(scaled + f32::from(zero_g)).clamp(0.0, max);
    // In range after the clamp
    value as u16
}
