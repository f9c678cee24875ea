//! Process-wide physical constants and axis conventions
//!
//! # Device frame
//!
//! Fixed to the controller, matching its accelerometer axes:
//! - X: towards the left side of the device
//! - Y: forward, the pointing direction
//! - Z: up, out of the button face
//!
//! # Euler angles
//!
//! Angle vectors store `(pitch, roll, yaw)` in `(x, y, z)`:
//! pitch about X, roll about Y, yaw about Z. Rotation matrices are
//! composed as `Rz(yaw) * Rx(pitch) * Ry(roll)`, see [`crate::math`].

/// Standard gravity (m/s²). One "g" for every encoded sensor value.
pub const GRAVITY_ACCELERATION: f32 = 9.806_65;

/// Largest value of a 10-bit accelerometer axis.
pub const ACCEL_RANGE_MAX: u16 = (1 << 10) - 1;

/// Wii Remote accelerometer zero point (10-bit).
pub const WIIMOTE_ACCEL_ZERO_G: u16 = 0x80 << 2;

/// Wii Remote accelerometer one-g point (10-bit).
pub const WIIMOTE_ACCEL_ONE_G: u16 = 0x9A << 2;

/// Nunchuk accelerometer zero point (10-bit).
pub const NUNCHUK_ACCEL_ZERO_G: u16 = 0x80 << 2;

/// Nunchuk accelerometer one-g point (10-bit).
pub const NUNCHUK_ACCEL_ONE_G: u16 = 0xB3 << 2;

/// Vectors shorter than this are treated as zero when normalizing.
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Below this `cos(pitch)` the Euler extraction is at the gimbal-lock boundary.
pub const GIMBAL_LOCK_EPSILON: f32 = 1e-6;
