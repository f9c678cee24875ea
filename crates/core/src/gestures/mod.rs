//! Gesture emulators
//!
//! One pure step function per gesture kind:
//!
//! ```text
//! (previous state, input snapshot, parameters, dt) -> next state
//! ```
//!
//! No gesture keeps private history. Multi-phase behavior (shake direction
//! changes, swing wind-up and return) is derived from the input and the
//! current physical state alone, so identical arguments always produce the
//! identical next state.
//!
//! A step with `dt == 0` (or any non-positive or NaN `dt`) returns the
//! previous state unchanged.

pub mod cursor;
pub mod imu_cursor;
pub mod shake;
pub mod swing;
pub mod tilt;

pub use cursor::emulate_cursor;
pub use imu_cursor::emulate_imu_cursor;
pub use shake::emulate_shake;
pub use swing::emulate_swing;
pub use tilt::emulate_tilt;

/// Clamp a stick value to [-1, 1], NaN reads as centered
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
