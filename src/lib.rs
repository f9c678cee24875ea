//! wiimote_motion - Emulated motion controller device
//!
//! Owns the motion state of one emulated controller and turns per-frame input
//! snapshots into calibrated accelerometer reports, using the stateless
//! algorithms of [`wiimote_motion_core`].
//!
//! # Modules
//!
//! - [`device`]: The emulated device and its per-frame output
//! - [`error`]: Device error type
//! - [`logging`]: `log_*!` macros (defmt or `log` backend)

pub mod logging;

pub mod device;
pub mod error;

pub use device::{EmulatedMotionDevice, MotionFrame};
pub use error::DeviceError;
pub use wiimote_motion_core as motion;
