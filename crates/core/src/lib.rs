//! wiimote_motion_core - Pure no_std motion synthesis for an emulated motion controller
//!
//! Turns discrete user input (buttons, sticks, pointer, simulated gyroscope)
//! into physically continuous motion and calibrated sensor values, one
//! emulated frame at a time.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **Pure no_std**: No std library dependencies
//! - **Stateless stepping**: every operation takes the previous state and an
//!   input snapshot and returns the next state; the caller owns all state
//!
//! # Modules
//!
//! - [`constants`]: Gravity, calibration points, axis conventions
//! - [`state`]: Positional, rotational, motion and IMU-cursor state
//! - [`math`]: Rotation matrices and Euler angle conversions
//! - [`fusion`]: Complementary filter (gyroscope + accelerometer leveling)
//! - [`planner`]: Jerk-limited and acceleration-limited approach
//! - [`gestures`]: Shake, tilt, swing, pointer and IMU pointer emulation
//! - [`encoder`]: Fixed-point accelerometer encoding
//! - [`input`]: Per-frame input source snapshots
//! - [`traits`]: Input source abstraction and mock
//! - [`parameters`]: Gesture tuning parameters and parameter store

#![no_std]

pub mod constants;
pub mod encoder;
pub mod fusion;
pub mod gestures;
pub mod input;
pub mod math;
pub mod parameters;
pub mod planner;
pub mod state;
pub mod traits;
