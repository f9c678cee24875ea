//! Tilt Gesture Parameter Definitions
//!
//! # Parameters
//!
//! - `TLT_ANGLE` - Tilt at full stick deflection in degrees
//! - `TLT_VEL` - Maximum rotational velocity in revolutions per second

use core::f32::consts::TAU;

use super::error::ParameterError;
use super::loader::{in_range, load_float};
use super::storage::{ParamFlags, ParamValue, ParameterStore};

// --- Defaults ---

const DEFAULT_MAX_ANGLE: f32 = 85.0;
const DEFAULT_MAX_VELOCITY: f32 = 7.0;

// --- Ranges ---

const MIN_ANGLE: f32 = 0.0;
const MAX_ANGLE: f32 = 180.0;

const MIN_VELOCITY: f32 = 1.0;
const MAX_VELOCITY: f32 = 20.0;

/// Tilt gesture parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltParams {
    /// Tilt at full deflection (degrees)
    pub max_angle: f32,
    /// Maximum rotational velocity (revolutions/s)
    pub max_velocity: f32,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            max_angle: DEFAULT_MAX_ANGLE,
            max_velocity: DEFAULT_MAX_VELOCITY,
        }
    }
}

impl TiltParams {
    /// Register tilt parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "TLT_ANGLE",
            ParamValue::Float(DEFAULT_MAX_ANGLE),
            ParamFlags::empty(),
        )?;
        store.register(
            "TLT_VEL",
            ParamValue::Float(DEFAULT_MAX_VELOCITY),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load tilt parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            max_angle: load_float(store, "TLT_ANGLE", DEFAULT_MAX_ANGLE, MIN_ANGLE, MAX_ANGLE),
            max_velocity: load_float(
                store,
                "TLT_VEL",
                DEFAULT_MAX_VELOCITY,
                MIN_VELOCITY,
                MAX_VELOCITY,
            ),
        }
    }

    /// Tilt at full deflection (rad)
    pub fn max_angle_rad(&self) -> f32 {
        self.max_angle.to_radians()
    }

    /// Maximum rotational velocity (rad/s)
    pub fn max_velocity_rad(&self) -> f32 {
        self.max_velocity * TAU
    }

    /// Validate tilt parameters
    pub fn is_valid(&self) -> bool {
        in_range(self.max_angle, MIN_ANGLE, MAX_ANGLE)
            && in_range(self.max_velocity, MIN_VELOCITY, MAX_VELOCITY)
    }
}
