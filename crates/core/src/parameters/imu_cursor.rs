//! Gyroscope Pointer Parameter Definitions
//!
//! # Parameters
//!
//! - `IMU_YAW` - Total yaw range in degrees, pointing is held at its edges
//! - `IMU_ACC_WGT` - Accelerometer weight of the drift correction (0-1)

use super::error::ParameterError;
use super::loader::{in_range, load_float};
use super::storage::{ParamFlags, ParamValue, ParameterStore};

const DEFAULT_TOTAL_YAW: f32 = 15.0;
const DEFAULT_ACCEL_WEIGHT: f32 = 0.02;

const MIN_TOTAL_YAW: f32 = 0.0;
const MAX_TOTAL_YAW: f32 = 360.0;

const MIN_ACCEL_WEIGHT: f32 = 0.0;
const MAX_ACCEL_WEIGHT: f32 = 1.0;

/// Gyroscope pointer parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuCursorParams {
    /// Total yaw range (degrees)
    pub total_yaw: f32,
    /// Complementary filter accelerometer weight
    pub accel_weight: f32,
}

impl Default for ImuCursorParams {
    fn default() -> Self {
        Self {
            total_yaw: DEFAULT_TOTAL_YAW,
            accel_weight: DEFAULT_ACCEL_WEIGHT,
        }
    }
}

impl ImuCursorParams {
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "IMU_YAW",
            ParamValue::Float(DEFAULT_TOTAL_YAW),
            ParamFlags::empty(),
        )?;
        store.register(
            "IMU_ACC_WGT",
            ParamValue::Float(DEFAULT_ACCEL_WEIGHT),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            total_yaw: load_float(
                store,
                "IMU_YAW",
                DEFAULT_TOTAL_YAW,
                MIN_TOTAL_YAW,
                MAX_TOTAL_YAW,
            ),
            accel_weight: load_float(
                store,
                "IMU_ACC_WGT",
                DEFAULT_ACCEL_WEIGHT,
                MIN_ACCEL_WEIGHT,
                MAX_ACCEL_WEIGHT,
            ),
        }
    }

    /// Largest yaw either side of center (rad)
    pub fn max_yaw_rad(&self) -> f32 {
        (self.total_yaw / 2.0).to_radians()
    }

    pub fn is_valid(&self) -> bool {
        in_range(self.total_yaw, MIN_TOTAL_YAW, MAX_TOTAL_YAW)
            && in_range(self.accel_weight, MIN_ACCEL_WEIGHT, MAX_ACCEL_WEIGHT)
    }
}
