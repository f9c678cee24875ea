//! Accelerometer Calibration Parameter Definitions
//!
//! Calibration points reported by the emulated hardware. They are fixed by
//! the device and registered read-only.
//!
//! # Parameters
//!
//! - `ACC_ZERO_G` - Raw reading at zero acceleration
//! - `ACC_ONE_G` - Raw reading at one standard gravity

use super::error::ParameterError;
use super::loader::load_int;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::constants::{
    NUNCHUK_ACCEL_ONE_G, NUNCHUK_ACCEL_ZERO_G, WIIMOTE_ACCEL_ONE_G, WIIMOTE_ACCEL_ZERO_G,
};

const MIN_CALIBRATION: i32 = 0;
const MAX_CALIBRATION: i32 = u16::MAX as i32;

/// Accelerometer calibration loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationParams {
    /// Raw value at 0 g
    pub zero_g: u16,
    /// Raw value at 1 g
    pub one_g: u16,
}

impl Default for CalibrationParams {
    fn default() -> Self {
        Self {
            zero_g: WIIMOTE_ACCEL_ZERO_G,
            one_g: WIIMOTE_ACCEL_ONE_G,
        }
    }
}

impl CalibrationParams {
    /// Calibration of the Nunchuk extension accelerometer
    pub fn nunchuk() -> Self {
        Self {
            zero_g: NUNCHUK_ACCEL_ZERO_G,
            one_g: NUNCHUK_ACCEL_ONE_G,
        }
    }

    /// Register calibration points (read-only)
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "ACC_ZERO_G",
            ParamValue::Int(i32::from(WIIMOTE_ACCEL_ZERO_G)),
            ParamFlags::READ_ONLY,
        )?;
        store.register(
            "ACC_ONE_G",
            ParamValue::Int(i32::from(WIIMOTE_ACCEL_ONE_G)),
            ParamFlags::READ_ONLY,
        )?;

        Ok(())
    }

    /// Load calibration points from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            zero_g: load_calibration(store, "ACC_ZERO_G", WIIMOTE_ACCEL_ZERO_G),
            one_g: load_calibration(store, "ACC_ONE_G", WIIMOTE_ACCEL_ONE_G),
        }
    }

    /// One gravity must read above zero gravity
    pub fn is_valid(&self) -> bool {
        self.one_g > self.zero_g
    }
}

fn load_calibration(store: &ParameterStore, name: &str, default: u16) -> u16 {
    let value = load_int(
        store,
        name,
        i32::from(default),
        MIN_CALIBRATION,
        MAX_CALIBRATION,
    );
    u16::try_from(value).unwrap_or(default)
}
