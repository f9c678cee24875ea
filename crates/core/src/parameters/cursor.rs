//! Pointer Cursor Parameter Definitions
//!
//! # Parameters
//!
//! - `IR_YAW` - Total horizontal field of view in degrees
//! - `IR_PITCH` - Total vertical field of view in degrees
//! - `IR_V_OFS` - Vertical offset of the pointing origin in meters
//! - `IR_BAR_TOP` - Sensor bar mounted above the screen

use super::error::ParameterError;
use super::loader::{in_range, load_bool, load_float};
use super::storage::{ParamFlags, ParamValue, ParameterStore};

// --- Defaults ---

const DEFAULT_TOTAL_YAW: f32 = 25.0;
const DEFAULT_TOTAL_PITCH: f32 = 20.0;
const DEFAULT_VERTICAL_OFFSET: f32 = 0.1;
const DEFAULT_SENSOR_BAR_ON_TOP: bool = true;

// --- Ranges ---

const MIN_FIELD_OF_VIEW: f32 = 0.0;
const MAX_FIELD_OF_VIEW: f32 = 360.0;

const MIN_VERTICAL_OFFSET: f32 = -1.0;
const MAX_VERTICAL_OFFSET: f32 = 1.0;

/// Pointer cursor parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorParams {
    /// Total yaw across the screen width (degrees)
    pub total_yaw: f32,
    /// Total pitch across the screen height (degrees)
    pub total_pitch: f32,
    /// Vertical offset (meters)
    pub vertical_offset: f32,
    /// Sensor bar above (true) or below (false) the screen
    pub sensor_bar_on_top: bool,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            total_yaw: DEFAULT_TOTAL_YAW,
            total_pitch: DEFAULT_TOTAL_PITCH,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
            sensor_bar_on_top: DEFAULT_SENSOR_BAR_ON_TOP,
        }
    }
}

impl CursorParams {
    /// Register cursor parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "IR_YAW",
            ParamValue::Float(DEFAULT_TOTAL_YAW),
            ParamFlags::empty(),
        )?;
        store.register(
            "IR_PITCH",
            ParamValue::Float(DEFAULT_TOTAL_PITCH),
            ParamFlags::empty(),
        )?;
        store.register(
            "IR_V_OFS",
            ParamValue::Float(DEFAULT_VERTICAL_OFFSET),
            ParamFlags::empty(),
        )?;
        store.register(
            "IR_BAR_TOP",
            ParamValue::Bool(DEFAULT_SENSOR_BAR_ON_TOP),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load cursor parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            total_yaw: load_float(
                store,
                "IR_YAW",
                DEFAULT_TOTAL_YAW,
                MIN_FIELD_OF_VIEW,
                MAX_FIELD_OF_VIEW,
            ),
            total_pitch: load_float(
                store,
                "IR_PITCH",
                DEFAULT_TOTAL_PITCH,
                MIN_FIELD_OF_VIEW,
                MAX_FIELD_OF_VIEW,
            ),
            vertical_offset: load_float(
                store,
                "IR_V_OFS",
                DEFAULT_VERTICAL_OFFSET,
                MIN_VERTICAL_OFFSET,
                MAX_VERTICAL_OFFSET,
            ),
            sensor_bar_on_top: load_bool(store, "IR_BAR_TOP", DEFAULT_SENSOR_BAR_ON_TOP),
        }
    }

    /// Height of the device relative to the sensor bar (meters)
    ///
    /// The offset applies downwards when the bar is below the screen.
    pub fn height(&self) -> f32 {
        if self.sensor_bar_on_top {
            self.vertical_offset
        } else {
            -self.vertical_offset
        }
    }

    /// Validate cursor parameters
    pub fn is_valid(&self) -> bool {
        in_range(self.total_yaw, MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW)
            && in_range(self.total_pitch, MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW)
            && in_range(
                self.vertical_offset,
                MIN_VERTICAL_OFFSET,
                MAX_VERTICAL_OFFSET,
            )
    }
}
