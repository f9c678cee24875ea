//! Combined parameters of one emulated device
//!
//! Groups every gesture block so a device can be configured from one store
//! in one call.

use super::calibration::CalibrationParams;
use super::cursor::CursorParams;
use super::error::ParameterError;
use super::imu_cursor::ImuCursorParams;
use super::orientation::OrientationParams;
use super::shake::ShakeParams;
use super::storage::ParameterStore;
use super::swing::SwingParams;
use super::tilt::TiltParams;

/// All tuning parameters of one emulated device
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureParams {
    pub shake: ShakeParams,
    pub tilt: TiltParams,
    pub swing: SwingParams,
    pub cursor: CursorParams,
    pub imu_cursor: ImuCursorParams,
    pub calibration: CalibrationParams,
    pub orientation: OrientationParams,
}

impl GestureParams {
    /// Register every block with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        ShakeParams::register_defaults(store)?;
        TiltParams::register_defaults(store)?;
        SwingParams::register_defaults(store)?;
        CursorParams::register_defaults(store)?;
        ImuCursorParams::register_defaults(store)?;
        CalibrationParams::register_defaults(store)?;
        OrientationParams::register_defaults(store)?;
        Ok(())
    }

    /// Load every block from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            shake: ShakeParams::from_store(store),
            tilt: TiltParams::from_store(store),
            swing: SwingParams::from_store(store),
            cursor: CursorParams::from_store(store),
            imu_cursor: ImuCursorParams::from_store(store),
            calibration: CalibrationParams::from_store(store),
            orientation: OrientationParams::from_store(store),
        }
    }

    /// Name of the first invalid block, if any
    pub fn first_invalid(&self) -> Option<&'static str> {
        if !self.shake.is_valid() {
            return Some("shake");
        }
        if !self.tilt.is_valid() {
            return Some("tilt");
        }
        if !self.swing.is_valid() {
            return Some("swing");
        }
        if !self.cursor.is_valid() {
            return Some("cursor");
        }
        if !self.imu_cursor.is_valid() {
            return Some("imu_cursor");
        }
        if !self.calibration.is_valid() {
            return Some("calibration");
        }
        None
    }

    /// Validate every block
    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::storage::{ParamValue, MAX_PARAMS};

    #[test]
    fn test_defaults_are_valid() {
        assert!(GestureParams::default().is_valid());
    }

    #[test]
    fn test_register_defaults_fits_store() {
        let mut store = ParameterStore::new();
        GestureParams::register_defaults(&mut store).unwrap();

        assert_eq!(store.len(), 18);
        assert!(store.len() <= MAX_PARAMS);
        assert_eq!(GestureParams::from_store(&store), GestureParams::default());
    }

    #[test]
    fn test_from_store_reads_every_block() {
        let mut store = ParameterStore::new();
        GestureParams::register_defaults(&mut store).unwrap();
        store.set("SHK_FREQ", ParamValue::Float(4.0)).unwrap();
        store.set("TLT_ANGLE", ParamValue::Float(45.0)).unwrap();
        store.set("SWG_SPEED", ParamValue::Float(8.0)).unwrap();
        store.set("IR_PITCH", ParamValue::Float(30.0)).unwrap();
        store.set("IMU_YAW", ParamValue::Float(60.0)).unwrap();
        store.set("WM_UPRIGHT", ParamValue::Bool(true)).unwrap();

        let params = GestureParams::from_store(&store);
        assert!((params.shake.frequency - 4.0).abs() < 0.001);
        assert!((params.tilt.max_angle - 45.0).abs() < 0.001);
        assert!((params.swing.speed - 8.0).abs() < 0.001);
        assert!((params.cursor.total_pitch - 30.0).abs() < 0.001);
        assert!((params.imu_cursor.total_yaw - 60.0).abs() < 0.001);
        assert!(params.orientation.upright);
        assert!(params.is_valid());
    }

    #[test]
    fn test_first_invalid_names_block() {
        let mut params = GestureParams::default();
        params.swing.max_distance = 0.0;
        assert_eq!(params.first_invalid(), Some("swing"));
        assert!(!params.is_valid());
    }
}
