//! Parameter management types and utilities
//!
//! Gesture tuning lives in a fixed-capacity `ParameterStore`. Each gesture
//! block registers its defaults and loads itself back with range clamping.

pub mod calibration;
pub mod cursor;
pub mod error;
pub mod gesture;
pub mod imu_cursor;
pub mod orientation;
pub mod shake;
pub mod storage;
pub mod swing;
pub mod tilt;

mod loader;

pub use calibration::CalibrationParams;
pub use cursor::CursorParams;
pub use error::ParameterError;
pub use gesture::GestureParams;
pub use imu_cursor::ImuCursorParams;
pub use orientation::OrientationParams;
pub use shake::ShakeParams;
pub use storage::{ParamFlags, ParamMetadata, ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};
pub use swing::SwingParams;
pub use tilt::TiltParams;
