//! Device error types

use wiimote_motion_core::parameters::ParameterError;

/// Errors reported by [`crate::device::EmulatedMotionDevice`]
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DeviceError {
    #[error("invalid time step: {0}")]
    InvalidTimeStep(f32),

    #[error("parameter error: {0}")]
    Parameter(ParameterError),

    #[error("invalid {0} parameters")]
    InvalidParameters(&'static str),
}

impl From<ParameterError> for DeviceError {
    fn from(err: ParameterError) -> Self {
        DeviceError::Parameter(err)
    }
}
