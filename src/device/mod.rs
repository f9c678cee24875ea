//! Emulated motion device
//!
//! [`EmulatedMotionDevice`] owns the motion state of one emulated
//! controller. Each frame it takes an input snapshot, steps every gesture
//! emulator and composes their output into one accelerometer report.
//!
//! # Frame composition
//!
//! ```text
//! R     = rot(-tilt) * rot(-point) * rot(-swing)
//! accel = O * R * (swing.acceleration + gravity or host accelerometer)
//!       + shake.acceleration
//! ```
//!
//! `O` is the resting orientation (sideways and/or upright). Shake
//! acceleration is applied in the device frame and is not rotated.

use core::f32::consts::TAU;

use nalgebra::{Matrix3, Vector3};
use wiimote_motion_core::constants::GRAVITY_ACCELERATION;
use wiimote_motion_core::encoder::{convert_accel_data, AccelData};
use wiimote_motion_core::gestures::{
    emulate_cursor, emulate_imu_cursor, emulate_shake, emulate_swing, emulate_tilt,
};
use wiimote_motion_core::input::ControllerInput;
use wiimote_motion_core::math::{get_rotational_matrix, rotate_x, rotate_z};
use wiimote_motion_core::parameters::{GestureParams, OrientationParams, ParameterStore};
use wiimote_motion_core::state::{ImuCursorState, MotionState, PositionalState, RotationalState};
use wiimote_motion_core::traits::InputSource;

use crate::error::DeviceError;

/// Output of one emulated frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// Total acceleration in the device frame (m/s²)
    pub acceleration: Vector3<f32>,
    /// `acceleration` encoded with the device calibration
    pub accel_data: AccelData,
    /// Rotation of the world around the device, resting orientation included
    pub orientation: Matrix3<f32>,
    /// Gyroscope pointer orientation
    pub imu_rotation: Matrix3<f32>,
    /// Gyroscope pointer pitch relative to the last recenter (rad)
    pub imu_pitch: f32,
}

/// One emulated motion controller
#[derive(Debug, Clone)]
pub struct EmulatedMotionDevice {
    params: GestureParams,
    swing: MotionState,
    tilt: RotationalState,
    point: MotionState,
    shake: PositionalState,
    imu_cursor: ImuCursorState,
}

impl Default for EmulatedMotionDevice {
    fn default() -> Self {
        Self::with_valid_params(GestureParams::default())
    }
}

impl EmulatedMotionDevice {
    /// Power-on device using `params`
    pub fn new(params: GestureParams) -> Result<Self, DeviceError> {
        validate(&params)?;
        Ok(Self::with_valid_params(params))
    }

    /// Power-on device configured from a parameter store
    pub fn from_store(store: &ParameterStore) -> Result<Self, DeviceError> {
        let params = GestureParams::from_store(store);
        crate::log_info!("Device parameters loaded ({} stored values)", store.len());
        Self::new(params)
    }

    /// Parameter store holding every default value
    pub fn default_store() -> Result<ParameterStore, DeviceError> {
        let mut store = ParameterStore::new();
        GestureParams::register_defaults(&mut store)?;
        Ok(store)
    }

    fn with_valid_params(params: GestureParams) -> Self {
        Self {
            params,
            swing: MotionState::default(),
            tilt: RotationalState::default(),
            point: MotionState::default(),
            shake: PositionalState::default(),
            imu_cursor: ImuCursorState::default(),
        }
    }

    /// Replace the parameters, motion state is kept
    pub fn set_params(&mut self, params: GestureParams) -> Result<(), DeviceError> {
        validate(&params)?;
        self.params = params;
        crate::log_debug!(
            "Device parameters updated (sideways: {}, upright: {})",
            params.orientation.sideways,
            params.orientation.upright
        );
        Ok(())
    }

    /// Reload parameters if the store changed since the last reload
    ///
    /// Returns `true` when new parameters were applied. The dirty flag is
    /// only cleared once the stored values were accepted.
    pub fn reload_params(&mut self, store: &mut ParameterStore) -> Result<bool, DeviceError> {
        if !store.is_dirty() {
            return Ok(false);
        }
        self.set_params(GestureParams::from_store(store))?;
        store.clear_dirty();
        Ok(true)
    }

    /// Return every gesture to its power-on state
    pub fn reset(&mut self) {
        self.swing = MotionState::default();
        self.tilt = RotationalState::default();
        self.point = MotionState::default();
        self.shake = PositionalState::default();
        self.imu_cursor = ImuCursorState::default();
        crate::log_info!("Device motion reset");
    }

    /// Advance the device by `dt` seconds and produce the next frame
    ///
    /// `dt == 0` recomputes the frame without moving.
    pub fn update(&mut self, input: &ControllerInput, dt: f32) -> Result<MotionFrame, DeviceError> {
        if !dt.is_finite() || dt < 0.0 {
            crate::log_warn!("Rejected time step {}", dt);
            return Err(DeviceError::InvalidTimeStep(dt));
        }

        let params = &self.params;
        self.swing = emulate_swing(&self.swing, &input.swing, &params.swing, dt);
        self.tilt = emulate_tilt(&self.tilt, &input.tilt, &params.tilt, dt);
        self.point = emulate_cursor(&self.point, &input.cursor, &params.cursor, dt);
        self.shake = emulate_shake(&self.shake, &input.shake, &params.shake, dt);

        let recenter = input.imu_cursor.enabled && input.imu_cursor.recenter;
        self.imu_cursor = emulate_imu_cursor(
            &self.imu_cursor,
            &input.imu_cursor,
            &input.imu_accelerometer,
            &input.imu_gyroscope,
            &params.imu_cursor,
            dt,
        );
        if recenter {
            crate::log_debug!("IMU cursor recentered at pitch {}", self.imu_cursor.recentered_pitch);
        }

        let frame = self.frame(input);
        crate::log_trace!(
            "Accel data {} {} {}",
            frame.accel_data.x,
            frame.accel_data.y,
            frame.accel_data.z
        );
        Ok(frame)
    }

    /// Take one snapshot from `source` and advance by `dt`
    pub fn poll<S: InputSource>(&mut self, source: &S, dt: f32) -> Result<MotionFrame, DeviceError> {
        let input = source.snapshot();
        self.update(&input, dt)
    }

    fn frame(&self, input: &ControllerInput) -> MotionFrame {
        let orientation = resting_orientation(&self.params.orientation)
            * get_rotational_matrix(&(-self.tilt.angle))
            * get_rotational_matrix(&(-self.point.rotational.angle))
            * get_rotational_matrix(&(-self.swing.rotational.angle));

        let extra = input
            .imu_accelerometer
            .acceleration
            .unwrap_or_else(|| Vector3::new(0.0, 0.0, GRAVITY_ACCELERATION));

        let acceleration = orientation * (self.swing.positional.acceleration + extra)
            + self.shake.acceleration;

        let calibration = &self.params.calibration;
        MotionFrame {
            acceleration,
            accel_data: convert_accel_data(&acceleration, calibration.zero_g, calibration.one_g),
            orientation,
            imu_rotation: self.imu_cursor.rotation,
            imu_pitch: self.imu_cursor.relative_pitch(),
        }
    }

    pub fn params(&self) -> &GestureParams {
        &self.params
    }

    pub fn swing_state(&self) -> &MotionState {
        &self.swing
    }

    pub fn tilt_state(&self) -> &RotationalState {
        &self.tilt
    }

    pub fn point_state(&self) -> &MotionState {
        &self.point
    }

    pub fn shake_state(&self) -> &PositionalState {
        &self.shake
    }

    pub fn imu_cursor_state(&self) -> &ImuCursorState {
        &self.imu_cursor
    }
}

fn validate(params: &GestureParams) -> Result<(), DeviceError> {
    match params.first_invalid() {
        Some(block) => {
            crate::log_error!("Invalid {} parameters", block);
            Err(DeviceError::InvalidParameters(block))
        }
        None => Ok(()),
    }
}

/// Rotation for how the device is held at rest
fn resting_orientation(orientation: &OrientationParams) -> Matrix3<f32> {
    let mut rotation = Matrix3::identity();
    if orientation.sideways {
        rotation *= rotate_z(-TAU / 4.0);
    }
    if orientation.upright {
        rotation *= rotate_x(TAU / 4.0);
    }
    rotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiimote_motion_core::input::{CursorInput, ShakeAxes, TiltInput};
    use wiimote_motion_core::parameters::ParamValue;

    const EPSILON: f32 = 1e-4;
    const DT: f32 = 1.0 / 200.0;

    #[test]
    fn test_rest_frame() {
        let mut device = EmulatedMotionDevice::default();
        let frame = device.update(&ControllerInput::default(), DT).unwrap();

        assert!((frame.acceleration - Vector3::new(0.0, 0.0, GRAVITY_ACCELERATION)).norm() < EPSILON);
        assert_eq!(frame.accel_data, AccelData::new(512, 512, 616));
        assert!((frame.orientation - Matrix3::identity()).norm() < EPSILON);
        assert_eq!(frame.imu_rotation, Matrix3::identity());
        assert_eq!(frame.imu_pitch, 0.0);
    }

    #[test]
    fn test_rejects_invalid_time_step() {
        let mut device = EmulatedMotionDevice::default();
        let input = ControllerInput::default();

        assert_eq!(device.update(&input, -DT), Err(DeviceError::InvalidTimeStep(-DT)));
        assert!(matches!(
            device.update(&input, f32::INFINITY),
            Err(DeviceError::InvalidTimeStep(_))
        ));
        assert!(matches!(
            device.update(&input, f32::NAN),
            Err(DeviceError::InvalidTimeStep(_))
        ));
    }

    #[test]
    fn test_zero_time_step_keeps_state() {
        let mut device = EmulatedMotionDevice::default();
        let mut input = ControllerInput::default();
        input.shake.axes = ShakeAxes::X;
        device.update(&input, DT).unwrap();
        let before = *device.shake_state();

        device.update(&input, 0.0).unwrap();
        assert_eq!(*device.shake_state(), before);
    }

    #[test]
    fn test_sideways_rest_frame() {
        let mut params = GestureParams::default();
        params.orientation.sideways = true;
        let mut device = EmulatedMotionDevice::new(params).unwrap();

        // Gravity lies on the yaw axis, turning sideways leaves it alone
        let frame = device.update(&ControllerInput::default(), DT).unwrap();
        assert!((frame.acceleration.z - GRAVITY_ACCELERATION).abs() < EPSILON);
        assert!((frame.orientation - rotate_z(-TAU / 4.0)).norm() < EPSILON);
    }

    #[test]
    fn test_upright_rest_frame() {
        let mut params = GestureParams::default();
        params.orientation.upright = true;
        let mut device = EmulatedMotionDevice::new(params).unwrap();

        let frame = device.update(&ControllerInput::default(), DT).unwrap();
        let expected = rotate_x(TAU / 4.0) * Vector3::new(0.0, 0.0, GRAVITY_ACCELERATION);
        assert!((frame.acceleration - expected).norm() < EPSILON);
        assert!(frame.acceleration.y.abs() > 9.0);
    }

    #[test]
    fn test_host_accelerometer_replaces_gravity() {
        let mut device = EmulatedMotionDevice::default();
        let mut input = ControllerInput::default();
        input.imu_accelerometer.acceleration = Some(Vector3::new(0.0, 0.0, 0.0));

        let frame = device.update(&input, DT).unwrap();
        assert!(frame.acceleration.norm() < EPSILON);
        assert_eq!(frame.accel_data, AccelData::new(512, 512, 512));
    }

    #[test]
    fn test_tilt_rotates_gravity() {
        let mut device = EmulatedMotionDevice::default();
        let mut input = ControllerInput::default();
        input.tilt = TiltInput { x: 0.0, y: 1.0 };

        let mut frame = device.update(&input, DT).unwrap();
        for _ in 0..400 {
            frame = device.update(&input, DT).unwrap();
        }

        // Gravity keeps its magnitude, only its direction changes
        assert!((frame.acceleration.norm() - GRAVITY_ACCELERATION).abs() < 1e-3);
        assert!(frame.acceleration.z < GRAVITY_ACCELERATION - 1.0);
        assert!(device.tilt_state().angle.x > 0.0);
    }

    #[test]
    fn test_pointer_hidden_and_shown() {
        let mut device = EmulatedMotionDevice::default();
        let mut input = ControllerInput::default();
        input.cursor = CursorInput::hidden();
        device.update(&input, DT).unwrap();
        assert!(device.point_state().positional.position.y < 0.0);

        input.cursor = CursorInput::visible(0.5, 0.0);
        device.update(&input, DT).unwrap();
        assert!(device.point_state().positional.position.y > 0.0);
        assert!(device.point_state().rotational.angle.z < 0.0);
    }

    #[test]
    fn test_reset() {
        let mut device = EmulatedMotionDevice::default();
        let mut input = ControllerInput::default();
        input.shake.axes = ShakeAxes::all();
        input.tilt = TiltInput { x: 1.0, y: -1.0 };
        for _ in 0..20 {
            device.update(&input, DT).unwrap();
        }
        assert_ne!(*device.shake_state(), PositionalState::default());

        device.reset();
        assert_eq!(*device.shake_state(), PositionalState::default());
        assert_eq!(*device.tilt_state(), RotationalState::default());
        assert_eq!(*device.swing_state(), MotionState::default());
        assert_eq!(*device.point_state(), MotionState::default());
        assert_eq!(*device.imu_cursor_state(), ImuCursorState::default());
    }

    #[test]
    fn test_set_params_rejects_invalid() {
        let mut device = EmulatedMotionDevice::default();
        let mut params = GestureParams::default();
        params.calibration.one_g = params.calibration.zero_g;

        assert_eq!(
            device.set_params(params),
            Err(DeviceError::InvalidParameters("calibration"))
        );
        assert_eq!(*device.params(), GestureParams::default());
        assert!(EmulatedMotionDevice::new(params).is_err());
    }

    #[test]
    fn test_set_params_keeps_motion() {
        let mut device = EmulatedMotionDevice::default();
        let mut input = ControllerInput::default();
        input.shake.axes = ShakeAxes::Y;
        for _ in 0..10 {
            device.update(&input, DT).unwrap();
        }
        let shake = *device.shake_state();

        let mut params = GestureParams::default();
        params.calibration = wiimote_motion_core::parameters::CalibrationParams::nunchuk();
        device.set_params(params).unwrap();

        assert_eq!(*device.shake_state(), shake);
        assert_eq!(device.params().calibration.one_g, 716);
    }

    #[test]
    fn test_from_store() {
        let mut store = EmulatedMotionDevice::default_store().unwrap();
        store.set("WM_SIDEWAYS", ParamValue::Bool(true)).unwrap();

        let device = EmulatedMotionDevice::from_store(&store).unwrap();
        assert!(device.params().orientation.sideways);
        assert!(!device.params().orientation.upright);
    }

    #[test]
    fn test_reload_params_only_when_dirty() {
        let mut store = EmulatedMotionDevice::default_store().unwrap();
        let mut device = EmulatedMotionDevice::from_store(&store).unwrap();
        store.clear_dirty();

        assert_eq!(device.reload_params(&mut store), Ok(false));

        store.set("WM_UPRIGHT", ParamValue::Bool(true)).unwrap();
        assert_eq!(device.reload_params(&mut store), Ok(true));
        assert!(device.params().orientation.upright);
        assert!(!store.is_dirty());
    }
}
