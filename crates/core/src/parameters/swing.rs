//! Swing Gesture Parameter Definitions
//!
//! # Parameters
//!
//! - `SWG_DIST` - Distance reached at full deflection in meters
//! - `SWG_SPEED` - Speed while swinging outwards in m/s
//! - `SWG_RET_SPD` - Speed while returning to center in m/s
//! - `SWG_ANGLE` - Twist at full deflection in degrees

use super::error::ParameterError;
use super::loader::{in_range, load_float};
use super::storage::{ParamFlags, ParamValue, ParameterStore};

// --- Defaults ---

const DEFAULT_DISTANCE: f32 = 0.25;
const DEFAULT_SPEED: f32 = 16.0;
const DEFAULT_RETURN_SPEED: f32 = 2.0;
const DEFAULT_TWIST_ANGLE: f32 = 90.0;

// --- Ranges ---

const MIN_DISTANCE: f32 = 0.05;
const MAX_DISTANCE: f32 = 1.0;

const MIN_SPEED: f32 = 1.0;
const MAX_SPEED: f32 = 30.0;

const MIN_RETURN_SPEED: f32 = 0.5;
const MAX_RETURN_SPEED: f32 = 30.0;

const MIN_TWIST_ANGLE: f32 = 0.0;
const MAX_TWIST_ANGLE: f32 = 180.0;

/// Swing gesture parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingParams {
    /// Distance at full deflection (meters)
    pub max_distance: f32,
    /// Outward speed (m/s)
    pub speed: f32,
    /// Speed back towards center (m/s)
    pub return_speed: f32,
    /// Twist at full deflection (degrees)
    pub twist_angle: f32,
}

impl Default for SwingParams {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_DISTANCE,
            speed: DEFAULT_SPEED,
            return_speed: DEFAULT_RETURN_SPEED,
            twist_angle: DEFAULT_TWIST_ANGLE,
        }
    }
}

impl SwingParams {
    /// Register swing parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "SWG_DIST",
            ParamValue::Float(DEFAULT_DISTANCE),
            ParamFlags::empty(),
        )?;
        store.register(
            "SWG_SPEED",
            ParamValue::Float(DEFAULT_SPEED),
            ParamFlags::empty(),
        )?;
        store.register(
            "SWG_RET_SPD",
            ParamValue::Float(DEFAULT_RETURN_SPEED),
            ParamFlags::empty(),
        )?;
        store.register(
            "SWG_ANGLE",
            ParamValue::Float(DEFAULT_TWIST_ANGLE),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load swing parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            max_distance: load_float(
                store,
                "SWG_DIST",
                DEFAULT_DISTANCE,
                MIN_DISTANCE,
                MAX_DISTANCE,
            ),
            speed: load_float(store, "SWG_SPEED", DEFAULT_SPEED, MIN_SPEED, MAX_SPEED),
            return_speed: load_float(
                store,
                "SWG_RET_SPD",
                DEFAULT_RETURN_SPEED,
                MIN_RETURN_SPEED,
                MAX_RETURN_SPEED,
            ),
            twist_angle: load_float(
                store,
                "SWG_ANGLE",
                DEFAULT_TWIST_ANGLE,
                MIN_TWIST_ANGLE,
                MAX_TWIST_ANGLE,
            ),
        }
    }

    /// Twist at full deflection (rad)
    pub fn twist_angle_rad(&self) -> f32 {
        self.twist_angle.to_radians()
    }

    /// Validate swing parameters
    pub fn is_valid(&self) -> bool {
        in_range(self.max_distance, MIN_DISTANCE, MAX_DISTANCE)
            && in_range(self.speed, MIN_SPEED, MAX_SPEED)
            && in_range(self.return_speed, MIN_RETURN_SPEED, MAX_RETURN_SPEED)
            && in_range(self.twist_angle, MIN_TWIST_ANGLE, MAX_TWIST_ANGLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swing_params_defaults() {
        let params = SwingParams::default();
        assert!((params.max_distance - 0.25).abs() < 0.001);
        assert!((params.speed - 16.0).abs() < 0.001);
        assert!((params.return_speed - 2.0).abs() < 0.001);
        assert!((params.twist_angle - 90.0).abs() < 0.001);
        assert!(params.is_valid());
    }

    #[test]
    fn test_register_defaults_populates_all() {
        let mut store = ParameterStore::new();
        SwingParams::register_defaults(&mut store).unwrap();

        assert!(store.get("SWG_DIST").is_some());
        assert!(store.get("SWG_SPEED").is_some());
        assert!(store.get("SWG_RET_SPD").is_some());
        assert!(store.get("SWG_ANGLE").is_some());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_from_store_reads_custom_values() {
        let mut store = ParameterStore::new();
        SwingParams::register_defaults(&mut store).unwrap();
        store.set("SWG_DIST", ParamValue::Float(0.5)).unwrap();
        store.set("SWG_ANGLE", ParamValue::Float(45.0)).unwrap();

        let params = SwingParams::from_store(&store);
        assert!((params.max_distance - 0.5).abs() < 0.001);
        assert!((params.twist_angle - 45.0).abs() < 0.001);
        assert!((params.twist_angle_rad() - core::f32::consts::FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let mut store = ParameterStore::new();
        SwingParams::register_defaults(&mut store).unwrap();

        // A zero distance would divide by zero in the gesture
        store.set("SWG_DIST", ParamValue::Float(0.0)).unwrap();
        store.set("SWG_SPEED", ParamValue::Float(100.0)).unwrap();

        let params = SwingParams::from_store(&store);
        assert!((params.max_distance - MIN_DISTANCE).abs() < 0.001);
        assert!((params.speed - MAX_SPEED).abs() < 0.001);
    }

    #[test]
    fn test_is_valid_rejects_invalid_params() {
        let params = SwingParams {
            max_distance: 0.0,
            ..SwingParams::default()
        };
        assert!(!params.is_valid());

        let params = SwingParams {
            return_speed: 0.1,
            ..SwingParams::default()
        };
        assert!(!params.is_valid());
    }
}
