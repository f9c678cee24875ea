//! Shake Gesture Parameter Definitions
//!
//! # Parameters
//!
//! - `SHK_INTENSITY` - Peak-to-peak shake distance in meters
//! - `SHK_FREQ` - Shake frequency in Hz (one full back-and-forth per cycle)

use super::error::ParameterError;
use super::loader::{in_range, load_float};
use super::storage::{ParamFlags, ParamValue, ParameterStore};

// --- Defaults ---

const DEFAULT_INTENSITY: f32 = 0.1;
const DEFAULT_FREQUENCY: f32 = 6.0;

// --- Ranges ---

const MIN_INTENSITY: f32 = 0.01;
const MAX_INTENSITY: f32 = 0.5;

const MIN_FREQUENCY: f32 = 1.0;
const MAX_FREQUENCY: f32 = 20.0;

/// Shake gesture parameters loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeParams {
    /// Peak-to-peak distance (meters)
    pub intensity: f32,
    /// Full shakes per second (Hz)
    pub frequency: f32,
}

impl Default for ShakeParams {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl ShakeParams {
    /// Register shake parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register(
            "SHK_INTENSITY",
            ParamValue::Float(DEFAULT_INTENSITY),
            ParamFlags::empty(),
        )?;
        store.register(
            "SHK_FREQ",
            ParamValue::Float(DEFAULT_FREQUENCY),
            ParamFlags::empty(),
        )?;

        Ok(())
    }

    /// Load shake parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            intensity: load_float(
                store,
                "SHK_INTENSITY",
                DEFAULT_INTENSITY,
                MIN_INTENSITY,
                MAX_INTENSITY,
            ),
            frequency: load_float(
                store,
                "SHK_FREQ",
                DEFAULT_FREQUENCY,
                MIN_FREQUENCY,
                MAX_FREQUENCY,
            ),
        }
    }

    /// Time from one extreme of the shake to the other (seconds)
    pub fn travel_time(&self) -> f32 {
        1.0 / self.frequency / 2.0
    }

    /// Validate shake parameters
    pub fn is_valid(&self) -> bool {
        in_range(self.intensity, MIN_INTENSITY, MAX_INTENSITY)
            && in_range(self.frequency, MIN_FREQUENCY, MAX_FREQUENCY)
    }
}
