//! Device Orientation Parameter Definitions
//!
//! How the user holds the controller at rest.
//!
//! # Parameters
//!
//! - `WM_SIDEWAYS` - Held sideways (rotated a quarter turn about the vertical)
//! - `WM_UPRIGHT` - Held upright (pointing at the ceiling)

use super::error::ParameterError;
use super::loader::load_bool;
use super::storage::{ParamFlags, ParamValue, ParameterStore};

/// Resting orientation loaded from parameter store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrientationParams {
    pub sideways: bool,
    pub upright: bool,
}

impl OrientationParams {
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        store.register("WM_SIDEWAYS", ParamValue::Bool(false), ParamFlags::empty())?;
        store.register("WM_UPRIGHT", ParamValue::Bool(false), ParamFlags::empty())?;
        Ok(())
    }

    pub fn from_store(store: &ParameterStore) -> Self {
        Self {
            sideways: load_bool(store, "WM_SIDEWAYS", false),
            upright: load_bool(store, "WM_UPRIGHT", false),
        }
    }
}
