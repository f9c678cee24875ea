//! Typed, range-clamped reads used by the parameter blocks
//!
//! A missing or wrong-typed entry yields the block's default.

use super::storage::{ParamValue, ParameterStore};

/// Load a float parameter from store with clamping
pub(crate) fn load_float(
    store: &ParameterStore,
    name: &str,
    default: f32,
    min: f32,
    max: f32,
) -> f32 {
    match store.get(name) {
        Some(ParamValue::Float(v)) if v.is_finite() => v.clamp(min, max),
        Some(ParamValue::Int(v)) => (*v as f32).clamp(min, max),
        _ => default,
    }
}

/// Load an integer parameter from store with clamping
pub(crate) fn load_int(store: &ParameterStore, name: &str, default: i32, min: i32, max: i32) -> i32 {
    match store.get(name) {
        Some(ParamValue::Int(v)) => (*v).clamp(min, max),
        _ => default,
    }
}

/// Load a boolean parameter from store
pub(crate) fn load_bool(store: &ParameterStore, name: &str, default: bool) -> bool {
    match store.get(name) {
        Some(ParamValue::Bool(v)) => *v,
        _ => default,
    }
}

/// Inclusive range check, false for NaN
pub(crate) fn in_range(value: f32, min: f32, max: f32) -> bool {
    value >= min && value <= max
}
