//! Input source abstraction
//!
//! The emulated device reads its inputs through [`InputSource`], taking one
//! [`ControllerInput`] snapshot per frame. Live mappings (keyboard, host
//! gamepad, host IMU) implement it outside this crate.

use core::cell::Cell;

use crate::input::ControllerInput;

/// Source of per-frame controller input.
///
/// Implementations must return a self-consistent snapshot: every field read
/// from the same instant. Any locking needed for that is the implementor's
/// business.
///
/// # Example
///
/// ```
/// use wiimote_motion_core::input::{ControllerInput, ShakeAxes};
/// use wiimote_motion_core::traits::{InputSource, MockInput};
///
/// let source = MockInput::new();
/// source.update(|input| input.shake.axes = ShakeAxes::Z);
///
/// let snapshot = source.snapshot();
/// assert!(snapshot.shake.axes.contains(ShakeAxes::Z));
/// ```
pub trait InputSource {
    /// Read all input sources at once.
    fn snapshot(&self) -> ControllerInput;
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Scriptable input source for host tests.
///
/// Holds one `ControllerInput` that tests edit between frames and counts how
/// many snapshots were taken.
#[derive(Default)]
pub struct MockInput {
    current: Cell<ControllerInput>,
    snapshots: Cell<u32>,
}

impl MockInput {
    /// Creates a `MockInput` with every source idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `MockInput` starting from `input`.
    pub fn with_input(input: ControllerInput) -> Self {
        Self {
            current: Cell::new(input),
            snapshots: Cell::new(0),
        }
    }

    /// Replaces the whole input.
    pub fn set(&self, input: ControllerInput) {
        self.current.set(input);
    }

    /// Edits the input in place.
    pub fn update<F: FnOnce(&mut ControllerInput)>(&self, edit: F) {
        let mut input = self.current.get();
        edit(&mut input);
        self.current.set(input);
    }

    /// Number of snapshots taken so far.
    pub fn snapshot_count(&self) -> u32 {
        self.snapshots.get()
    }
}

impl InputSource for MockInput {
    fn snapshot(&self) -> ControllerInput {
        self.snapshots.set(self.snapshots.get().saturating_add(1));
        self.current.get()
    }
}

impl InputSource for ControllerInput {
    fn snapshot(&self) -> ControllerInput {
        *self
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
