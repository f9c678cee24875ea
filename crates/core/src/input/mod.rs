//! Input source snapshots
//!
//! One immutable value per input source, read once per emulated frame. The
//! gesture emulators only ever see these snapshots, never the live input
//! sources, so a frame is computed from a single consistent view even when
//! another thread edits the mapping in between.
//!
//! Stick-style values are nominally in [-1, 1]. Out-of-range values are
//! accepted here and clamped by the gestures that consume them.

use bitflags::bitflags;
use nalgebra::{Vector2, Vector3};

bitflags! {
    /// Shake buttons, one per device axis
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ShakeAxes: u8 {
        const X = 0b001;
        const Y = 0b010;
        const Z = 0b100;
    }
}

impl ShakeAxes {
    /// Whether the shake button for axis `index` (0 = X) is held
    pub fn is_held(&self, index: usize) -> bool {
        match index {
            0 => self.contains(ShakeAxes::X),
            1 => self.contains(ShakeAxes::Y),
            2 => self.contains(ShakeAxes::Z),
            _ => false,
        }
    }
}

/// Shake buttons held this frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShakeInput {
    pub axes: ShakeAxes,
}

/// Tilt stick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltInput {
    /// Left/right (+ = right), tilts about roll
    pub x: f32,
    /// Forward/back (+ = forward), tilts about pitch
    pub y: f32,
}

/// Swing ("force") stick plus forward/back axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwingInput {
    /// Left/right (+ = right)
    pub x: f32,
    /// Up/down (+ = up)
    pub y: f32,
    /// Push/pull (+ = pushed forward, away from the user)
    pub z: f32,
}

impl SwingInput {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Pointer position on screen
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorInput {
    /// Screen-relative position, `None` while the pointer is hidden
    /// (+x = right, +y = up)
    pub pointer: Option<Vector2<f32>>,
}

impl CursorInput {
    pub fn visible(x: f32, y: f32) -> Self {
        Self {
            pointer: Some(Vector2::new(x, y)),
        }
    }

    pub fn hidden() -> Self {
        Self { pointer: None }
    }
}

/// Host accelerometer reading (m/s²), when one is mapped
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImuAccelerometerInput {
    pub acceleration: Option<Vector3<f32>>,
}

/// Host gyroscope reading (rad/s), when one is mapped
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImuGyroscopeInput {
    pub angular_velocity: Option<Vector3<f32>>,
}

/// Gyroscope pointer controls
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImuCursorInput {
    /// Gyroscope pointing is switched on
    pub enabled: bool,
    /// Recenter button held
    pub recenter: bool,
}

/// Everything the motion emulation reads in one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControllerInput {
    pub shake: ShakeInput,
    pub tilt: TiltInput,
    pub swing: SwingInput,
    pub cursor: CursorInput,
    pub imu_accelerometer: ImuAccelerometerInput,
    pub imu_gyroscope: ImuGyroscopeInput,
    pub imu_cursor: ImuCursorInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let input = ControllerInput::default();
        assert!(input.shake.axes.is_empty());
        assert_eq!(input.tilt, TiltInput { x: 0.0, y: 0.0 });
        assert_eq!(input.swing, SwingInput::new(0.0, 0.0, 0.0));
        assert_eq!(input.cursor.pointer, None);
        assert_eq!(input.imu_accelerometer.acceleration, None);
        assert_eq!(input.imu_gyroscope.angular_velocity, None);
        assert!(!input.imu_cursor.enabled);
    }

    #[test]
    fn test_shake_axes_is_held() {
        let axes = ShakeAxes::X | ShakeAxes::Z;
        assert!(axes.is_held(0));
        assert!(!axes.is_held(1));
        assert!(axes.is_held(2));
        assert!(!axes.is_held(3));
    }

    #[test]
    fn test_cursor_constructors() {
        assert_eq!(
            CursorInput::visible(0.5, -0.25).pointer,
            Some(Vector2::new(0.5, -0.25))
        );
        assert_eq!(CursorInput::hidden().pointer, None);
    }
}
