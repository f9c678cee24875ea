//! Rotation math
//!
//! Pure functions converting between rotation matrices, acceleration
//! vectors, gyroscope rates and Euler angles.

pub mod rotation;

pub use rotation::{
    get_euler_angles, get_matrix_from_acceleration, get_matrix_from_gyroscope, get_pitch,
    get_roll, get_rotational_matrix, get_yaw, orthonormalize, rotate_about_axis, rotate_x,
    rotate_y, rotate_z,
};
