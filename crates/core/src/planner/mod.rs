//! Motion planners
//!
//! Turn an instantaneous target into a continuous trajectory. Each axis is
//! planned on its own:
//!
//! - [`approach_position_with_jerk`]: position, velocity and acceleration,
//!   jerk bounded per axis. Used for translational gestures.
//! - [`approach_angle_with_accel`]: angle and angular velocity, angular
//!   acceleration bounded. Used for rotational gestures.
//!
//! # Control law
//!
//! Every axis has a braking profile: the fastest way to come to rest from
//! its current motion under the limit. While the end of that profile lies
//! short of the target, each step picks the control value (jerk or angular
//! acceleration) inside `[-max, max]` whose end-of-step state brakes exactly
//! onto the target. When full control in either direction is not enough
//! the limit is used, otherwise the value is found by bisection.
//!
//! Once the braking profile ends on the target the axis follows it, phase
//! switches inside a step included, and is placed on the target at rest in
//! the step where the profile completes. The limit holds on every step.
//!
//! `dt == 0` leaves the state unchanged. An axis with a zero (or negative)
//! limit cannot move continuously and is placed on its target.

use libm::{fabsf, fmaxf, fminf, sqrtf};
use nalgebra::Vector3;

use crate::state::{PositionalState, RotationalState};

/// Bisection iterations for the control value (resolution `2·max / 2^20`)
const CONTROL_SEARCH_ITERATIONS: usize = 20;

/// Distance between braking end point and target treated as on target (m or rad)
const ARRIVAL_EPSILON: f32 = 1e-5;

/// Advance position towards `target` with per-axis jerk limit `max_jerk`
pub fn approach_position_with_jerk(
    state: &PositionalState,
    target: &Vector3<f32>,
    max_jerk: &Vector3<f32>,
    dt: f32,
) -> PositionalState {
    if !(dt > 0.0) {
        return *state;
    }

    let mut next = *state;
    for i in 0..3 {
        let axis = JerkAxis {
            position: state.position[i],
            velocity: state.velocity[i],
            acceleration: state.acceleration[i],
        }
        .step(target[i], max_jerk[i], dt);

        next.position[i] = axis.position;
        next.velocity[i] = axis.velocity;
        next.acceleration[i] = axis.acceleration;
    }
    next
}

/// Advance angles towards `target` with angular acceleration limit `max_accel`
///
/// Angles are not wrapped; callers that want the short way round must wrap
/// `state.angle` relative to `target` first.
pub fn approach_angle_with_accel(
    state: &RotationalState,
    target: &Vector3<f32>,
    max_accel: f32,
    dt: f32,
) -> RotationalState {
    if !(dt > 0.0) {
        return *state;
    }

    let mut next = *state;
    for i in 0..3 {
        let axis = AccelAxis {
            angle: state.angle[i],
            velocity: state.angular_velocity[i],
        }
        .step(target[i], max_accel, dt);

        next.angle[i] = axis.angle;
        next.angular_velocity[i] = axis.velocity;
    }
    next
}

/// Shortest distance covered while braking to rest under a jerk limit
///
/// Signed: positive when the device ends up further along +axis.
pub fn jerk_stop_distance(velocity: f32, acceleration: f32, max_jerk: f32) -> f32 {
    let axis = JerkAxis {
        position: 0.0,
        velocity,
        acceleration,
    };
    let braking = JerkBraking::new(&axis, max_jerk);
    axis.brake(&braking, braking.duration()).position
}

/// Distance covered while braking to rest under an acceleration limit
pub fn accel_stop_distance(velocity: f32, max_accel: f32) -> f32 {
    velocity * fabsf(velocity) / (2.0 * max_accel)
}

#[derive(Debug, Clone, Copy)]
struct JerkAxis {
    position: f32,
    velocity: f32,
    acceleration: f32,
}

/// Time-optimal stop under a jerk limit
///
/// Jerk `jerk` for `first` seconds drives acceleration out to its peak, then
/// `-jerk` for `second` seconds ramps it back to zero exactly as velocity
/// reaches zero. A device already braking keeps braking: `first` is zero
/// only when the current acceleration is the peak.
#[derive(Debug, Clone, Copy)]
struct JerkBraking {
    jerk: f32,
    first: f32,
    second: f32,
}

impl JerkBraking {
    fn new(axis: &JerkAxis, max_jerk: f32) -> Self {
        let (v0, a0) = (axis.velocity, axis.acceleration);

        // Velocity left after ramping acceleration straight to zero decides
        // which way the brake pushes.
        let coast_velocity = v0 + a0 * fabsf(a0) / (2.0 * max_jerk);
        let direction = if coast_velocity < 0.0 { -1.0 } else { 1.0 };

        let peak = -direction * sqrtf(fmaxf(a0 * a0 / 2.0 + direction * max_jerk * v0, 0.0));

        Self {
            jerk: -direction * max_jerk,
            first: fmaxf((a0 - peak) * direction / max_jerk, 0.0),
            second: fabsf(peak) / max_jerk,
        }
    }

    fn duration(&self) -> f32 {
        self.first + self.second
    }
}

impl JerkAxis {
    fn at_rest(position: f32) -> Self {
        Self {
            position,
            velocity: 0.0,
            acceleration: 0.0,
        }
    }

    /// Exact integration under constant jerk
    fn integrate(&self, jerk: f32, dt: f32) -> Self {
        Self {
            position: self.position
                + self.velocity * dt
                + self.acceleration * dt * dt / 2.0
                + jerk * dt * dt * dt / 6.0,
            velocity: self.velocity + self.acceleration * dt + jerk * dt * dt / 2.0,
            acceleration: self.acceleration + jerk * dt,
        }
    }

    /// Follow `braking` for `duration` seconds, resting once it completes
    fn brake(&self, braking: &JerkBraking, duration: f32) -> Self {
        let first = fminf(duration, braking.first);
        let mut next = self.integrate(braking.jerk, first);

        let second = fminf(duration - first, braking.second);
        if second > 0.0 {
            next = next.integrate(-braking.jerk, second);
        }

        if duration >= braking.duration() {
            next.velocity = 0.0;
            next.acceleration = 0.0;
        }
        next
    }

    fn step(&self, target: f32, max_jerk: f32, dt: f32) -> Self {
        if !(max_jerk > 0.0) {
            return Self::at_rest(target);
        }

        let braking = JerkBraking::new(self, max_jerk);
        let stop = self.brake(&braking, braking.duration());
        if fabsf(target - stop.position) <= ARRIVAL_EPSILON {
            if braking.duration() <= dt {
                return Self::at_rest(target);
            }
            return self.brake(&braking, dt);
        }

        let jerk = solve_control(max_jerk, |jerk| {
            let next = self.integrate(jerk, dt);
            target - next.position - jerk_stop_distance(next.velocity, next.acceleration, max_jerk)
        });
        self.integrate(jerk, dt)
    }
}

#[derive(Debug, Clone, Copy)]
struct AccelAxis {
    angle: f32,
    velocity: f32,
}

impl AccelAxis {
    fn integrate(&self, accel: f32, dt: f32) -> Self {
        Self {
            angle: self.angle + self.velocity * dt + accel * dt * dt / 2.0,
            velocity: self.velocity + accel * dt,
        }
    }

    fn step(&self, target: f32, max_accel: f32, dt: f32) -> Self {
        let at_target = Self {
            angle: target,
            velocity: 0.0,
        };
        if !(max_accel > 0.0) {
            return at_target;
        }

        let stop = self.angle + accel_stop_distance(self.velocity, max_accel);
        if fabsf(target - stop) <= ARRIVAL_EPSILON {
            // Constant deceleration reaches rest after |v| / max_accel
            if fabsf(self.velocity) <= max_accel * dt {
                return at_target;
            }
            let braking = if self.velocity > 0.0 {
                -max_accel
            } else {
                max_accel
            };
            return self.integrate(braking, dt);
        }

        let accel = solve_control(max_accel, |accel| {
            let next = self.integrate(accel, dt);
            target - next.angle - accel_stop_distance(next.velocity, max_accel)
        });
        self.integrate(accel, dt)
    }
}

/// Find `u` in `[-limit, limit]` with `remaining(u) == 0`
///
/// `remaining` must be decreasing in `u`. Saturates at the limit when the
/// root lies outside the interval.
fn solve_control<F: Fn(f32) -> f32>(limit: f32, remaining: F) -> f32 {
    if remaining(limit) >= 0.0 {
        return limit;
    }
    if remaining(-limit) <= 0.0 {
        return -limit;
    }

    let mut low = -limit;
    let mut high = limit;
    for _ in 0..CONTROL_SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        if remaining(mid) > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }
    (low + high) / 2.0
}
