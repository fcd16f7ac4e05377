#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` polar-velocity kinematic integrator for a simulated 2D robot."]
#![doc = ""]
#![doc = "The robot keeps its velocity in polar form (speed plus direction of travel)"]
#![doc = "and a turn rate that bends the direction of travel every tick. Angles are in"]
#![doc = "degrees with 0 pointing \"up\" (+y) and positive angles turning counter-clockwise."]

use core::fmt;
use libm::{cos, fmod, sin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub mod integrator;

pub use error::KinematicsError;
pub use integrator::{IntegrationOrder, Integrator, TickKind, TimeStep};

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Negative angles wrap around from 360. A value that rounds up to exactly
/// `360.0` after the shift is reported as `0.0`.
///
/// # Arguments
///
/// * `angle`: The angle in degrees to wrap.
pub fn wrap_degrees(angle: f64) -> f64 {
    let a = fmod(angle, 360.0);
    let a = if a < 0.0 { a + 360.0 } else { a };
    if a >= 360.0 { 0.0 } else { a }
}

/// A 2‑D pose `(x, y, heading)` in plane units and degrees.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Plane x position.
    pub x: f64,
    /// Plane y position.
    pub y: f64,
    /// Body orientation (degrees), 0 is straight up.
    pub heading: f64,
}

impl Pose {
    /// Construct a new pose.
    pub const fn new(x: f64, y: f64, heading: f64) -> Self {
        Pose { x, y, heading }
    }

    /// The point `offset` units behind the body, opposite the heading.
    ///
    /// A motion trail drawn through these points appears to come out of the
    /// rear of the robot.
    ///
    /// # Arguments
    ///
    /// * `offset`: Distance behind the pose, in plane units.
    pub fn behind(&self, offset: f64) -> (f64, f64) {
        let th = (-self.heading).to_radians();
        (self.x - offset * sin(th), self.y - offset * cos(th))
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.2}, y: {:.2}, heading: {:.2} deg)", self.x, self.y, self.heading)
    }
}

/// Configured maxima of a robot. Immutable once constructed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    max_speed: f64,
    max_acceleration: f64,
    max_turn_rate: f64,
    max_turn_acceleration: f64,
}

impl Limits {
    /// Construct a set of limits.
    ///
    /// # Arguments
    ///
    /// * `max_speed`: Upper bound on `speed`.
    /// * `max_acceleration`: Upper bound on the magnitude of a commanded linear acceleration.
    /// * `max_turn_rate`: Upper bound on the magnitude of `turn_rate` (degrees per tick).
    /// * `max_turn_acceleration`: Upper bound on the magnitude of a commanded turn acceleration.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::InvalidConfiguration)` if any maximum is
    /// negative or not finite.
    pub fn new(
        max_speed: f64,
        max_acceleration: f64,
        max_turn_rate: f64,
        max_turn_acceleration: f64,
    ) -> Result<Self, KinematicsError> {
        fn check(value: f64, msg: &'static str) -> Result<f64, KinematicsError> {
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(KinematicsError::InvalidConfiguration(msg))
            }
        }

        Ok(Limits {
            max_speed: check(max_speed, "max speed must be finite and non-negative")?,
            max_acceleration: check(max_acceleration, "max acceleration must be finite and non-negative")?,
            max_turn_rate: check(max_turn_rate, "max turn rate must be finite and non-negative")?,
            max_turn_acceleration: check(
                max_turn_acceleration,
                "max turn acceleration must be finite and non-negative",
            )?,
        })
    }

    /// Returns the maximum speed.
    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Returns the maximum linear acceleration.
    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    /// Returns the maximum turn rate.
    pub fn max_turn_rate(&self) -> f64 {
        self.max_turn_rate
    }

    /// Returns the maximum turn acceleration.
    pub fn max_turn_acceleration(&self) -> f64 {
        self.max_turn_acceleration
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Limits (v: {:.2}, a: {:.2}, ω: {:.2}, α: {:.2})",
            self.max_speed, self.max_acceleration, self.max_turn_rate, self.max_turn_acceleration
        )
    }
}

/// Mutable state of the simulated robot.
///
/// Speed is kept non-negative, the turn rate within its limit, and the
/// velocity angle in `[0, 360)`. Only the [`Integrator`] advances it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotState {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) heading: f64,
    pub(crate) speed: f64,
    pub(crate) turn_rate: f64,
    pub(crate) velocity_angle: f64,
    pub(crate) acceleration: f64,
    pub(crate) turn_acceleration: f64,
    pub(crate) limits: Limits,
}

impl RobotState {
    /// A robot at rest at `(x, y)` facing `heading`.
    pub fn new(x: f64, y: f64, heading: f64, limits: Limits) -> Self {
        RobotState {
            x,
            y,
            heading,
            speed: 0.0,
            turn_rate: 0.0,
            velocity_angle: 0.0,
            acceleration: 0.0,
            turn_acceleration: 0.0,
            limits,
        }
    }

    /// Seed the initial motion.
    ///
    /// `speed` is clamped into `[0, max_speed]`, `turn_rate` to
    /// `±max_turn_rate`, and `velocity_angle` is wrapped into `[0, 360)`.
    pub fn with_motion(mut self, speed: f64, turn_rate: f64, velocity_angle: f64) -> Self {
        self.speed = speed.clamp(0.0, self.limits.max_speed);
        self.turn_rate = turn_rate.clamp(-self.limits.max_turn_rate, self.limits.max_turn_rate);
        self.velocity_angle = wrap_degrees(velocity_angle);
        self
    }

    /// Set the one-shot inputs for the next tick.
    ///
    /// Each input is clamped to its configured maximum magnitude. Both are
    /// reset to zero after the tick that consumes them.
    pub fn command(&mut self, acceleration: f64, turn_acceleration: f64) {
        let a = self.limits.max_acceleration;
        let ta = self.limits.max_turn_acceleration;
        self.acceleration = acceleration.clamp(-a, a);
        self.turn_acceleration = turn_acceleration.clamp(-ta, ta);
    }

    /// Current pose.
    pub fn pose(&self) -> Pose {
        Pose::new(self.x, self.y, self.heading)
    }

    /// Plane x position.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Plane y position.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Body orientation (degrees).
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Current speed, never negative.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Signed turn rate (degrees per tick).
    pub fn turn_rate(&self) -> f64 {
        self.turn_rate
    }

    /// Direction of travel (degrees), in `[0, 360)`.
    pub fn velocity_angle(&self) -> f64 {
        self.velocity_angle
    }

    /// Pending linear acceleration input.
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Pending turn acceleration input.
    pub fn turn_acceleration(&self) -> f64 {
        self.turn_acceleration
    }

    /// The configured maxima.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v: {:.2} @ {:.2} deg, ω: {:.2}",
            self.pose(),
            self.speed,
            self.velocity_angle,
            self.turn_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn default_limits() -> Limits {
        Limits::new(20.0, 1.0, 3.35, 1.0).unwrap()
    }

    #[test]
    fn test_wrap_degrees() {
        assert!((wrap_degrees(0.0) - 0.0).abs() < EPSILON);
        assert!((wrap_degrees(360.0) - 0.0).abs() < EPSILON);
        assert!((wrap_degrees(370.0) - 10.0).abs() < EPSILON);
        assert!((wrap_degrees(-10.0) - 350.0).abs() < EPSILON);
        assert!((wrap_degrees(-720.0) - 0.0).abs() < EPSILON);
        assert!((wrap_degrees(540.0) - 180.0).abs() < EPSILON);
        // -1e-17 + 360 rounds to 360.0
        assert_eq!(wrap_degrees(-1e-17), 0.0);
    }

    #[test]
    fn test_limits_constructor() {
        let limits = default_limits();
        assert_eq!(limits.max_speed(), 20.0);
        assert_eq!(limits.max_acceleration(), 1.0);
        assert_eq!(limits.max_turn_rate(), 3.35);
        assert_eq!(limits.max_turn_acceleration(), 1.0);
        assert!(Limits::new(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_limits_reject_negative() {
        assert!(matches!(
            Limits::new(-1.0, 1.0, 3.35, 1.0),
            Err(KinematicsError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Limits::new(20.0, 1.0, -3.35, 1.0),
            Err(KinematicsError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_limits_reject_non_finite() {
        assert!(Limits::new(f64::NAN, 1.0, 3.35, 1.0).is_err());
        assert!(Limits::new(20.0, f64::INFINITY, 3.35, 1.0).is_err());
        assert!(Limits::new(20.0, 1.0, 3.35, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_with_motion_clamps_into_invariant() {
        let state = RobotState::new(0.0, 0.0, 0.0, default_limits()).with_motion(50.0, -10.0, -90.0);
        assert_eq!(state.speed(), 20.0);
        assert_eq!(state.turn_rate(), -3.35);
        assert!((state.velocity_angle() - 270.0).abs() < EPSILON);

        let state = RobotState::new(0.0, 0.0, 0.0, default_limits()).with_motion(-5.0, 0.0, 0.0);
        assert_eq!(state.speed(), 0.0);
    }

    #[test]
    fn test_command_clamps_inputs() {
        let mut state = RobotState::new(0.0, 0.0, 0.0, default_limits());
        state.command(5.0, -7.0);
        assert_eq!(state.acceleration(), 1.0);
        assert_eq!(state.turn_acceleration(), -1.0);
        state.command(0.25, 0.5);
        assert_eq!(state.acceleration(), 0.25);
        assert_eq!(state.turn_acceleration(), 0.5);
    }

    #[test]
    fn test_pose_behind_heading_up() {
        // Heading 0 is straight up, so the rear point is directly below.
        let (tx, ty) = Pose::new(1.0, 2.0, 0.0).behind(0.25);
        assert!((tx - 1.0).abs() < EPSILON);
        assert!((ty - 1.75).abs() < EPSILON);
    }

    #[test]
    fn test_pose_behind_heading_left() {
        // Heading 90 faces -x (counter-clockwise from up); the rear is at +x.
        let (tx, ty) = Pose::new(0.0, 0.0, 90.0).behind(0.25);
        assert!((tx - 0.25).abs() < EPSILON);
        assert!(ty.abs() < EPSILON);
    }
}
