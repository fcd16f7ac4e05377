//! Waypoint records and their goal speed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw goal speed meaning "choose automatically".
pub const AUTO_SPEED: f64 = -1.0;

/// Goal speed at a waypoint.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum GoalSpeed {
    /// Speed is derived from the path.
    #[default]
    Auto,
    /// A fixed target speed.
    Target(f64),
}

impl GoalSpeed {
    /// Interpret a raw speed where [`AUTO_SPEED`] selects [`GoalSpeed::Auto`].
    pub fn from_raw(speed: f64) -> Self {
        if speed == AUTO_SPEED {
            GoalSpeed::Auto
        } else {
            GoalSpeed::Target(speed)
        }
    }

    /// The raw form, [`AUTO_SPEED`] for `Auto`.
    pub fn to_raw(self) -> f64 {
        match self {
            GoalSpeed::Auto => AUTO_SPEED,
            GoalSpeed::Target(v) => v,
        }
    }
}

/// A fixed point on the planned path.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Plane x position.
    pub x: f64,
    /// Plane y position.
    pub y: f64,
    /// Goal heading in degrees, 0 is straight up.
    pub heading: f64,
    /// Goal speed.
    pub speed: GoalSpeed,
}

impl Waypoint {
    /// Creates a new `Waypoint`.
    #[must_use]
    pub const fn new(x: f64, y: f64, heading: f64, speed: GoalSpeed) -> Self {
        Self { x, y, heading, speed }
    }

    /// A waypoint at `(x, y)` with heading 0 and an automatic speed.
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, GoalSpeed::Auto)
    }

    /// The `(x, y)` coordinate of the waypoint.
    pub fn coord(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.heading.is_finite()
    }
}
