//! The per-tick kinematic update.
//!
//! [`Integrator::step`] advances a [`RobotState`] by one tick: the speed and
//! turn rate are pushed by the pending inputs and clamped to their limits, the
//! velocity angle is bent by the turn rate, and the position moves along the
//! velocity angle.

use core::fmt;
use core::time::Duration;
use libm::{copysign, cos, fabs, fmin, sin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{KinematicsError, RobotState, wrap_degrees};

/// Frame rate the real-time step normalizes against: one logical tick per
/// 30 ms frame.
pub const DEFAULT_TARGET_FPS: f64 = 1000.0 / 30.0;

/// How the elapsed-time scale of a tick is obtained.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeStep {
    /// Every tick is one logical tick, `dt_scale = 1`.
    Fixed,
    /// `dt_scale = target_fps × elapsed seconds`, which makes the motion rate
    /// independent of the actual frame rate. Rounding drift accumulates
    /// across ticks.
    RealTime {
        /// Frame rate at which one real frame equals one logical tick.
        target_fps: f64,
    },
}

impl TimeStep {
    /// Whether the tick needs a wall-clock sample.
    pub fn uses_clock(&self) -> bool {
        matches!(self, TimeStep::RealTime { .. })
    }

    /// The tick's time scale for a measured `elapsed` interval.
    ///
    /// `elapsed` is ignored in [`TimeStep::Fixed`] mode.
    pub fn dt_scale(&self, elapsed: Duration) -> f64 {
        match self {
            TimeStep::Fixed => 1.0,
            TimeStep::RealTime { target_fps } => target_fps * elapsed.as_secs_f64(),
        }
    }
}

impl Default for TimeStep {
    fn default() -> Self {
        TimeStep::RealTime { target_fps: DEFAULT_TARGET_FPS }
    }
}

/// Whether position is integrated before or after the turn of the same tick.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationOrder {
    /// Speed, turn rate and velocity angle are updated first; position then
    /// moves along the updated velocity.
    #[default]
    TurnFirst,
    /// Position moves along the previous tick's velocity before the turn is
    /// applied, so the drawn motion lags the turn rate by half a tick.
    PositionFirst,
}

/// What a call to [`Integrator::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// The state was advanced.
    Advanced,
    /// `dt_scale` was zero; nothing changed and pending inputs were kept.
    Idle,
}

/// Advances a [`RobotState`] one tick at a time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    order: IntegrationOrder,
    /// Divisor from speed units to plane units per tick.
    unit_scale: f64,
}

impl Integrator {
    /// Construct an integrator.
    ///
    /// # Arguments
    ///
    /// * `order`: Position/turn ordering within a tick.
    /// * `unit_scale`: Display-unit divisor applied to speed when moving the
    ///   position (100 for the real-time demo, 1 otherwise).
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::InvalidConfiguration)` if `unit_scale` is
    /// not finite and positive.
    pub fn new(order: IntegrationOrder, unit_scale: f64) -> Result<Self, KinematicsError> {
        if !(unit_scale.is_finite() && unit_scale > 0.0) {
            return Err(KinematicsError::InvalidConfiguration(
                "unit scale must be finite and positive",
            ));
        }
        Ok(Integrator { order, unit_scale })
    }

    /// Returns the position/turn ordering.
    pub fn order(&self) -> IntegrationOrder {
        self.order
    }

    /// Returns the display-unit divisor.
    pub fn unit_scale(&self) -> f64 {
        self.unit_scale
    }

    /// Advance `state` by one tick scaled by `dt_scale`.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::InvalidTimeScale)` if `dt_scale` is
    /// negative or not finite. The state is left untouched in that case.
    ///
    /// # Returns
    ///
    /// [`TickKind::Idle`] for a zero-length tick, [`TickKind::Advanced`]
    /// otherwise.
    pub fn step(&self, state: &mut RobotState, dt_scale: f64) -> Result<TickKind, KinematicsError> {
        if !dt_scale.is_finite() {
            return Err(KinematicsError::InvalidTimeScale("must be finite"));
        }
        if dt_scale < 0.0 {
            return Err(KinematicsError::InvalidTimeScale("must be non-negative"));
        }
        if dt_scale == 0.0 {
            return Ok(TickKind::Idle);
        }

        match self.order {
            IntegrationOrder::TurnFirst => {
                Self::update_velocity(state, dt_scale);
                self.update_position(state, dt_scale);
            }
            IntegrationOrder::PositionFirst => {
                self.update_position(state, dt_scale);
                Self::update_velocity(state, dt_scale);
            }
        }

        // reserved for a steering model
        state.heading += 0.0;

        state.acceleration = 0.0;
        state.turn_acceleration = 0.0;

        Ok(TickKind::Advanced)
    }

    fn update_position(&self, state: &mut RobotState, dt_scale: f64) {
        let va = state.velocity_angle.to_radians();
        let ds = state.speed / self.unit_scale * dt_scale;
        state.x += ds * sin(-va);
        state.y += ds * cos(va);
    }

    fn update_velocity(state: &mut RobotState, dt_scale: f64) {
        let limits = state.limits;

        state.speed = fmin(state.speed + state.acceleration * dt_scale, limits.max_speed);

        // The previous sign is re-applied, so the turn rate never crosses zero.
        state.turn_rate = copysign(
            fmin(fabs(state.turn_rate + state.turn_acceleration * dt_scale), limits.max_turn_rate),
            state.turn_rate,
        );

        state.velocity_angle += state.turn_rate * dt_scale;

        // Negative speed is forward motion in the opposite direction.
        if state.speed < 0.0 {
            state.speed = fmin(-state.speed, limits.max_speed);
            state.velocity_angle += 180.0;
        }

        state.velocity_angle = wrap_degrees(state.velocity_angle);
    }
}

impl fmt::Display for Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integrator ({:?}, unit scale: {:.2})", self.order, self.unit_scale)
    }
}
