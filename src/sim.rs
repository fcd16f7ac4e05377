use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info, warn};

use trailbot_kinematics::{Integrator, Pose, RobotState, TickKind, TimeStep};
use trailbot_path::Path;

use crate::clock::Clock;
use crate::render::{DrivetrainVariant, Scene, robot_primitives};
use crate::settings::{RobotConfig, TrailConfig};
use crate::trail::Trail;

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    pub tick: u64,
    pub pose: Pose,
    pub velocity_angle: f64,
    pub speed: f64,
    /// Rear point recorded before this tick's update.
    pub trail_point: (f64, f64),
    pub dt_scale: f64,
    pub kind: TickKind,
}

/// One robot on one path, advanced one tick per frame.
pub struct Simulation<C> {
    state: RobotState,
    integrator: Integrator,
    time_step: TimeStep,
    clock: C,
    path: Path,
    trail: Trail,
    variant: DrivetrainVariant,
    scaling: f64,
    trail_offset: f64,
    ticks: u64,
}

impl<C: Clock> Simulation<C> {
    pub fn from_config(robot: &RobotConfig, trail: &TrailConfig, path: Path, clock: C) -> anyhow::Result<Self> {
        let limits = robot.limits().context("invalid robot limits")?;
        let integrator = robot.integrator().context("invalid integrator settings")?;
        path.validate().context("invalid path")?;

        let state = RobotState::new(robot.x0, robot.y0, robot.heading0, limits).with_motion(
            robot.initial_speed,
            robot.initial_turn_rate,
            robot.initial_velocity_angle,
        );
        let trail = Trail::new(state.pose().behind(robot.trail_offset), trail.max_points);

        info!(%state, %integrator, time_step = ?robot.time_step(), waypoints = path.len(), "Simulation initialized");

        Ok(Self {
            state,
            integrator,
            time_step: robot.time_step(),
            clock,
            path,
            trail,
            variant: robot.drivetrain,
            scaling: robot.scaling,
            trail_offset: robot.trail_offset,
            ticks: 0,
        })
    }

    pub fn state(&self) -> &RobotState {
        &self.state
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Inputs consumed by the next tick.
    pub fn command(&mut self, acceleration: f64, turn_acceleration: f64) {
        self.state.command(acceleration, turn_acceleration);
    }

    fn speed_level(&self) -> f64 {
        let max = self.state.limits().max_speed();
        if max > 0.0 { self.state.speed() / max } else { 0.0 }
    }

    pub fn tick(&mut self) -> anyhow::Result<TickOutput> {
        let trail_point = self.state.pose().behind(self.trail_offset);
        self.trail.push(trail_point, self.speed_level());

        let elapsed = if self.time_step.uses_clock() { self.clock.elapsed() } else { Duration::ZERO };
        let dt_scale = self.time_step.dt_scale(elapsed);

        let kind = self
            .integrator
            .step(&mut self.state, dt_scale)
            .with_context(|| format!("tick {} failed", self.ticks))?;
        self.ticks += 1;

        if kind == TickKind::Idle {
            warn!(tick = self.ticks, "Zero-length tick, state unchanged");
        }
        debug!(tick = self.ticks, dt_scale, state = %self.state, trail_points = self.trail.len(), "Tick");

        Ok(TickOutput {
            tick: self.ticks,
            pose: self.state.pose(),
            velocity_angle: self.state.velocity_angle(),
            speed: self.state.speed(),
            trail_point,
            dt_scale,
            kind,
        })
    }

    /// The current frame for a renderer.
    pub fn scene(&self) -> Scene {
        let pose = self.state.pose();
        Scene {
            path: self.path.closed_polyline(),
            trail: self.trail.segments(),
            robot: robot_primitives(&pose, self.state.velocity_angle(), self.variant, self.scaling),
            pose: (pose.x, pose.y, pose.heading),
            speed: self.state.speed(),
        }
    }
}
