use std::time::Duration;

use anyhow::Context;
use spin_sleep::SpinSleeper;
use tracing::{debug, info};

use trailbot_kinematics::{Pose, TickKind};
use trailbot_path::Path;

use crate::clock::{Clock, ManualClock, SystemClock};
use crate::settings::AppConfig;
use crate::sim::Simulation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub idle_ticks: u64,
    /// Path length actually travelled.
    pub distance: f64,
    pub final_pose: Pose,
    pub final_speed: f64,
}

fn frame_interval(target_fps: f64) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps)
}

/// Tick `sim` `ticks` times, sleeping `pace` between ticks when given.
pub fn drive<C: Clock>(sim: &mut Simulation<C>, ticks: u64, pace: Option<Duration>) -> anyhow::Result<RunSummary> {
    let sleeper = SpinSleeper::new(10_000);
    let mut idle_ticks = 0;
    let mut distance = 0.0;
    let mut last = sim.state().pose();

    for _ in 0..ticks {
        let out = sim.tick()?;
        if out.kind == TickKind::Idle {
            idle_ticks += 1;
        }
        distance += ((out.pose.x - last.x).powi(2) + (out.pose.y - last.y).powi(2)).sqrt();
        last = out.pose;
        debug!(tick = out.tick, pose = %out.pose, speed = out.speed, "Headless tick");

        if let Some(interval) = pace {
            sleeper.sleep(interval);
        }
    }

    Ok(RunSummary {
        ticks: sim.ticks(),
        idle_ticks,
        distance,
        final_pose: sim.state().pose(),
        final_speed: sim.state().speed(),
    })
}

pub fn run(config: &AppConfig, path: Path) -> anyhow::Result<RunSummary> {
    let interval = frame_interval(config.robot.target_fps);
    info!(ticks = config.run.ticks, pace = config.run.pace, waypoints = path.len(), "Headless run starting");

    let summary = if config.run.pace {
        let mut sim = Simulation::from_config(&config.robot, &config.trail, path, SystemClock::new())
            .context("failed to build simulation")?;
        drive(&mut sim, config.run.ticks, Some(interval))?
    } else {
        let mut sim = Simulation::from_config(&config.robot, &config.trail, path, ManualClock::new(interval))
            .context("failed to build simulation")?;
        drive(&mut sim, config.run.ticks, None)?
    };

    info!(
        ticks = summary.ticks,
        idle = summary.idle_ticks,
        distance = summary.distance,
        final_pose = %summary.final_pose,
        "Headless run finished"
    );
    Ok(summary)
}
