use anyhow::{Context, ensure};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

use trailbot_kinematics::{
    IntegrationOrder, Integrator, KinematicsError, Limits, TimeStep, integrator::DEFAULT_TARGET_FPS,
};

use crate::render::DrivetrainVariant;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
/// Names an extra TOML file layered over the defaults.
const CONFIG_PATH_VAR: &str = "TRAILBOT_CONFIG";
/// Environment overrides look like `TRAILBOT__ROBOT__MAX_SPEED=15`.
const ENV_PREFIX: &str = "TRAILBOT";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub x0: f64,
    pub y0: f64,
    pub heading0: f64,
    pub max_speed: f64,
    pub max_acceleration: f64,
    pub max_turn_rate: f64,
    pub max_turn_acceleration: f64,
    pub initial_speed: f64,
    pub initial_turn_rate: f64,
    pub initial_velocity_angle: f64,
    /// Drawn size multiplier.
    pub scaling: f64,
    pub drivetrain: DrivetrainVariant,
    pub use_real_time_step: bool,
    pub target_fps: f64,
    pub unit_scale: f64,
    pub integration_order: IntegrationOrder,
    /// Distance behind the body the trail is drawn from.
    pub trail_offset: f64,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            heading0: 0.0,
            max_speed: 20.0,
            max_acceleration: 1.0,
            max_turn_rate: 3.35,
            max_turn_acceleration: 1.0,
            initial_speed: 10.0,
            initial_turn_rate: 3.35,
            initial_velocity_angle: 0.0,
            scaling: 1.0,
            drivetrain: DrivetrainVariant::DiffySwerve,
            use_real_time_step: true,
            target_fps: DEFAULT_TARGET_FPS,
            unit_scale: 100.0,
            integration_order: IntegrationOrder::TurnFirst,
            trail_offset: 0.25,
        }
    }
}

impl RobotConfig {
    pub fn limits(&self) -> Result<Limits, KinematicsError> {
        Limits::new(self.max_speed, self.max_acceleration, self.max_turn_rate, self.max_turn_acceleration)
    }

    pub fn integrator(&self) -> Result<Integrator, KinematicsError> {
        Integrator::new(self.integration_order, self.unit_scale)
    }

    pub fn time_step(&self) -> TimeStep {
        if self.use_real_time_step {
            TimeStep::RealTime { target_fps: self.target_fps }
        } else {
            TimeStep::Fixed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// 0 keeps the whole trail.
    pub max_points: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { max_points: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub high_dpi: bool,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Trailbot".to_string(),
            width: 1200,
            height: 800,
            high_dpi: true,
            x_min: -6.0,
            x_max: 6.0,
            y_min: -4.0,
            y_max: 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Run without a window.
    pub headless: bool,
    /// Tick budget for headless runs.
    pub ticks: u64,
    /// Sleep to `target_fps` between headless ticks and sample the wall
    /// clock; otherwise every tick is one nominal frame.
    pub pace: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { headless: false, ticks: 1000, pace: false }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub robot: RobotConfig,
    pub trail: TrailConfig,
    pub window: WindowConfig,
    pub run: RunConfig,
}

impl AppConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        let r = &self.robot;
        ensure!(r.scaling.is_finite() && r.scaling > 0.0, "robot.scaling must be positive, got {}", r.scaling);
        ensure!(
            r.target_fps.is_finite() && r.target_fps > 0.0,
            "robot.target_fps must be positive, got {}",
            r.target_fps
        );
        ensure!(r.trail_offset.is_finite(), "robot.trail_offset must be finite");
        ensure!(
            [r.x0, r.y0, r.heading0, r.initial_speed, r.initial_turn_rate, r.initial_velocity_angle]
                .iter()
                .all(|v| v.is_finite()),
            "robot start pose and initial motion must be finite"
        );
        r.limits().context("robot limits")?;
        r.integrator().context("robot integrator")?;

        let w = &self.window;
        ensure!(w.width > 0 && w.height > 0, "window size must be positive, got {}x{}", w.width, w.height);
        ensure!(w.x_max > w.x_min, "window x range is empty: [{}, {}]", w.x_min, w.x_max);
        ensure!(w.y_max > w.y_min, "window y range is empty: [{}, {}]", w.y_min, w.y_max);
        Ok(())
    }
}

fn build(extra: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder =
        Config::builder().add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false));
    if let Some(path) = extra {
        builder = builder.add_source(File::new(path, FileFormat::Toml).required(true));
    }
    builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()?
        .try_deserialize()
}

pub fn load_config() -> anyhow::Result<AppConfig> {
    let extra = std::env::var(CONFIG_PATH_VAR).ok();
    info!(
        "Attempting to load configuration from {} (extra: {:?})",
        DEFAULT_CONFIG_PATH, extra
    );

    match build(extra.as_deref()) {
        Ok(config) => {
            info!("Successfully loaded configuration: {:?}", config);
            config.validate()?;
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e).context("invalid configuration")
        }
    }
}
