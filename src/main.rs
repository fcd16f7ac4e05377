mod clock; // wall-clock and scripted tick intervals
mod graphics; // macroquad window backend
mod headless; // windowless runs
mod render; // backend-independent frame description
mod settings; // layered TOML / env configuration
mod sim; // simulation driver
mod trail;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

use trailbot_path::Path;

use clock::SystemClock;
use sim::Simulation;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Trailbot starting...");

    let config = settings::load_config().context("failed to load configuration")?;
    let path = Path::demo();

    if config.run.headless {
        headless::run(&config, path)?;
        return Ok(());
    }

    let sim = Simulation::from_config(&config.robot, &config.trail, path, SystemClock::new())
        .context("failed to build simulation")?;

    info!(drivetrain = ?config.robot.drivetrain, "Opening visualization window");
    macroquad::Window::from_config(
        graphics::window_conf(&config.window),
        graphics::run_visualization_loop(sim, config.window.clone()),
    );

    info!("Trailbot finished.");
    Ok(())
}
