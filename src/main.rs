mod config;
mod graphics;
mod simulation;

use anyhow::Context;
use macroquad::prelude::{get_frame_time, next_frame, request_new_screen_size};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use graphics::{MacroquadSink, window_conf};
use simulation::World;

/// Longest step the simulation takes in one frame, in seconds.
const MAX_TICK: f64 = 0.05;

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Gridwalk starting");

    let mut world = match setup() {
        Ok(world) => world,
        Err(e) => {
            error!("Startup failed: {:?}", e);
            return;
        }
    };

    let mut sink = MacroquadSink;
    loop {
        let dt = f64::from(get_frame_time()).min(MAX_TICK);
        world.tick(dt);
        graphics::draw_world(&world, &mut sink);
        next_frame().await;
    }
}

fn setup() -> anyhow::Result<World> {
    let settings = config::load_settings().context("Failed to load configuration")?;
    let conf = graphics::window_conf_from(&settings.window);
    request_new_screen_size(conf.window_width as f32, conf.window_height as f32);
    World::from_settings(&settings).context("Failed to build the world")
}
