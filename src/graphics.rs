use gridwalk_geometry::{Color, Point, Rect, RenderSink};
use gridwalk_navigation::PathOffset;
use macroquad::prelude as mq;

use crate::config::WindowSettings;
use crate::simulation::World;

const BACKGROUND: mq::Color = mq::Color::new(0.12, 0.12, 0.14, 1.0);
const WALL: mq::Color = mq::Color::new(0.35, 0.35, 0.4, 1.0);
const WALL_HIT: mq::Color = mq::Color::new(0.85, 0.25, 0.25, 1.0);
const GRID_LINE: mq::Color = mq::Color::new(1.0, 1.0, 1.0, 0.05);

/// Draws geometry primitives with macroquad's immediate-mode API.
pub struct MacroquadSink;

fn to_mq(color: Color) -> mq::Color {
    mq::Color::from_rgba(color.r, color.g, color.b, color.a)
}

impl RenderSink for MacroquadSink {
    fn draw_line(&mut self, start: Point, end: Point, width: f32, color: Color) {
        mq::draw_line(start.x as f32, start.y as f32, end.x as f32, end.y as f32, width, to_mq(color));
    }

    fn draw_circle(&mut self, center: Point, radius: f64, line_width: f32, color: Color) {
        if line_width <= 0.0 {
            mq::draw_circle(center.x as f32, center.y as f32, radius as f32, to_mq(color));
        } else {
            mq::draw_circle_lines(center.x as f32, center.y as f32, radius as f32, line_width, to_mq(color));
        }
    }
}

fn fill_rect(rect: &Rect, color: mq::Color) {
    mq::draw_rectangle(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32, color);
}

/// Window settings used before the configuration file is read.
pub fn window_conf() -> mq::Conf {
    window_conf_from(&WindowSettings {
        title: "Gridwalk".to_string(),
        width: 640,
        height: 480,
    })
}

pub fn window_conf_from(window: &WindowSettings) -> mq::Conf {
    mq::Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        high_dpi: true,
        ..Default::default()
    }
}

/// Renders one frame of the world.
pub fn draw_world(world: &World, sink: &mut MacroquadSink) {
    mq::clear_background(BACKGROUND);

    let grid = world.finder.grid();
    let cell = world.finder.cell_size() as f32;
    for x in 0..=grid.width() {
        let x = x as f32 * cell;
        mq::draw_line(x, 0.0, x, grid.height() as f32 * cell, 1.0, GRID_LINE);
    }
    for y in 0..=grid.height() {
        let y = y as f32 * cell;
        mq::draw_line(0.0, y, grid.width() as f32 * cell, y, 1.0, GRID_LINE);
    }

    let hits = world.ray_hits();
    for wall in &world.walls {
        let hit = hits.iter().any(|h| std::ptr::eq(*h, wall));
        fill_rect(wall, if hit { WALL_HIT } else { WALL });
    }

    world.finder.draw_path(sink, Color::WHITE, 3.0, PathOffset::CellCenter);
    for checkpoint in world.finder.checkpoints() {
        fill_rect(checkpoint, to_mq(Color::BLUE));
    }

    world.ray.draw(sink);
    world.agent.body.draw(sink);

    let status = match world.current_target() {
        Some(target) => format!("heading to {target}"),
        None => "idle".to_string(),
    };
    mq::draw_text(&status, 8.0, mq::screen_height() - 8.0, 20.0, mq::WHITE);
}
