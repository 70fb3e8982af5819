//! Tick-driven world: one agent following paths between configured targets.

use anyhow::{Context, Result};
use gridwalk_geometry::{Circle, Color, HasBounds, Movable, Point, Ray, Rect};
use gridwalk_navigation::{GridPoint, PathFinder, PathState, Steerable};
use tracing::{info, warn};

use crate::config::Settings;

/// Upper bound on movement sub-steps in one tick.
const MAX_SUBSTEPS: f64 = 1024.0;

/// The moving entity: a circle body with a facing vector.
#[derive(Debug, Clone)]
pub struct Agent {
    pub body: Circle,
    direction: Point,
    /// Pixels per second.
    pub speed: f64,
}

impl Agent {
    pub fn new(center: Point, radius: f64, speed: f64) -> Self {
        Self {
            body: Circle::new(center, radius).with_color(Color::ORANGE),
            direction: Point::ZERO,
            speed,
        }
    }

    /// Integrates one step of `dt` seconds along the current direction.
    pub fn integrate(&mut self, dt: f64) {
        let step = self.direction * (self.speed * dt);
        self.body.translate(step.x, step.y);
    }
}

impl Movable for Agent {
    fn position(&self) -> Point {
        self.body.center
    }

    fn direction(&self) -> Point {
        self.direction
    }
}

impl Steerable for Agent {
    fn set_direction(&mut self, direction: Point) {
        self.direction = direction;
    }
}

impl HasBounds for Agent {
    fn bounds(&self) -> Rect {
        self.body.to_rect()
    }
}

pub struct World {
    pub finder: PathFinder,
    pub agent: Agent,
    pub ray: Ray,
    /// Hit-regions of the blocked cells, for ray casts.
    pub walls: Vec<Rect>,
    targets: Vec<GridPoint>,
    next_target: usize,
    checkpoint_size: u32,
    failed_requests: usize,
}

impl World {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let grid = &settings.grid;
        let finder = PathFinder::new(&grid.matrix, grid.cell_size, grid.allow_diagonal)
            .context("Invalid grid configuration")?;

        let start = GridPoint::from((settings.agent.start[0], settings.agent.start[1]));
        if !finder.validate_target(start) {
            anyhow::bail!("Agent start cell {start} is outside the grid or blocked");
        }

        if grid.checkpoint_size == 0 {
            anyhow::bail!("Checkpoint size must be positive");
        }
        if !(settings.agent.speed.is_finite() && settings.agent.speed >= 0.0) {
            anyhow::bail!("Agent speed must be a non-negative number, got {}", settings.agent.speed);
        }

        let targets: Vec<GridPoint> = settings
            .targets
            .iter()
            .map(|&[x, y]| GridPoint::new(x, y))
            .filter(|&cell| {
                let valid = finder.validate_target(cell);
                if !valid {
                    warn!(%cell, "Skipping invalid target");
                }
                valid
            })
            .collect();

        let size = f64::from(finder.cell_size());
        let walls = finder
            .grid()
            .blocked_cells()
            .map(|cell| {
                let corner = finder.grid_to_pixel(cell);
                Rect::new(corner.x, corner.y, size, size)
            })
            .collect();

        let agent = Agent::new(finder.cell_center(start), settings.agent.radius, settings.agent.speed);
        let ray = Ray::new(agent.position(), Point::new(1.0, 0.0), settings.agent.ray_length)
            .with_color(Color::GREEN)
            .with_width(1.0);

        info!(%start, targets = targets.len(), "World ready");
        Ok(Self {
            finder,
            agent,
            ray,
            walls,
            targets,
            next_target: 0,
            checkpoint_size: grid.checkpoint_size,
            failed_requests: 0,
        })
    }

    /// One simulation step of `dt` seconds.
    ///
    /// Movement is split into sub-steps no longer than half a checkpoint, so
    /// the agent cannot jump over the checkpoint it is heading for.
    pub fn tick(&mut self, dt: f64) {
        if self.finder.state() == PathState::Idle {
            self.request_next_target();
        }

        let max_step = f64::from(self.checkpoint_size) / 2.0;
        let substeps = (self.agent.speed * dt / max_step).ceil().clamp(1.0, MAX_SUBSTEPS);
        let step_dt = dt / substeps;
        for _ in 0..substeps as usize {
            self.finder.steer(&mut self.agent);
            self.agent.integrate(step_dt);
        }

        let moving = self.agent.direction() != Point::ZERO;
        self.ray.follow(&self.agent, moving);
    }

    /// Walls the look-ahead ray currently crosses.
    pub fn ray_hits(&self) -> Vec<&Rect> {
        self.ray.cast(&self.walls)
    }

    pub fn current_target(&self) -> Option<GridPoint> {
        if self.finder.state() == PathState::Idle {
            return None;
        }
        self.finder.path().last().copied()
    }

    fn request_next_target(&mut self) {
        if self.targets.is_empty() || self.failed_requests >= self.targets.len() {
            return;
        }

        let goal = self.targets[self.next_target % self.targets.len()];
        self.next_target = (self.next_target + 1) % self.targets.len();

        let from = self.finder.pixel_to_grid(self.agent.position());
        let (path, _) = self.finder.request_path(from, goal, self.checkpoint_size);
        if path.is_empty() {
            self.failed_requests += 1;
            if self.failed_requests == self.targets.len() {
                warn!("No configured target is reachable, agent stays put");
            }
            return;
        }

        self.failed_requests = 0;
        let direction = self.finder.start(self.agent.position());
        self.agent.set_direction(direction);
    }
}
