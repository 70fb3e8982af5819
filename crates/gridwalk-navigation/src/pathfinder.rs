//! Turns grid paths into pixel-space checkpoints and steers an entity along them.

use gridwalk_geometry::{Color, Movable, Point, Rect, RenderSink};
use tracing::{debug, info, warn};

use crate::astar::{AStar, MovementPolicy, PathSearch};
use crate::error::NavigationError;
use crate::map::{GridPoint, WalkabilityGrid};

/// Where the adapter is in the life of its current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathState {
    /// No path.
    #[default]
    Idle,
    /// A path was just computed and nothing has started following it.
    PathRequested,
    /// Checkpoints remain and an entity is moving toward them.
    Following,
}

/// Pixel shift applied to each waypoint's cell corner when drawing a path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PathOffset {
    /// Half a cell, so the line runs through cell centers.
    #[default]
    CellCenter,
    /// A fixed shift in pixels on both axes.
    Pixels(f64),
}

/// An entity whose facing can be written back by the adapter.
pub trait Steerable: Movable {
    /// Sets the entity's direction vector.
    fn set_direction(&mut self, direction: Point);
}

/// Pathfinding adapter over a fixed walkability grid.
///
/// The grid is read-only for the lifetime of the adapter. The waypoint list
/// and its checkpoints are created together by [`PathFinder::request_path`]
/// and cleared together once the last checkpoint is reached.
#[derive(Debug, Clone)]
pub struct PathFinder<S = AStar> {
    grid: WalkabilityGrid,
    cell_size: u32,
    policy: MovementPolicy,
    search: S,
    path: Vec<GridPoint>,
    checkpoints: Vec<Rect>,
    state: PathState,
}

impl PathFinder<AStar> {
    /// Builds an adapter from a `0`/`1` matrix using the default A* search.
    ///
    /// Fails on a malformed matrix or a zero cell size.
    pub fn new<R: AsRef<[u8]>>(
        matrix: &[R],
        cell_size: u32,
        allow_diagonal: bool,
    ) -> Result<Self, NavigationError> {
        Self::with_search(matrix, cell_size, allow_diagonal, AStar)
    }
}

impl<S: PathSearch> PathFinder<S> {
    /// Builds an adapter that delegates to a caller-supplied search.
    pub fn with_search<R: AsRef<[u8]>>(
        matrix: &[R],
        cell_size: u32,
        allow_diagonal: bool,
        search: S,
    ) -> Result<Self, NavigationError> {
        if cell_size == 0 {
            return Err(NavigationError::InvalidCellSize("cell size must be positive"));
        }
        let grid = WalkabilityGrid::from_matrix(matrix)?;
        let policy = MovementPolicy::from_diagonal(allow_diagonal);
        info!(
            width = grid.width(),
            height = grid.height(),
            cell_size,
            ?policy,
            "path finder ready"
        );
        Ok(Self {
            grid,
            cell_size,
            policy,
            search,
            path: Vec::new(),
            checkpoints: Vec::new(),
            state: PathState::Idle,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PathState {
        self.state
    }

    /// Waypoints of the current path, start to goal. Kept whole until the
    /// last checkpoint is reached.
    pub fn path(&self) -> &[GridPoint] {
        &self.path
    }

    /// Checkpoints not reached yet.
    pub fn checkpoints(&self) -> &[Rect] {
        &self.checkpoints
    }

    /// The walkability grid searched by this adapter.
    pub fn grid(&self) -> &WalkabilityGrid {
        &self.grid
    }

    /// Side of one grid cell in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Movement policy passed to the search.
    pub fn policy(&self) -> MovementPolicy {
        self.policy
    }

    /// True iff `cell` is inside the grid and walkable.
    pub fn validate_target(&self, cell: GridPoint) -> bool {
        self.grid.is_walkable(cell)
    }

    /// Top-left pixel of a cell.
    pub fn grid_to_pixel(&self, cell: GridPoint) -> Point {
        let size = f64::from(self.cell_size);
        Point::new(f64::from(cell.x) * size, f64::from(cell.y) * size)
    }

    /// Cell containing a pixel, using floor division.
    pub fn pixel_to_grid(&self, pixel: Point) -> GridPoint {
        let size = f64::from(self.cell_size);
        GridPoint::new((pixel.x / size).floor() as i32, (pixel.y / size).floor() as i32)
    }

    /// Pixel position of a cell's center (integer half cell).
    pub fn cell_center(&self, cell: GridPoint) -> Point {
        self.grid_to_pixel(cell) + Point::new(self.half_cell(), self.half_cell())
    }

    fn half_cell(&self) -> f64 {
        f64::from(self.cell_size / 2)
    }

    /// Runs the search and replaces the current path and its checkpoints.
    ///
    /// Each checkpoint is a `checkpoint_size` square centered on the
    /// waypoint's cell center, using integer pixel math. An unreachable or
    /// invalid target yields an empty path and leaves the adapter idle.
    pub fn request_path(
        &mut self,
        start: GridPoint,
        goal: GridPoint,
        checkpoint_size: u32,
    ) -> (&[GridPoint], &[Rect]) {
        self.path = self.search.find_path(&self.grid, start, goal, self.policy);
        self.checkpoints = self
            .path
            .iter()
            .map(|&cell| checkpoint_rect(cell, self.cell_size, checkpoint_size))
            .collect();

        if self.path.is_empty() {
            warn!(%start, %goal, "no path found");
            self.state = PathState::Idle;
        } else {
            info!(%start, %goal, waypoints = self.path.len(), "path computed");
            self.state = PathState::PathRequested;
        }
        (&self.path, &self.checkpoints)
    }

    /// Begins following the current path from `position`.
    pub fn start(&mut self, position: Point) -> Point {
        if self.checkpoints.is_empty() {
            self.state = PathState::Idle;
            return Point::ZERO;
        }
        self.state = PathState::Following;
        self.direction_to_next(position)
    }

    /// One tick of path following.
    ///
    /// Pops the first checkpoint when `position` is inside it, then returns
    /// the unit vector toward the cell center of the (new) first checkpoint's
    /// waypoint, which lies inside the checkpoint for any size. Returns
    /// [`Point::ZERO`] when no checkpoints remain, when the last one was just
    /// reached, or when `position` is exactly on the target center.
    pub fn advance(&mut self, position: Point) -> Point {
        let Some(first) = self.checkpoints.first() else {
            if self.state != PathState::Idle || !self.path.is_empty() {
                self.clear();
            }
            return Point::ZERO;
        };

        if first.contains_point(position) {
            let reached = self.checkpoints.remove(0);
            debug!(checkpoint = %reached, remaining = self.checkpoints.len(), "checkpoint reached");
            if self.checkpoints.is_empty() {
                debug!("path exhausted");
                self.clear();
                return Point::ZERO;
            }
        }

        self.state = PathState::Following;
        self.direction_to_next(position)
    }

    /// Reads the entity's position, advances and writes the direction back.
    pub fn steer<E: Steerable + ?Sized>(&mut self, entity: &mut E) -> Point {
        let direction = self.advance(entity.position());
        entity.set_direction(direction);
        direction
    }

    /// Drops the path and its checkpoints.
    pub fn clear(&mut self) {
        self.path.clear();
        self.checkpoints.clear();
        self.state = PathState::Idle;
    }

    /// Draws the current path as a polyline. Paths shorter than two
    /// waypoints draw nothing.
    pub fn draw_path<K: RenderSink + ?Sized>(
        &self,
        sink: &mut K,
        color: Color,
        width: f32,
        offset: PathOffset,
    ) {
        if self.path.len() < 2 {
            return;
        }
        let shift = match offset {
            PathOffset::CellCenter => self.half_cell(),
            PathOffset::Pixels(px) => px,
        };
        let points: Vec<Point> = self
            .path
            .iter()
            .map(|&cell| self.grid_to_pixel(cell) + Point::new(shift, shift))
            .collect();
        sink.draw_polyline(&points, width, color);
    }

    /// Waypoint of the first remaining checkpoint. Checkpoints are popped
    /// from the front while the path stays whole, so it sits at the same
    /// offset from the end.
    fn next_waypoint(&self) -> Option<GridPoint> {
        if self.checkpoints.is_empty() {
            return None;
        }
        self.path.get(self.path.len().checked_sub(self.checkpoints.len())?).copied()
    }

    fn direction_to_next(&self, position: Point) -> Point {
        match self.next_waypoint() {
            Some(cell) => (self.cell_center(cell) - position).normalize().unwrap_or(Point::ZERO),
            None => Point::ZERO,
        }
    }
}

fn checkpoint_rect(cell: GridPoint, cell_size: u32, size: u32) -> Rect {
    let cell_size = i64::from(cell_size);
    let half = cell_size / 2 - i64::from(size / 2);
    let left = i64::from(cell.x) * cell_size + half;
    let top = i64::from(cell.y) * cell_size + half;
    Rect::new(left as f64, top as f64, f64::from(size), f64::from(size))
}
