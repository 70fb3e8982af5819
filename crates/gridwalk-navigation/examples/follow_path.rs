use gridwalk_geometry::{Movable, Point};
use gridwalk_navigation::{GridPoint, PathFinder, PathState, Steerable};
use tracing_subscriber::EnvFilter;

const CELL_SIZE: u32 = 20;
const SPEED: f64 = 2.0;

struct Walker {
    position: Point,
    direction: Point,
}

impl Movable for Walker {
    fn position(&self) -> Point {
        self.position
    }

    fn direction(&self) -> Point {
        self.direction
    }
}

impl Steerable for Walker {
    fn set_direction(&mut self, direction: Point) {
        self.direction = direction;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    let matrix = [
        [1u8, 1, 1, 1, 1],
        [1, 0, 0, 0, 1],
        [1, 1, 1, 0, 1],
        [0, 0, 1, 0, 1],
        [1, 1, 1, 1, 1],
    ];
    let mut finder = match PathFinder::new(&matrix, CELL_SIZE, true) {
        Ok(finder) => finder,
        Err(e) => {
            eprintln!("invalid grid: {e}");
            return;
        }
    };

    let start = GridPoint::new(0, 0);
    let goal = GridPoint::new(0, 4);
    finder.request_path(start, goal, 4);

    let mut walker = Walker { position: finder.cell_center(start), direction: Point::ZERO };
    finder.start(walker.position);

    let mut tick = 0;
    while finder.state() != PathState::Idle && tick < 500 {
        finder.steer(&mut walker);
        walker.position += walker.direction * SPEED;
        if tick % 5 == 0 {
            println!(
                "tick {tick:>3}: at {} heading {} ({} checkpoints left)",
                walker.position,
                walker.direction,
                finder.checkpoints().len()
            );
        }
        tick += 1;
    }
    println!("arrived at {} after {tick} ticks", walker.position);
}
