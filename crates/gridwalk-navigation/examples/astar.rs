use gridwalk_navigation::astar::astar_search_detailed;
use gridwalk_navigation::{GridPoint, MovementPolicy, WalkabilityGrid};

fn main() {
    let rows: [[u8; 8]; 6] = [
        [1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 0, 0, 0, 0, 1, 1],
        [1, 1, 1, 1, 1, 0, 1, 1],
        [0, 0, 0, 0, 1, 0, 1, 1],
        [1, 1, 1, 1, 1, 0, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1],
    ];
    let grid = match WalkabilityGrid::from_matrix(&rows) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("invalid grid: {e}");
            return;
        }
    };
    println!("Grid ({}x{}):\n{grid}", grid.width(), grid.height());

    let start = GridPoint::new(0, 4);
    let goal = GridPoint::new(7, 0);

    for policy in [MovementPolicy::Orthogonal, MovementPolicy::Diagonal] {
        let result = astar_search_detailed(&grid, start, goal, policy);
        println!("{policy:?}: {result}");
        if let Some(path) = &result.path {
            let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("  {}", steps.join(" -> "));
        }
    }
}
