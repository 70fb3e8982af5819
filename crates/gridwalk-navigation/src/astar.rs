/*

A* = f(n) = g(n) + h(n)

Where:
    n = a cell of the walkability grid
    g(n) = cost of the cheapest known route from start to n
    h(n) = estimated cost from n to the goal (heuristic)

Costs are integers: 10 per straight step, 14 per diagonal step.
The heuristic is Manhattan for 4-way movement and octile for 8-way
movement, both scaled the same way, so it never overestimates.

*/

use crate::map::{GridPoint, WalkabilityGrid};

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cost of one orthogonal step.
pub const STRAIGHT_COST: usize = 10;
/// Cost of one diagonal step (10 * sqrt(2), rounded).
pub const DIAGONAL_COST: usize = 14;

/// Which neighbors a path may step to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MovementPolicy {
    /// Up, down, left and right only.
    Orthogonal,
    /// Orthogonal steps plus the four diagonals, always allowed.
    #[default]
    Diagonal,
}

impl MovementPolicy {
    /// Maps the "allow diagonal movement" flag to a policy.
    pub fn from_diagonal(allow_diagonal: bool) -> Self {
        if allow_diagonal {
            MovementPolicy::Diagonal
        } else {
            MovementPolicy::Orthogonal
        }
    }
}

/// A shortest-path search over a walkability grid.
///
/// Implementations return the cells from `start` to `goal` inclusive, or an
/// empty vector when there is no route (including blocked or out-of-bounds
/// endpoints). They must not panic on bad input.
pub trait PathSearch {
    /// Finds a route from `start` to `goal`.
    fn find_path(
        &self,
        grid: &WalkabilityGrid,
        start: GridPoint,
        goal: GridPoint,
        policy: MovementPolicy,
    ) -> Vec<GridPoint>;
}

impl<F> PathSearch for F
where
    F: Fn(&WalkabilityGrid, GridPoint, GridPoint, MovementPolicy) -> Vec<GridPoint>,
{
    fn find_path(
        &self,
        grid: &WalkabilityGrid,
        start: GridPoint,
        goal: GridPoint,
        policy: MovementPolicy,
    ) -> Vec<GridPoint> {
        self(grid, start, goal, policy)
    }
}

/// The default [`PathSearch`]: A* with integer step costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl PathSearch for AStar {
    fn find_path(
        &self,
        grid: &WalkabilityGrid,
        start: GridPoint,
        goal: GridPoint,
        policy: MovementPolicy,
    ) -> Vec<GridPoint> {
        let result = astar_search_detailed(grid, start, goal, policy);
        debug!(
            %start,
            %goal,
            found = result.is_success(),
            waypoints = result.path_length,
            nodes_explored = result.nodes_explored,
            "A* search finished"
        );
        result.into_path().unwrap_or_default()
    }
}

/// Represents the result of an A* pathfinding operation with metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathResult {
    /// The computed path, if one was found.
    pub path: Option<Vec<GridPoint>>,
    /// The total cost of the path.
    pub total_cost: Option<usize>,
    /// The number of nodes explored during the search.
    pub nodes_explored: usize,
    /// The length of the path (number of waypoints).
    pub path_length: usize,
}

impl PathResult {
    /// Creates a new PathResult for a successful path.
    pub fn success(path: Vec<GridPoint>, total_cost: usize, nodes_explored: usize) -> Self {
        let path_length = path.len();
        Self {
            path: Some(path),
            total_cost: Some(total_cost),
            nodes_explored,
            path_length,
        }
    }

    /// Creates a new PathResult for a failed path search.
    pub fn failure(nodes_explored: usize) -> Self {
        Self {
            path: None,
            total_cost: None,
            nodes_explored,
            path_length: 0,
        }
    }

    /// Returns true if a path was found.
    pub fn is_success(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the path if one was found.
    pub fn into_path(self) -> Option<Vec<GridPoint>> {
        self.path
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(_) => write!(
                f,
                "PathResult {{ success: true, path_length: {}, total_cost: {}, nodes_explored: {} }}",
                self.path_length,
                self.total_cost.unwrap_or(0),
                self.nodes_explored
            ),
            None => write!(
                f,
                "PathResult {{ success: false, nodes_explored: {} }}",
                self.nodes_explored
            ),
        }
    }
}

/// Admissible distance estimate between two cells, in step-cost units.
pub fn heuristic(a: GridPoint, b: GridPoint, policy: MovementPolicy) -> usize {
    let dx = a.x.abs_diff(b.x) as usize;
    let dy = a.y.abs_diff(b.y) as usize;
    match policy {
        MovementPolicy::Orthogonal => STRAIGHT_COST * (dx + dy),
        MovementPolicy::Diagonal => {
            STRAIGHT_COST * dx.max(dy) + (DIAGONAL_COST - STRAIGHT_COST) * dx.min(dy)
        }
    }
}

fn step_cost(from: GridPoint, to: GridPoint) -> usize {
    if from.x != to.x && from.y != to.y {
        DIAGONAL_COST
    } else {
        STRAIGHT_COST
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct State {
    cost: usize,
    position: GridPoint,
}

// The priority queue depends on `Ord`.
// Flip the ordering on costs so the queue becomes a min-heap.
// Ties are broken on position to keep the search deterministic.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reconstructs the path from a map of `came_from` links.
fn reconstruct_path(came_from: &HashMap<GridPoint, GridPoint>, mut current: GridPoint) -> Vec<GridPoint> {
    let mut path = vec![current];
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Finds a path from a start cell to a goal cell using the A* algorithm.
///
/// # Returns
/// * `Option<Vec<GridPoint>>` - The path if found, `None` otherwise.
pub fn astar_search(
    grid: &WalkabilityGrid,
    start: GridPoint,
    goal: GridPoint,
    policy: MovementPolicy,
) -> Option<Vec<GridPoint>> {
    astar_search_detailed(grid, start, goal, policy).into_path()
}

/// Finds a path from a start cell to a goal cell using the A* algorithm with detailed results.
///
/// # Arguments
/// * `grid` - The walkability grid to plan in.
/// * `start` - Starting cell.
/// * `goal` - Goal cell.
/// * `policy` - Whether diagonal steps are allowed.
///
/// # Returns
/// * `PathResult` - Detailed pathfinding result with metadata.
pub fn astar_search_detailed(
    grid: &WalkabilityGrid,
    start: GridPoint,
    goal: GridPoint,
    policy: MovementPolicy,
) -> PathResult {
    let mut nodes_explored = 0;

    if !grid.is_walkable(start) || !grid.is_walkable(goal) {
        return PathResult::failure(nodes_explored);
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<GridPoint, GridPoint> = HashMap::new();

    let mut g_score: HashMap<GridPoint, usize> = HashMap::new();
    g_score.insert(start, 0);

    open_set.push(State {
        cost: heuristic(start, goal, policy),
        position: start,
    });

    while let Some(State { cost, position: current }) = open_set.pop() {
        let current_g = g_score[&current];
        // Stale queue entry, a cheaper route to `current` was already expanded.
        if cost > current_g + heuristic(current, goal, policy) {
            continue;
        }
        nodes_explored += 1;

        if current == goal {
            let path = reconstruct_path(&came_from, current);
            return PathResult::success(path, current_g, nodes_explored);
        }

        for neighbor in grid.walkable_neighbors(current, policy) {
            let tentative_g_score = current_g + step_cost(current, neighbor);

            if tentative_g_score < *g_score.get(&neighbor).unwrap_or(&usize::MAX) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g_score);
                open_set.push(State {
                    cost: tentative_g_score + heuristic(neighbor, goal, policy),
                    position: neighbor,
                });
            }
        }
    }

    PathResult::failure(nodes_explored)
}
