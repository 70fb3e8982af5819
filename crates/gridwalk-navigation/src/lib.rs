//! Grid pathfinding for sprites.
//!
//! A [`PathFinder`] owns a binary walkability grid, asks a [`PathSearch`]
//! (A* by default) for a route between two cells, and turns the route into
//! pixel-space checkpoints. A moving entity then calls
//! [`PathFinder::advance`] once per tick to get the unit direction toward
//! the next checkpoint.

pub mod astar;
pub mod error;
pub mod map;
pub mod pathfinder;

pub use astar::{AStar, MovementPolicy, PathResult, PathSearch};
pub use error::NavigationError;
pub use map::{Cell, GridPoint, WalkabilityGrid};
pub use pathfinder::{PathFinder, PathOffset, PathState, Steerable};
