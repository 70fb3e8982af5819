//! Grid-related functionality for navigation.
//!
//! This module provides the binary walkability grid and the integer cell
//! coordinates used to index it.

pub mod grid;
pub mod point_types;

pub use grid::{Cell, WalkabilityGrid};
pub use point_types::GridPoint;
