//! This module defines the error types used by the `gridwalk-navigation` crate.

#![warn(missing_docs)]

/// Error type for navigation operations.
///
/// Construction errors are fatal for the value being built. Unreachable
/// targets are not errors; they produce an empty path.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when the matrix has no rows, empty rows or rows of different lengths.
    InvalidDimensions(&'static str),
    /// Error for a matrix value that is neither `0` (blocked) nor `1` (walkable).
    InvalidCellValue {
        /// Row index of the offending value.
        row: usize,
        /// Column index of the offending value.
        col: usize,
        /// The value found.
        value: u8,
    },
    /// Error for an invalid pixel size of a grid cell.
    /// This variant is returned when the cell size is zero.
    InvalidCellSize(&'static str),
    /// Error for out-of-bounds access.
    /// This variant is returned when reading a cell outside the grid.
    OutOfBounds(&'static str),
}

impl core::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NavigationError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            NavigationError::InvalidCellValue { row, col, value } => write!(
                f,
                "Invalid cell value {} at row {}, column {}: matrix values must be either 0 or 1",
                value, row, col
            ),
            NavigationError::InvalidCellSize(msg) => write!(f, "Invalid cell size: {}", msg),
            NavigationError::OutOfBounds(msg) => write!(f, "Grid access out of bounds: {}", msg),
        }
    }
}

impl core::error::Error for NavigationError {}
