#![warn(missing_docs)]

//! Error types for the geometry library.
//!
//! Only degenerate inputs and construction-time violations are errors.
//! Parallel lines and undefined slopes are ordinary `None` results.

use core::fmt;

/// Errors that can occur in geometric operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The operation has no defined result for this input.
    /// Returned for zero-length vectors that would have to be normalized,
    /// such as circles sharing a center in [`Circle::clip`](crate::Circle::clip).
    DegenerateGeometry(&'static str),
    /// The input dimensions do not describe the requested shape.
    /// Returned when building a circle from a non-square rectangle.
    MismatchedDimensions(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DegenerateGeometry(msg) => write!(f, "Undefined geometry: {}", msg),
            GeometryError::MismatchedDimensions(msg) => write!(f, "Mismatched dimensions: {}", msg),
        }
    }
}

impl core::error::Error for GeometryError {}
