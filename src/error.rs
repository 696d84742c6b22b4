//! Error types for cloth construction and parameter tuning.

use core::fmt;

use crate::spring::SpringKind;

/// Errors that can occur while configuring a cloth.
///
/// All of these are detected before a step runs. A step itself never
/// fails; degenerate geometry is reported through
/// [`StepObserver`](crate::observer::StepObserver) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid dimensions must be at least 2x2.
    InvalidGridDimensions { width: usize, height: usize },
    /// Mass must be positive and finite.
    InvalidMass,
    /// Rest length of a spring kind is negative.
    InvalidRestLength { kind: SpringKind },
    /// A parameter is NaN or infinite.
    NonFiniteParameter { name: &'static str },
    /// Grid coordinate outside the lattice.
    NodeOutOfBounds { col: usize, row: usize, width: usize, height: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { width, height } => {
                write!(f, "grid must be at least 2x2 (got {}x{})", width, height)
            }
            ClothError::InvalidMass => write!(f, "mass must be positive and finite"),
            ClothError::InvalidRestLength { kind } => {
                write!(f, "{} spring rest length must not be negative", kind)
            }
            ClothError::NonFiniteParameter { name } => {
                write!(f, "parameter `{}` must be finite", name)
            }
            ClothError::NodeOutOfBounds { col, row, width, height } => {
                write!(f, "node ({}, {}) out of bounds (grid: {}x{})", col, row, width, height)
            }
        }
    }
}

impl core::error::Error for ClothError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_dimensions() {
        let err = ClothError::InvalidGridDimensions { width: 1, height: 5 };
        assert_eq!(err.to_string(), "grid must be at least 2x2 (got 1x5)");
    }

    #[test]
    fn display_names_spring_kind() {
        let err = ClothError::InvalidRestLength { kind: SpringKind::Bend };
        assert_eq!(err.to_string(), "bend spring rest length must not be negative");
    }
}
