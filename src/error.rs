//! Errors raised by vector, matrix and builder operations.
//!
//! Every variant is a precondition violation on the caller's side; nothing here is retried
//! or recovered internally.

use std::fmt;

use thiserror::Error;

/// A 1-based location inside a vector or matrix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    /// An index into a vector.
    Index(usize),
    /// A `(row, column)` cell of a matrix.
    Cell(usize, usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Cell(row, column) => write!(f, "({row}, {column})"),
        }
    }
}

/// The dimensions of a vector or matrix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A vector of the given size.
    Vector(usize),
    /// A matrix with the given number of rows and columns.
    Matrix(usize, usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector(size) => write!(f, "size {size}"),
            Self::Matrix(rows, columns) => write!(f, "{rows}x{columns}"),
        }
    }
}

/// Error type for invalid vector and matrix operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum LinearError {
    /// A binary operation was given operands of incompatible shapes.
    #[error("shape mismatch: expected {expected} but was {actual}")]
    SizeMismatch {
        /// The shape the operation required.
        expected: Shape,
        /// The shape that was supplied.
        actual: Shape,
    },
    /// A lookup fell outside the 1-based index range.
    #[error("position {position} is out of range for {shape}")]
    IndexOutOfRange {
        /// The requested position.
        position: Position,
        /// The shape that was indexed.
        shape: Shape,
    },
    /// Nothing to construct from.
    #[error("cannot construct from an empty set of entries")]
    EmptyConstruction,
    /// A position with a zero index, row or column.
    #[error("position {0} is not 1-based")]
    ZeroPosition(Position),
    /// A builder received a position beyond its declared shape.
    #[error("position {position} exceeds the declared {shape}")]
    IndexOverflow {
        /// The offending position.
        position: Position,
        /// The declared shape.
        shape: Shape,
    },
    /// Two entries were supplied for the same position.
    #[error("position {0} was supplied more than once")]
    DuplicateIndex(Position),
    /// The index set is not exactly the dense set for the shape.
    #[error("index set does not match the dense index set of {0}")]
    InvariantViolation(Shape),
    /// The operation is only defined for square matrices.
    #[error("operation requires a square matrix but was {0}")]
    NotSquare(Shape),
    /// The matrix has no inverse.
    #[error("matrix is singular")]
    Singular,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinearError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LinearError::SizeMismatch {
            expected: Shape::Vector(3),
            actual: Shape::Vector(2),
        };
        assert_eq!(
            err.to_string(),
            "shape mismatch: expected size 3 but was size 2"
        );
        let err = LinearError::IndexOutOfRange {
            position: Position::Cell(3, 1),
            shape: Shape::Matrix(2, 2),
        };
        assert_eq!(err.to_string(), "position (3, 1) is out of range for 2x2");
        assert_eq!(
            LinearError::DuplicateIndex(Position::Index(4)).to_string(),
            "position 4 was supplied more than once"
        );
        assert_eq!(
            LinearError::ZeroPosition(Position::Cell(0, 2)).to_string(),
            "position (0, 2) is not 1-based"
        );
    }
}
