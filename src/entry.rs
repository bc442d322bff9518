//! Immutable `(index, element)` pairs used as builder input and as an iteration view.
//!
//! Positions are 1-based. Entries with a zero index, row or column cannot be constructed
//! or deserialized.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{LinearError, Position, Result};

/// An element of a vector together with its 1-based index.
///
/// Entries order by index first, so sorting a collection of entries sorts it by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VectorEntry<E> {
    index: usize,
    element: E,
}

impl<E> VectorEntry<E> {
    /// Pairs `element` with `index`, which must be at least 1.
    ///
    /// Whether `index` fits a particular vector is checked by the consumer.
    pub fn try_new(index: usize, element: E) -> Result<Self> {
        if index == 0 {
            return Err(LinearError::ZeroPosition(Position::Index(index)));
        }
        Ok(VectorEntry { index, element })
    }

    /// Pairs `element` with an index already known to be 1-based.
    pub(crate) fn new(index: usize, element: E) -> Self {
        debug_assert!(index > 0);
        VectorEntry { index, element }
    }

    /// The 1-based index.
    pub fn index(&self) -> usize {
        self.index
    }
    /// The element stored at the index.
    pub fn element(&self) -> &E {
        &self.element
    }
    /// Splits the entry into its parts.
    pub fn into_parts(self) -> (usize, E) {
        (self.index, self.element)
    }
}

impl<E: fmt::Display> fmt::Display for VectorEntry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.element)
    }
}

#[derive(Deserialize)]
#[serde(rename = "VectorEntry")]
struct RawVectorEntry<E> {
    index: usize,
    element: E,
}

impl<'de, E> Deserialize<'de> for VectorEntry<E>
where
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let RawVectorEntry { index, element } = RawVectorEntry::<E>::deserialize(deserializer)?;
        Self::try_new(index, element).map_err(D::Error::custom)
    }
}

/// An element of a matrix together with its 1-based `(row, column)` cell.
///
/// Entries order row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MatrixEntry<E> {
    row: usize,
    column: usize,
    element: E,
}

impl<E> MatrixEntry<E> {
    /// Pairs `element` with the cell `(row, column)`. Both must be at least 1.
    pub fn try_new(row: usize, column: usize, element: E) -> Result<Self> {
        if row == 0 || column == 0 {
            return Err(LinearError::ZeroPosition(Position::Cell(row, column)));
        }
        Ok(MatrixEntry {
            row,
            column,
            element,
        })
    }

    pub(crate) fn new(row: usize, column: usize, element: E) -> Self {
        debug_assert!(row > 0 && column > 0);
        MatrixEntry {
            row,
            column,
            element,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }
    pub fn column(&self) -> usize {
        self.column
    }
    /// The element stored in the cell.
    pub fn element(&self) -> &E {
        &self.element
    }
    /// Splits the entry into `(row, column, element)`.
    pub fn into_parts(self) -> (usize, usize, E) {
        (self.row, self.column, self.element)
    }
}

impl<E: fmt::Display> fmt::Display for MatrixEntry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}): {}", self.row, self.column, self.element)
    }
}

#[derive(Deserialize)]
#[serde(rename = "MatrixEntry")]
struct RawMatrixEntry<E> {
    row: usize,
    column: usize,
    element: E,
}

impl<'de, E> Deserialize<'de> for MatrixEntry<E>
where
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let RawMatrixEntry {
            row,
            column,
            element,
        } = RawMatrixEntry::<E>::deserialize(deserializer)?;
        Self::try_new(row, column, element).map_err(D::Error::custom)
    }
}
