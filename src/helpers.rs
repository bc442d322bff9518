use std::hash::Hash;

use itertools::{Itertools, iproduct};

use crate::error::{LinearError, Position, Result, Shape};

/// Checks that `index` lies in `1..=size`.
pub(crate) fn check_index(index: usize, size: usize) -> Result<()> {
    if (1..=size).contains(&index) {
        Ok(())
    } else {
        Err(LinearError::IndexOutOfRange {
            position: Position::Index(index),
            shape: Shape::Vector(size),
        })
    }
}

/// Checks that `(row, column)` lies in `{1..=rows} × {1..=columns}`.
pub(crate) fn check_cell(row: usize, column: usize, rows: usize, columns: usize) -> Result<()> {
    if (1..=rows).contains(&row) && (1..=columns).contains(&column) {
        Ok(())
    } else {
        Err(LinearError::IndexOutOfRange {
            position: Position::Cell(row, column),
            shape: Shape::Matrix(rows, columns),
        })
    }
}

/// Checks that two operands of a binary operation have the same shape.
pub(crate) fn check_same_shape(expected: Shape, actual: Shape) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(LinearError::SizeMismatch { expected, actual })
    }
}

/// Checks that the ascending `indices` are exactly `1, 2, ..., size`.
pub(crate) fn check_dense_indices<I>(indices: I, size: usize) -> Result<()>
where
    I: IntoIterator<Item = usize>,
{
    if indices.into_iter().eq(1..=size) {
        Ok(())
    } else {
        Err(LinearError::InvariantViolation(Shape::Vector(size)))
    }
}

/// Checks that the row-major `cells` are exactly `{1..=rows} × {1..=columns}`.
pub(crate) fn check_dense_cells<I>(cells: I, rows: usize, columns: usize) -> Result<()>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    if cells.into_iter().eq(iproduct!(1..=rows, 1..=columns)) {
        Ok(())
    } else {
        Err(LinearError::InvariantViolation(Shape::Matrix(rows, columns)))
    }
}

/// The first value that occurs more than once in `values`.
pub(crate) fn first_duplicate<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    values.into_iter().duplicates().next()
}

/// The largest value in `values`, or `floor` if none exceeds it.
/// Norm values are never negative, so the norm's zero serves as the floor.
pub(crate) fn max_or<T, I>(values: I, floor: T) -> T
where
    I: IntoIterator<Item = T>,
    T: PartialOrd,
{
    values
        .into_iter()
        .fold(floor, |max, value| if value > max { value } else { max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_bounds() {
        assert!(check_index(1, 3).is_ok());
        assert!(check_index(3, 3).is_ok());
        assert_eq!(
            check_index(0, 3),
            Err(LinearError::IndexOutOfRange {
                position: Position::Index(0),
                shape: Shape::Vector(3),
            })
        );
        assert!(check_index(4, 3).is_err());
        assert!(check_cell(2, 3, 2, 3).is_ok());
        assert!(check_cell(3, 1, 2, 3).is_err());
        assert!(check_cell(1, 0, 2, 3).is_err());
    }

    #[test]
    fn test_dense_index_sets() {
        assert!(check_dense_indices([1, 2, 3], 3).is_ok());
        assert_eq!(
            check_dense_indices([1, 3, 4], 3),
            Err(LinearError::InvariantViolation(Shape::Vector(3)))
        );
        assert!(check_dense_indices([1, 2], 3).is_err());
        assert!(check_dense_cells([(1, 1), (1, 2), (2, 1), (2, 2)], 2, 2).is_ok());
        assert!(check_dense_cells([(1, 1), (1, 2), (2, 2)], 2, 2).is_err());
    }

    #[test]
    fn test_first_duplicate() {
        assert_eq!(first_duplicate([1, 2, 3]), None);
        assert_eq!(first_duplicate([4, 1, 4, 1]), Some(4));
        assert_eq!(first_duplicate([(1, 2), (2, 1), (2, 1)]), Some((2, 1)));
    }

    #[test]
    fn test_max_or() {
        assert_eq!(max_or([1.0, 3.5, 2.0], 0.0), 3.5);
        assert_eq!(max_or(Vec::<f64>::new(), 0.0), 0.0);
    }
}
