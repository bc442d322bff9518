//! Dense, immutable, 1-based matrices over any [`Field`].
//!
//! Elements are stored row-major. Like vectors, matrices are never empty and every operation
//! returns a new value.
//!
//! # Examples
//!
//! ```
//! use lineal::real::{BigIntegerMatrix, LongMatrix};
//! use num_bigint::BigInt;
//!
//! let m = LongMatrix::try_from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), -2);
//! assert_eq!(m.trace().unwrap(), 5);
//! assert_eq!(m.transpose().row(1).unwrap().elements(), &[1, 3]);
//!
//! let big = BigIntegerMatrix::try_from_rows(vec![
//!     vec![BigInt::from(2), BigInt::from(0)],
//!     vec![BigInt::from(0), BigInt::from(4)],
//! ])
//! .unwrap();
//! let inverse = big.inverse().unwrap();
//! assert_eq!(inverse[(2, 2)].to_string(), "1/4");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, Neg, RangeInclusive};

use itertools::{Itertools, iproduct};
use num_traits::Zero;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::builder::MatrixBuilder;
use crate::entry::MatrixEntry;
use crate::error::{LinearError, Position, Result, Shape};
use crate::field::{Field, NormedField, QuotientField};
use crate::helpers::{check_cell, check_dense_cells, check_same_shape, first_duplicate, max_or};
use crate::vector::Vector;

/// An immutable matrix whose arithmetic is supplied by the field `F`.
#[derive(Clone, Debug)]
pub struct Matrix<F: Field> {
    field: F,
    rows: usize,
    columns: usize,
    elements: Vec<F::Element>,
}

impl<F: Field> Matrix<F> {
    /// Wraps already validated row-major storage of `rows * columns` elements.
    pub(crate) fn from_dense(
        field: F,
        rows: usize,
        columns: usize,
        elements: Vec<F::Element>,
    ) -> Self {
        debug_assert!(rows > 0 && columns > 0 && elements.len() == rows * columns);
        Matrix {
            field,
            rows,
            columns,
            elements,
        }
    }

    /// Creates a matrix from its rows. All rows must have the same, non-zero length.
    pub fn try_from_rows(rows: Vec<Vec<F::Element>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(LinearError::EmptyConstruction);
        }
        if let Some(row) = rows.iter().find(|row| row.len() != columns) {
            return Err(LinearError::SizeMismatch {
                expected: Shape::Vector(columns),
                actual: Shape::Vector(row.len()),
            });
        }
        let row_count = rows.len();
        Ok(Self::from_dense(
            F::default(),
            row_count,
            columns,
            rows.into_iter().flatten().collect(),
        ))
    }

    /// Creates a matrix from a complete cell→element mapping.
    ///
    /// The shape is taken from the largest row and column; every cell inside it must be present.
    pub fn try_from_map(map: BTreeMap<(usize, usize), F::Element>) -> Result<Self> {
        let rows = map.keys().map(|&(row, _)| row).max().unwrap_or(0);
        let columns = map.keys().map(|&(_, column)| column).max().unwrap_or(0);
        if map.is_empty() {
            return Err(LinearError::EmptyConstruction);
        }
        if let Some(&(row, column)) = map.keys().find(|&&(row, column)| row == 0 || column == 0) {
            return Err(LinearError::IndexOutOfRange {
                position: Position::Cell(row, column),
                shape: Shape::Matrix(rows, columns),
            });
        }
        check_dense_cells(map.keys().copied(), rows, columns)?;
        Ok(Self::from_dense(
            F::default(),
            rows,
            columns,
            map.into_values().collect(),
        ))
    }

    /// Creates a matrix from entries in any order. Every cell must appear once.
    pub fn try_from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = MatrixEntry<F::Element>>,
    {
        let entries = entries.into_iter().collect_vec();
        if let Some((row, column)) =
            first_duplicate(entries.iter().map(|entry| (entry.row(), entry.column())))
        {
            return Err(LinearError::DuplicateIndex(Position::Cell(row, column)));
        }
        Self::try_from_map(
            entries
                .into_iter()
                .map(|entry| {
                    let (row, column, element) = entry.into_parts();
                    ((row, column), element)
                })
                .collect(),
        )
    }

    /// A builder for a matrix of the given shape.
    pub fn builder(rows: usize, columns: usize) -> Result<MatrixBuilder<F>> {
        MatrixBuilder::new(rows, columns)
    }

    /// The `size × size` identity matrix.
    pub fn identity(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LinearError::EmptyConstruction);
        }
        let field = F::default();
        let elements = iproduct!(1..=size, 1..=size)
            .map(|(row, column)| {
                if row == column {
                    field.one()
                } else {
                    field.zero()
                }
            })
            .collect();
        Ok(Self::from_dense(field, size, size, elements))
    }

    pub fn field(&self) -> F {
        self.field
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> Shape {
        Shape::Matrix(self.rows, self.columns)
    }

    pub fn row_indices(&self) -> RangeInclusive<usize> {
        1..=self.rows
    }

    pub fn column_indices(&self) -> RangeInclusive<usize> {
        1..=self.columns
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<F> {
        iproduct!(1..=self.rows, 1..=self.columns)
    }

    /// The elements in row-major order.
    pub fn elements(&self) -> &[F::Element] {
        &self.elements
    }

    /// The rows as slices.
    pub fn row_slices(&self) -> std::slice::Chunks<'_, F::Element> {
        self.elements.chunks(self.columns)
    }

    /// The entries in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = MatrixEntry<F::Element>> + '_ {
        self.cells()
            .zip(self.elements.iter().cloned())
            .map(|((row, column), element)| MatrixEntry::new(row, column, element))
    }

    #[inline]
    fn get(&self, row: usize, column: usize) -> &F::Element {
        &self.elements[(row - 1) * self.columns + (column - 1)]
    }

    /// The element in the 1-based cell `(row, column)`.
    pub fn element(&self, row: usize, column: usize) -> Result<&F::Element> {
        check_cell(row, column, self.rows, self.columns)?;
        Ok(self.get(row, column))
    }

    pub fn entry(&self, row: usize, column: usize) -> Result<MatrixEntry<F::Element>> {
        self.element(row, column)
            .map(|element| MatrixEntry::new(row, column, element.clone()))
    }

    /// The row at `index` as a vector.
    pub fn row(&self, index: usize) -> Result<Vector<F>> {
        check_cell(index, 1, self.rows, self.columns)?;
        let elements = self.column_indices().map(|c| self.get(index, c).clone());
        Ok(Vector::from_dense(self.field, elements.collect()))
    }

    /// The column at `index` as a vector.
    pub fn column(&self, index: usize) -> Result<Vector<F>> {
        check_cell(1, index, self.rows, self.columns)?;
        let elements = self.row_indices().map(|r| self.get(r, index).clone());
        Ok(Vector::from_dense(self.field, elements.collect()))
    }

    /// Whether some cell holds `element`.
    pub fn contains(&self, element: &F::Element) -> bool {
        self.elements.contains(element)
    }

    fn zip_with<G>(&self, other: &Self, op: G) -> Result<Self>
    where
        G: Fn(&F::Element, &F::Element) -> F::Element,
    {
        check_same_shape(self.shape(), other.shape())?;
        let elements = self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| op(a, b))
            .collect();
        Ok(Self::from_dense(self.field, self.rows, self.columns, elements))
    }

    pub(crate) fn map_into<G, M>(&self, field: G, op: M) -> Matrix<G>
    where
        G: Field,
        M: FnMut(&F::Element) -> G::Element,
    {
        Matrix::from_dense(
            field,
            self.rows,
            self.columns,
            self.elements.iter().map(op).collect(),
        )
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| self.field.add(a, b))
    }

    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| self.field.subtract(a, b))
    }

    /// The matrix product `self · other`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.columns != other.rows {
            return Err(LinearError::SizeMismatch {
                expected: Shape::Matrix(self.columns, other.columns),
                actual: other.shape(),
            });
        }
        let f = &self.field;
        let elements = iproduct!(self.row_indices(), other.column_indices())
            .map(|(r, c)| {
                f.sum(
                    self.column_indices()
                        .map(|k| f.multiply(self.get(r, k), other.get(k, c))),
                )
            })
            .collect();
        Ok(Self::from_dense(self.field, self.rows, other.columns, elements))
    }

    /// The matrix-vector product `self · vector`.
    pub fn multiply_vector(&self, vector: &Vector<F>) -> Result<Vector<F>> {
        check_same_shape(Shape::Vector(self.columns), vector.shape())?;
        let f = &self.field;
        let elements = self
            .row_slices()
            .map(|row| f.sum(row.iter().zip(vector.iter()).map(|(a, b)| f.multiply(a, b))))
            .collect();
        Ok(Vector::from_dense(self.field, elements))
    }

    pub fn scalar_multiply(&self, scalar: &F::Element) -> Self {
        self.map_into(self.field, |e| self.field.multiply(scalar, e))
    }

    pub fn negate(&self) -> Self {
        self.map_into(self.field, |e| self.field.negate(e))
    }

    pub fn transpose(&self) -> Self {
        let elements = iproduct!(self.column_indices(), self.row_indices())
            .map(|(c, r)| self.get(r, c).clone())
            .collect();
        Self::from_dense(self.field, self.columns, self.rows, elements)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    fn check_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinearError::NotSquare(self.shape()))
        }
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> Result<F::Element> {
        self.check_square()?;
        Ok(self
            .field
            .sum(self.row_indices().map(|i| self.get(i, i).clone())))
    }

    /// The matrix without the given row and column. No bounds checks.
    fn strike(&self, row: usize, column: usize) -> Self {
        let elements = self
            .cells()
            .zip(&self.elements)
            .filter(|&((r, c), _)| r != row && c != column)
            .map(|(_, element)| element.clone())
            .collect();
        Self::from_dense(self.field, self.rows - 1, self.columns - 1, elements)
    }

    /// The submatrix obtained by deleting `row` and `column` from a square matrix.
    pub fn minor(&self, row: usize, column: usize) -> Result<Self> {
        self.check_square()?;
        check_cell(row, column, self.rows, self.columns)?;
        if self.rows < 2 {
            return Err(LinearError::EmptyConstruction);
        }
        Ok(self.strike(row, column))
    }

    /// The determinant, by cofactor expansion along the first row.
    ///
    /// Only ring operations are used, so the result is exact for exact domains.
    pub fn determinant(&self) -> Result<F::Element> {
        self.check_square()?;
        log::trace!("expanding determinant of a {} matrix", self.shape());
        Ok(self.laplace())
    }

    fn laplace(&self) -> F::Element {
        let f = &self.field;
        match self.rows {
            1 => self.get(1, 1).clone(),
            2 => f.subtract(
                &f.multiply(self.get(1, 1), self.get(2, 2)),
                &f.multiply(self.get(1, 2), self.get(2, 1)),
            ),
            _ => self
                .column_indices()
                .filter(|&c| !f.is_zero(self.get(1, c)))
                .fold(f.zero(), |acc, c| {
                    let cofactor = stacker::maybe_grow(32 * 1024, 1024 * 1024, || {
                        self.strike(1, c).laplace()
                    });
                    let term = f.multiply(self.get(1, c), &cofactor);
                    if c % 2 == 1 {
                        f.add(&acc, &term)
                    } else {
                        f.subtract(&acc, &term)
                    }
                }),
        }
    }

    /// Whether the determinant is non-zero.
    pub fn is_invertible(&self) -> Result<bool> {
        Ok(!self.field.is_zero(&self.determinant()?))
    }

    fn all_cells<P>(&self, predicate: P) -> bool
    where
        P: Fn(usize, usize, &F::Element) -> bool,
    {
        self.cells()
            .zip(&self.elements)
            .all(|((r, c), element)| predicate(r, c, element))
    }

    /// Square with zeros below the diagonal.
    pub fn is_upper_triangular(&self) -> bool {
        self.is_square() && self.all_cells(|r, c, e| r <= c || self.field.is_zero(e))
    }

    /// Square with zeros above the diagonal.
    pub fn is_lower_triangular(&self) -> bool {
        self.is_square() && self.all_cells(|r, c, e| r >= c || self.field.is_zero(e))
    }

    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_upper_triangular() && self.is_lower_triangular()
    }

    pub fn is_identity(&self) -> bool {
        let one = self.field.one();
        self.is_diagonal()
            && self
                .row_indices()
                .all(|i| self.field.equal_by_comparing(self.get(i, i), &one))
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && self.all_cells(|r, c, e| self.field.equal_by_comparing(e, self.get(c, r)))
    }

    pub fn is_skew_symmetric(&self) -> bool {
        self.is_square()
            && self.all_cells(|r, c, e| {
                self.field
                    .equal_by_comparing(e, &self.field.negate(self.get(c, r)))
            })
    }

    /// Whether corresponding cells compare equal under [`Field::equal_by_comparing`].
    pub fn equals_by_comparing(&self, other: &Self) -> Result<bool> {
        check_same_shape(self.shape(), other.shape())?;
        Ok(self
            .elements
            .iter()
            .zip(&other.elements)
            .all(|(a, b)| self.field.equal_by_comparing(a, b)))
    }
}

impl<F: QuotientField> Matrix<F> {
    /// This matrix with every element embedded into the companion field.
    pub fn embed(&self) -> Matrix<F::Companion> {
        self.field.embed_matrix(self)
    }

    /// The inverse, computed by Gauss-Jordan elimination in the companion field.
    pub fn inverse(&self) -> Result<Matrix<F::Companion>> {
        self.check_square()?;
        let c = self.field.companion();
        let n = self.rows;
        let mut left = self.embed().row_slices().map(<[_]>::to_vec).collect_vec();
        let mut right = Matrix::<F::Companion>::identity(n)?
            .row_slices()
            .map(<[_]>::to_vec)
            .collect_vec();
        for col in 0..n {
            let pivot = (col..n)
                .find(|&r| !c.is_zero(&left[r][col]))
                .ok_or(LinearError::Singular)?;
            left.swap(col, pivot);
            right.swap(col, pivot);
            let p = left[col][col].clone();
            for j in 0..n {
                let (l, r) = (c.divide(&left[col][j], &p), c.divide(&right[col][j], &p));
                left[col][j] = l;
                right[col][j] = r;
            }
            for row in (0..n).filter(|&row| row != col) {
                let factor = left[row][col].clone();
                if c.is_zero(&factor) {
                    continue;
                }
                for j in 0..n {
                    let l = c.subtract(&left[row][j], &c.multiply(&factor, &left[col][j]));
                    let r = c.subtract(&right[row][j], &c.multiply(&factor, &right[col][j]));
                    left[row][j] = l;
                    right[row][j] = r;
                }
            }
        }
        Ok(Matrix::from_dense(c, n, n, right.into_iter().flatten().collect()))
    }
}

impl<F: NormedField> Matrix<F> {
    fn abs_sum<I>(&self, elements: I) -> F::Norm
    where
        I: Iterator<Item = F::Element>,
    {
        elements.fold(<F::Norm as Zero>::zero(), |acc, e| acc + self.field.abs(&e))
    }

    /// The largest column sum of absolute values (the 1-norm).
    pub fn max_abs_column_sum_norm(&self) -> F::Norm {
        max_or(
            self.column_indices()
                .map(|c| self.abs_sum(self.row_indices().map(|r| self.get(r, c).clone()))),
            <F::Norm as Zero>::zero(),
        )
    }

    /// The largest row sum of absolute values (the infinity norm).
    pub fn max_abs_row_sum_norm(&self) -> F::Norm {
        max_or(
            self.row_slices()
                .map(|row| self.abs_sum(row.iter().cloned())),
            <F::Norm as Zero>::zero(),
        )
    }

    /// Sum of squared absolute values of all cells.
    pub fn frobenius_norm_pow2(&self) -> F::NormPow2 {
        self.elements
            .iter()
            .fold(<F::NormPow2 as Zero>::zero(), |acc, e| {
                acc + self.field.abs_pow2(e)
            })
    }

    pub fn frobenius_norm(&self) -> F::Norm {
        self.field.sqrt(&self.frobenius_norm_pow2())
    }

    /// Largest absolute value of any cell.
    pub fn max_norm(&self) -> F::Norm {
        max_or(
            self.elements.iter().map(|e| self.field.abs(e)),
            <F::Norm as Zero>::zero(),
        )
    }
}

impl<F: Field> PartialEq for Matrix<F> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.elements == other.elements
    }
}

impl<F: Field> Eq for Matrix<F> where F::Element: Eq {}

impl<F: Field> Hash for Matrix<F>
where
    F::Element: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.columns.hash(state);
        self.elements.hash(state);
    }
}

impl<F: Field> Index<(usize, usize)> for Matrix<F> {
    type Output = F::Element;
    /// The element in the 1-based cell `(row, column)`. Panics if the cell is out of range.
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        match self.element(row, column) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<F: Field> Neg for Matrix<F> {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<F: Field> Neg for &Matrix<F> {
    type Output = Matrix<F>;
    fn neg(self) -> Matrix<F> {
        self.negate()
    }
}

impl<F: Field> fmt::Display for Matrix<F>
where
    F::Element: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .row_slices()
            .map(|row| format!("[{}]", row.iter().join(", ")));
        write!(f, "{}", rows.format("\n"))
    }
}

impl<F: Field> Serialize for Matrix<F>
where
    F::Element: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.row_slices())
    }
}

impl<'de, F: Field> Deserialize<'de> for Matrix<F>
where
    F::Element: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<F::Element>>::deserialize(deserializer)?;
        Self::try_from_rows(rows).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    use super::*;
    use crate::real::{BigIntegerMatrix, DoubleMatrix, LongMatrix, LongVector};

    fn longs(rows: &[&[i64]]) -> LongMatrix {
        LongMatrix::try_from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
    }

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_construction() {
        let m = longs(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!((m.rows(), m.columns()), (2, 3));
        assert_eq!(m.shape(), Shape::Matrix(2, 3));
        assert_eq!(m[(2, 1)], 4);
        assert_eq!(
            LongMatrix::try_from_rows(vec![]),
            Err(LinearError::EmptyConstruction)
        );
        assert_eq!(
            LongMatrix::try_from_rows(vec![vec![1, 2], vec![3]]),
            Err(LinearError::SizeMismatch {
                expected: Shape::Vector(2),
                actual: Shape::Vector(1),
            })
        );
    }

    #[test]
    fn test_construction_from_map_and_entries() {
        let map = BTreeMap::from([((1, 1), 1), ((1, 2), 2), ((2, 1), 3), ((2, 2), 4)]);
        assert_eq!(LongMatrix::try_from_map(map), Ok(longs(&[&[1, 2], &[3, 4]])));
        let gappy = BTreeMap::from([((1, 1), 1), ((2, 2), 4)]);
        assert_eq!(
            LongMatrix::try_from_map(gappy),
            Err(LinearError::InvariantViolation(Shape::Matrix(2, 2)))
        );
        let entries = [
            MatrixEntry::new(1, 1, 1),
            MatrixEntry::new(1, 1, 2),
        ];
        assert_eq!(
            LongMatrix::try_from_entries(entries),
            Err(LinearError::DuplicateIndex(Position::Cell(1, 1)))
        );
        let m = longs(&[&[5, 6], &[7, 8]]);
        assert_eq!(LongMatrix::try_from_entries(m.entries()), Ok(m));
    }

    #[test]
    fn test_lookup_out_of_range() {
        let m = longs(&[&[1, 2], &[3, 4]]);
        for (row, column) in [(0, 1), (1, 0), (3, 1), (1, 3)] {
            assert_eq!(
                m.element(row, column),
                Err(LinearError::IndexOutOfRange {
                    position: Position::Cell(row, column),
                    shape: Shape::Matrix(2, 2),
                })
            );
            assert!(m.entry(row, column).is_err());
        }
        assert_eq!(m.entry(2, 1), Ok(MatrixEntry::new(2, 1, 3)));
        assert!(m.row(3).is_err());
        assert!(m.column(0).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = longs(&[&[1, 2], &[3, 4]]);
        let b = longs(&[&[5, 6], &[7, 8]]);
        assert_eq!(a.add(&b), Ok(longs(&[&[6, 8], &[10, 12]])));
        assert_eq!(a.subtract(&b), Ok(longs(&[&[-4, -4], &[-4, -4]])));
        assert_eq!(a.multiply(&b), Ok(longs(&[&[19, 22], &[43, 50]])));
        assert_eq!(a.scalar_multiply(&2), longs(&[&[2, 4], &[6, 8]]));
        assert_eq!(-&a, longs(&[&[-1, -2], &[-3, -4]]));
        let v = LongVector::try_from_elements(vec![1, 1]).unwrap();
        assert_eq!(a.multiply_vector(&v).unwrap().elements(), &[3, 7]);
        let wide = longs(&[&[1, 2, 3]]);
        assert!(matches!(
            wide.multiply(&wide),
            Err(LinearError::SizeMismatch { .. })
        ));
        assert!(matches!(
            wide.add(&a),
            Err(LinearError::SizeMismatch { .. })
        ));
        assert!(wide.multiply_vector(&v).is_err());
    }

    #[test]
    fn test_identity_and_transpose() {
        let m = longs(&[&[1, 2, 3], &[4, 5, 6]]);
        let identity = LongMatrix::identity(2).unwrap();
        assert!(identity.is_identity());
        assert_eq!(identity.multiply(&m), Ok(m.clone()));
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose(), longs(&[&[1, 4], &[2, 5], &[3, 6]]));
        assert_eq!(m.column(3).unwrap().elements(), &[3, 6]);
        assert_eq!(
            LongMatrix::identity(0),
            Err(LinearError::EmptyConstruction)
        );
    }

    #[test]
    fn test_determinant() {
        assert_eq!(longs(&[&[7]]).determinant(), Ok(7));
        assert_eq!(longs(&[&[1, 2], &[3, 4]]).determinant(), Ok(-2));
        let m = longs(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 1]]);
        // 2(3 - 2) - 0 + 1(1 - 3) = 0
        assert_eq!(m.determinant(), Ok(0));
        assert_eq!(m.is_invertible(), Ok(false));
        let m = longs(&[&[0, 1, 0, 0], &[1, 0, 0, 0], &[0, 0, 2, 0], &[0, 0, 0, 3]]);
        assert_eq!(m.determinant(), Ok(-6));
        assert_eq!(
            longs(&[&[1, 2]]).determinant(),
            Err(LinearError::NotSquare(Shape::Matrix(1, 2)))
        );
    }

    #[test]
    fn test_trace_and_minor() {
        let m = longs(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(m.trace(), Ok(15));
        assert_eq!(m.minor(2, 2), Ok(longs(&[&[1, 3], &[7, 9]])));
        assert!(m.minor(4, 1).is_err());
        assert_eq!(longs(&[&[1]]).minor(1, 1), Err(LinearError::EmptyConstruction));
        assert!(matches!(
            longs(&[&[1, 2]]).trace(),
            Err(LinearError::NotSquare(_))
        ));
    }

    #[test]
    fn test_predicates() {
        let upper = longs(&[&[1, 2], &[0, 3]]);
        assert!(upper.is_upper_triangular());
        assert!(!upper.is_lower_triangular());
        assert!(upper.is_triangular());
        assert!(!upper.is_diagonal());
        let diagonal = longs(&[&[2, 0], &[0, 3]]);
        assert!(diagonal.is_diagonal());
        assert!(!diagonal.is_identity());
        assert!(longs(&[&[1, 7], &[7, 1]]).is_symmetric());
        assert!(longs(&[&[0, 7], &[-7, 0]]).is_skew_symmetric());
        assert!(!longs(&[&[1, 7], &[-7, 0]]).is_skew_symmetric());
        assert!(!longs(&[&[1, 2]]).is_symmetric());
    }

    #[test]
    fn test_inverse() {
        let m = BigIntegerMatrix::try_from_rows(vec![
            vec![BigInt::from(1), BigInt::from(2)],
            vec![BigInt::from(3), BigInt::from(4)],
        ])
        .unwrap();
        let inverse = m.inverse().unwrap();
        assert_eq!(
            inverse.elements(),
            &[ratio(-2, 1), ratio(1, 1), ratio(3, 2), ratio(-1, 2)]
        );
        assert!(m.embed().multiply(&inverse).unwrap().is_identity());

        let singular = longs(&[&[1, 2], &[2, 4]]);
        assert_eq!(singular.inverse(), Err(LinearError::Singular));

        let swapped = DoubleMatrix::try_from_rows(vec![vec![0.0, 2.0], vec![4.0, 0.0]]).unwrap();
        assert_eq!(swapped.inverse().unwrap().elements(), &[0.0, 0.25, 0.5, 0.0]);
    }

    #[test]
    fn test_norms() {
        let m = longs(&[&[1, -2], &[-3, 4]]);
        assert_eq!(m.max_abs_column_sum_norm(), 6.0);
        assert_eq!(m.max_abs_row_sum_norm(), 7.0);
        assert_eq!(m.frobenius_norm_pow2(), 30);
        assert_relative_eq!(m.frobenius_norm(), 30f64.sqrt());
        assert_eq!(m.max_norm(), 4.0);
    }

    #[test]
    fn test_equals_by_comparing() {
        let a = DoubleMatrix::try_from_rows(vec![vec![0.0, 1.0]]).unwrap();
        let b = DoubleMatrix::try_from_rows(vec![vec![-0.0, 1.0]]).unwrap();
        assert_eq!(a.equals_by_comparing(&b), Ok(true));
        let c = DoubleMatrix::try_from_rows(vec![vec![0.0], vec![1.0]]).unwrap();
        assert!(a.equals_by_comparing(&c).is_err());
        let infinite = DoubleMatrix::try_from_rows(vec![vec![f64::INFINITY, 1.0]]).unwrap();
        let collapsed = infinite.scalar_multiply(&0.0);
        assert_eq!(collapsed.equals_by_comparing(&collapsed), Ok(true));
        assert_eq!(collapsed.equals_by_comparing(&a), Ok(false));
    }

    #[test]
    fn test_display_and_serde() {
        let m = longs(&[&[1, 2], &[3, 4]]);
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
        let back: LongMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<LongMatrix>("[[1,2],[3]]").is_err());
    }
}
