//! Incremental construction of sparse vectors and matrices.
//!
//! A builder declares its shape up front, collects entries one at a time and fills every
//! position nobody supplied when it is built. Entries are validated as they are put, so an
//! out-of-range or repeated position is reported at the call that introduced it.
//!
//! ```
//! use lineal::real::LongMatrix;
//!
//! let m = LongMatrix::builder(2, 3)
//!     .unwrap()
//!     .computation_of_absent(|row, column| (row * 10 + column) as i64)
//!     .put(1, 1, -1)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! assert_eq!(m.elements(), &[-1, 12, 13, 21, 22, 23]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use itertools::iproduct;

use crate::entry::{MatrixEntry, VectorEntry};
use crate::error::{LinearError, Position, Result, Shape};
use crate::field::Field;
use crate::helpers::{check_dense_cells, check_dense_indices};
use crate::matrix::Matrix;
use crate::vector::Vector;

type AbsentElement<E> = Box<dyn Fn(usize) -> E>;
type AbsentCell<E> = Box<dyn Fn(usize, usize) -> E>;

/// Collects the entries of a vector of a fixed size.
pub struct VectorBuilder<F: Field> {
    field: F,
    size: usize,
    entries: BTreeMap<usize, F::Element>,
    absent: Option<AbsentElement<F::Element>>,
}

impl<F: Field> VectorBuilder<F> {
    /// A builder for a vector of `size` elements. A size of zero could never be completed and
    /// fails with [`LinearError::EmptyConstruction`].
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LinearError::EmptyConstruction);
        }
        Ok(VectorBuilder {
            field: F::default(),
            size,
            entries: BTreeMap::new(),
            absent: None,
        })
    }

    /// The declared size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sets how elements for indices nobody supplied are computed. Defaults to the field's zero.
    pub fn computation_of_absent<A>(mut self, absent: A) -> Self
    where
        A: Fn(usize) -> F::Element + 'static,
    {
        self.absent = Some(Box::new(absent));
        self
    }

    /// Adds the element at `index`.
    pub fn put(mut self, index: usize, element: F::Element) -> Result<Self> {
        if index == 0 {
            return Err(LinearError::IndexOutOfRange {
                position: Position::Index(index),
                shape: Shape::Vector(self.size),
            });
        }
        if index > self.size {
            return Err(LinearError::IndexOverflow {
                position: Position::Index(index),
                shape: Shape::Vector(self.size),
            });
        }
        if self.entries.contains_key(&index) {
            return Err(LinearError::DuplicateIndex(Position::Index(index)));
        }
        self.entries.insert(index, element);
        Ok(self)
    }

    pub fn put_entry(self, entry: VectorEntry<F::Element>) -> Result<Self> {
        let (index, element) = entry.into_parts();
        self.put(index, element)
    }

    /// Adds every entry, stopping at the first rejected one.
    pub fn put_all<I>(self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = VectorEntry<F::Element>>,
    {
        entries
            .into_iter()
            .try_fold(self, |builder, entry| builder.put_entry(entry))
    }

    /// Completes the vector, filling absent indices.
    ///
    /// Fails with [`LinearError::EmptyConstruction`] if nothing was put.
    pub fn build(self) -> Result<Vector<F>> {
        let VectorBuilder {
            field,
            size,
            mut entries,
            absent,
        } = self;
        let Some(&max) = entries.keys().next_back() else {
            return Err(LinearError::EmptyConstruction);
        };
        if max > size {
            return Err(LinearError::IndexOverflow {
                position: Position::Index(max),
                shape: Shape::Vector(size),
            });
        }
        let missing = size - entries.len();
        if missing > 0 {
            log::trace!("filling {missing} absent entries of a vector of {}", Shape::Vector(size));
            for index in 1..=size {
                entries.entry(index).or_insert_with(|| match &absent {
                    Some(absent) => absent(index),
                    None => field.zero(),
                });
            }
        }
        check_dense_indices(entries.keys().copied(), size)?;
        Ok(Vector::from_dense(field, entries.into_values().collect()))
    }
}

impl<F: Field> fmt::Debug for VectorBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorBuilder")
            .field("size", &self.size)
            .field("entries", &self.entries)
            .field("computation_of_absent", &self.absent.is_some())
            .finish()
    }
}

/// Collects the entries of a matrix of a fixed shape.
pub struct MatrixBuilder<F: Field> {
    field: F,
    rows: usize,
    columns: usize,
    entries: BTreeMap<(usize, usize), F::Element>,
    absent: Option<AbsentCell<F::Element>>,
}

impl<F: Field> MatrixBuilder<F> {
    /// A builder for a `rows × columns` matrix. Both must be at least 1.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(LinearError::EmptyConstruction);
        }
        Ok(MatrixBuilder {
            field: F::default(),
            rows,
            columns,
            entries: BTreeMap::new(),
            absent: None,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn shape(&self) -> Shape {
        Shape::Matrix(self.rows, self.columns)
    }

    /// Sets how elements for cells nobody supplied are computed. Defaults to the field's zero.
    pub fn computation_of_absent<A>(mut self, absent: A) -> Self
    where
        A: Fn(usize, usize) -> F::Element + 'static,
    {
        self.absent = Some(Box::new(absent));
        self
    }

    /// Adds the element at `(row, column)`.
    pub fn put(mut self, row: usize, column: usize, element: F::Element) -> Result<Self> {
        let position = Position::Cell(row, column);
        if row == 0 || column == 0 {
            return Err(LinearError::IndexOutOfRange {
                position,
                shape: self.shape(),
            });
        }
        if row > self.rows || column > self.columns {
            return Err(LinearError::IndexOverflow {
                position,
                shape: self.shape(),
            });
        }
        if self.entries.contains_key(&(row, column)) {
            return Err(LinearError::DuplicateIndex(position));
        }
        self.entries.insert((row, column), element);
        Ok(self)
    }

    pub fn put_entry(self, entry: MatrixEntry<F::Element>) -> Result<Self> {
        let (row, column, element) = entry.into_parts();
        self.put(row, column, element)
    }

    pub fn put_all<I>(self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = MatrixEntry<F::Element>>,
    {
        entries
            .into_iter()
            .try_fold(self, |builder, entry| builder.put_entry(entry))
    }

    /// Completes the matrix, filling absent cells.
    pub fn build(self) -> Result<Matrix<F>> {
        let shape = self.shape();
        let MatrixBuilder {
            field,
            rows,
            columns,
            mut entries,
            absent,
        } = self;
        if entries.is_empty() {
            return Err(LinearError::EmptyConstruction);
        }
        if let Some(&(row, column)) = entries
            .keys()
            .find(|&&(row, column)| row > rows || column > columns)
        {
            return Err(LinearError::IndexOverflow {
                position: Position::Cell(row, column),
                shape,
            });
        }
        let missing = rows * columns - entries.len();
        if missing > 0 {
            log::trace!("filling {missing} absent entries of a {shape} matrix");
            for cell in iproduct!(1..=rows, 1..=columns) {
                entries.entry(cell).or_insert_with(|| match &absent {
                    Some(absent) => absent(cell.0, cell.1),
                    None => field.zero(),
                });
            }
        }
        check_dense_cells(entries.keys().copied(), rows, columns)?;
        Ok(Matrix::from_dense(
            field,
            rows,
            columns,
            entries.into_values().collect(),
        ))
    }
}

impl<F: Field> fmt::Debug for MatrixBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixBuilder")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("entries", &self.entries)
            .field("computation_of_absent", &self.absent.is_some())
            .finish()
    }
}
