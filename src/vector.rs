//! Dense, immutable, 1-based vectors over any [`Field`].
//!
//! A vector of size `n` holds an element for every index in `1..=n` and is never empty.
//! Every arithmetic operation returns a new vector. Binary operations fail with
//! [`LinearError::SizeMismatch`] when the operands differ in size, and distances are always
//! the norm of the difference.
//!
//! # Examples
//!
//! ```
//! use lineal::real::LongVector;
//!
//! let v = LongVector::try_from_elements(vec![1, 2, 3]).unwrap();
//! let w = LongVector::try_from_elements(vec![4, 5, 6]).unwrap();
//! assert_eq!(v.dot_product(&w).unwrap(), 32);
//! assert_eq!(v.taxicab_norm(), 6.0);
//! assert_eq!(v.euclidean_norm_pow2(), 14);
//!
//! let sparse = LongVector::builder(4)?.put(2, 7)?.build()?;
//! assert_eq!(sparse.elements(), &[0, 7, 0, 0]);
//! # Ok::<(), lineal::LinearError>(())
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, Neg, RangeInclusive};

use itertools::Itertools;
use num_traits::Zero;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::builder::VectorBuilder;
use crate::entry::VectorEntry;
use crate::error::{LinearError, Position, Result, Shape};
use crate::field::{Field, NormedField, QuotientField};
use crate::helpers::{check_dense_indices, check_index, check_same_shape, first_duplicate, max_or};

/// An immutable vector whose arithmetic is supplied by the field `F`.
#[derive(Clone, Debug)]
pub struct Vector<F: Field> {
    field: F,
    elements: Vec<F::Element>,
}

impl<F: Field> Vector<F> {
    /// Wraps already validated, non-empty storage.
    pub(crate) fn from_dense(field: F, elements: Vec<F::Element>) -> Self {
        debug_assert!(!elements.is_empty());
        Vector { field, elements }
    }

    /// Creates a vector whose element at index `i` is `elements[i - 1]`.
    pub fn try_from_elements(elements: Vec<F::Element>) -> Result<Self> {
        if elements.is_empty() {
            Err(LinearError::EmptyConstruction)
        } else {
            Ok(Self::from_dense(F::default(), elements))
        }
    }

    /// Creates a vector from a complete index→element mapping.
    ///
    /// The keys must be exactly `1..=map.len()`.
    pub fn try_from_map(map: BTreeMap<usize, F::Element>) -> Result<Self> {
        let size = map.len();
        if size == 0 {
            return Err(LinearError::EmptyConstruction);
        }
        if map.contains_key(&0) {
            return Err(LinearError::IndexOutOfRange {
                position: Position::Index(0),
                shape: Shape::Vector(size),
            });
        }
        check_dense_indices(map.keys().copied(), size)?;
        Ok(Self::from_dense(F::default(), map.into_values().collect()))
    }

    /// Creates a vector from entries in any order. Every index in `1..=n` must appear once.
    pub fn try_from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = VectorEntry<F::Element>>,
    {
        let entries = entries.into_iter().collect_vec();
        if let Some(index) = first_duplicate(entries.iter().map(VectorEntry::index)) {
            return Err(LinearError::DuplicateIndex(Position::Index(index)));
        }
        Self::try_from_map(entries.into_iter().map(VectorEntry::into_parts).collect())
    }

    /// A builder for a vector of the given size.
    pub fn builder(size: usize) -> Result<VectorBuilder<F>> {
        VectorBuilder::new(size)
    }

    pub fn field(&self) -> F {
        self.field
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn shape(&self) -> Shape {
        Shape::Vector(self.size())
    }

    /// The index set `1..=size`.
    pub fn indices(&self) -> RangeInclusive<usize> {
        1..=self.size()
    }

    /// The elements sorted by index.
    pub fn elements(&self) -> &[F::Element] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<F::Element> {
        self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F::Element> {
        self.elements.iter()
    }

    /// The entries sorted by index.
    pub fn entries(&self) -> impl Iterator<Item = VectorEntry<F::Element>> + '_ {
        self.indices()
            .zip(self.elements.iter().cloned())
            .map(|(index, element)| VectorEntry::new(index, element))
    }

    /// The element at the 1-based `index`.
    pub fn element(&self, index: usize) -> Result<&F::Element> {
        check_index(index, self.size())?;
        Ok(&self.elements[index - 1])
    }

    pub fn entry(&self, index: usize) -> Result<VectorEntry<F::Element>> {
        self.element(index)
            .map(|element| VectorEntry::new(index, element.clone()))
    }

    /// Whether some element equals `element`, regardless of index.
    pub fn contains(&self, element: &F::Element) -> bool {
        self.elements.contains(element)
    }

    /// Whether every element is the field's zero.
    pub fn is_zero(&self) -> bool {
        self.elements.iter().all(|e| self.field.is_zero(e))
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
        Ok(Self::from_dense(self.field, elements))
    }

    pub(crate) fn map_into<G, M>(&self, field: G, op: M) -> Vector<G>
    where
        G: Field,
        M: FnMut(&F::Element) -> G::Element,
    {
        Vector::from_dense(field, self.elements.iter().map(op).collect())
    }

    fn map<M>(&self, op: M) -> Self
    where
        M: FnMut(&F::Element) -> F::Element,
    {
        self.map_into(self.field, op)
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| self.field.add(a, b))
    }

    /// Element-wise difference.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| self.field.subtract(a, b))
    }

    /// Sum of element-wise products, accumulated in index order.
    pub fn dot_product(&self, other: &Self) -> Result<F::Element> {
        check_same_shape(self.shape(), other.shape())?;
        Ok(self.field.sum(
            self.elements
                .iter()
                .zip(&other.elements)
                .map(|(a, b)| self.field.multiply(a, b)),
        ))
    }

    /// Every element multiplied by `scalar`.
    pub fn scalar_multiply(&self, scalar: &F::Element) -> Self {
        self.map(|e| self.field.multiply(scalar, e))
    }

    /// Every element replaced by its additive inverse.
    pub fn negate(&self) -> Self {
        self.map(|e| self.field.negate(e))
    }

    /// Whether the dot product with `other` is zero.
    pub fn orthogonal_to(&self, other: &Self) -> Result<bool> {
        let dot = self.dot_product(other)?;
        Ok(self.field.is_zero(&dot))
    }

    /// The cross product of two 3-dimensional vectors.
    pub fn cross_product(&self, other: &Self) -> Result<Self> {
        for operand in [self, other] {
            check_same_shape(Shape::Vector(3), operand.shape())?;
        }
        let (a, b, f) = (&self.elements, &other.elements, &self.field);
        let component =
            |i: usize, j: usize| f.subtract(&f.multiply(&a[i], &b[j]), &f.multiply(&a[j], &b[i]));
        Ok(Self::from_dense(
            self.field,
            vec![component(1, 2), component(2, 0), component(0, 1)],
        ))
    }

    /// Whether corresponding elements compare equal under [`Field::equal_by_comparing`].
    pub fn equals_by_comparing(&self, other: &Self) -> Result<bool> {
        check_same_shape(self.shape(), other.shape())?;
        Ok(self
            .elements
            .iter()
            .zip(&other.elements)
            .all(|(a, b)| self.field.equal_by_comparing(a, b)))
    }
}

impl<F: QuotientField> Vector<F> {
    /// This vector with every element embedded into the companion field.
    pub fn embed(&self) -> Vector<F::Companion> {
        self.field.embed_vector(self)
    }
}

impl<F: NormedField> Vector<F> {
    /// Sum of absolute values.
    pub fn taxicab_norm(&self) -> F::Norm {
        self.elements
            .iter()
            .fold(<F::Norm as Zero>::zero(), |acc, e| acc + self.field.abs(e))
    }

    pub fn taxicab_distance(&self, other: &Self) -> Result<F::Norm> {
        Ok(self.subtract(other)?.taxicab_norm())
    }

    /// Sum of squared absolute values.
    pub fn euclidean_norm_pow2(&self) -> F::NormPow2 {
        self.elements
            .iter()
            .fold(<F::NormPow2 as Zero>::zero(), |acc, e| {
                acc + self.field.abs_pow2(e)
            })
    }

    pub fn euclidean_norm(&self) -> F::Norm {
        self.field.sqrt(&self.euclidean_norm_pow2())
    }

    pub fn euclidean_distance(&self, other: &Self) -> Result<F::Norm> {
        Ok(self.subtract(other)?.euclidean_norm())
    }

    /// Largest absolute value.
    pub fn max_norm(&self) -> F::Norm {
        max_or(
            self.elements.iter().map(|e| self.field.abs(e)),
            <F::Norm as Zero>::zero(),
        )
    }

    pub fn max_distance(&self, other: &Self) -> Result<F::Norm> {
        Ok(self.subtract(other)?.max_norm())
    }
}

impl<F: Field> PartialEq for Vector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<F: Field> Eq for Vector<F> where F::Element: Eq {}

impl<F: Field> Hash for Vector<F>
where
    F::Element: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<F: Field> Index<usize> for Vector<F> {
    type Output = F::Element;
    /// The element at the 1-based `index`. Panics if `index` is out of range.
    fn index(&self, index: usize) -> &Self::Output {
        match self.element(index) {
            Ok(element) => element,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<F: Field> Neg for Vector<F> {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<F: Field> Neg for &Vector<F> {
    type Output = Vector<F>;
    fn neg(self) -> Vector<F> {
        self.negate()
    }
}

impl<'a, F: Field> IntoIterator for &'a Vector<F> {
    type Item = &'a F::Element;
    type IntoIter = std::slice::Iter<'a, F::Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<F: Field> fmt::Display for Vector<F>
where
    F::Element: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.elements.iter().join(", "))
    }
}

impl<F: Field> Serialize for Vector<F>
where
    F::Element: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.elements.serialize(serializer)
    }
}

impl<'de, F: Field> Deserialize<'de> for Vector<F>
where
    F::Element: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let elements = Vec::<F::Element>::deserialize(deserializer)?;
        Self::try_from_elements(elements).map_err(D::Error::custom)
    }
}
