//! The algebraic capabilities vectors and matrices are generic over.
//!
//! A numeric domain plugs into the crate by implementing [`Field`]. Implementing
//! [`QuotientField`] additionally names a division-closed companion domain that quotients and
//! embeddings land in (integers project into doubles or rationals, for example), which is what
//! matrix inversion works in. [`NormedField`] supplies the absolute value and square root that
//! the norm and distance operations are written against.
//!
//! Fields carry no state. They are `Copy + Default` values, zero-sized for every field in this
//! crate, and every vector and matrix stores its field by value.
//!
//! # Examples
//!
//! ```
//! use lineal::field::{Field, QuotientField};
//! use lineal::real::LongField;
//!
//! let field = LongField;
//! assert_eq!(field.add(&2, &3), 5);
//! assert_eq!(field.divide(&1, &4), 0.25);
//! assert_eq!(field.embed(&7), 7.0);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use num_traits::Zero;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Arithmetic over a numeric domain.
///
/// Implementations are total on their domain except where the domain itself is partial:
/// dividing by zero or overflowing a machine integer is the caller's responsibility.
pub trait Field: Copy + Default + fmt::Debug {
    /// The numbers the field operates on.
    type Element: Clone + PartialEq + fmt::Debug;
    /// The domain a quotient of two elements lands in.
    type Quotient: Clone + PartialEq + fmt::Debug;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn subtract(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Self::Quotient;
    /// The additive identity.
    fn zero(&self) -> Self::Element;
    /// The multiplicative identity.
    fn one(&self) -> Self::Element;

    /// The additive inverse of `a`.
    fn negate(&self, a: &Self::Element) -> Self::Element {
        self.subtract(&self.zero(), a)
    }

    /// Value comparison of two elements.
    ///
    /// This is the relation `equals_by_comparing` on vectors and matrices is built on. It
    /// defaults to `==`; domains whose representation is not canonical override it.
    fn equal_by_comparing(&self, a: &Self::Element, b: &Self::Element) -> bool {
        a == b
    }

    fn is_zero(&self, a: &Self::Element) -> bool {
        self.equal_by_comparing(a, &self.zero())
    }

    /// Sums `elements` left to right, starting from zero.
    fn sum<I>(&self, elements: I) -> Self::Element
    where
        I: IntoIterator<Item = Self::Element>,
    {
        elements
            .into_iter()
            .fold(self.zero(), |acc, element| self.add(&acc, &element))
    }
}

/// A [`Field`] whose quotients live in a division-closed companion field.
pub trait QuotientField: Field {
    /// The field over [`Field::Quotient`]. It divides within itself.
    type Companion: QuotientField<Element = Self::Quotient, Quotient = Self::Quotient>;

    fn companion(&self) -> Self::Companion {
        Self::Companion::default()
    }

    /// Embeds an element into the companion domain.
    fn embed(&self, a: &Self::Element) -> Self::Quotient;

    /// Builds a companion-domain vector from a complete index→value mapping.
    fn vector_of(
        &self,
        elements: BTreeMap<usize, Self::Quotient>,
    ) -> Result<Vector<Self::Companion>> {
        Vector::try_from_map(elements)
    }

    /// Builds a companion-domain matrix from a complete cell→value mapping.
    fn matrix_of(
        &self,
        elements: BTreeMap<(usize, usize), Self::Quotient>,
    ) -> Result<Matrix<Self::Companion>> {
        Matrix::try_from_map(elements)
    }

    /// Embeds every element of `vector` into the companion domain.
    fn embed_vector(&self, vector: &Vector<Self>) -> Vector<Self::Companion> {
        vector.map_into(self.companion(), |element| self.embed(element))
    }

    /// Embeds every element of `matrix` into the companion domain.
    fn embed_matrix(&self, matrix: &Matrix<Self>) -> Matrix<Self::Companion> {
        matrix.map_into(self.companion(), |element| self.embed(element))
    }
}

/// A [`QuotientField`] with absolute values, used by the norm and distance operations.
///
/// `Norm` is what taxicab, Euclidean and max norms are reported in. `NormPow2` holds squared
/// Euclidean norms and may be narrower: the squared norm of an integer vector is an integer,
/// its norm generally is not.
pub trait NormedField: QuotientField {
    type Norm: Clone + PartialOrd + fmt::Debug + Zero;
    type NormPow2: Clone + PartialEq + fmt::Debug + Zero;

    /// The absolute value of `a`.
    fn abs(&self, a: &Self::Element) -> Self::Norm;
    /// The squared absolute value of `a`.
    fn abs_pow2(&self, a: &Self::Element) -> Self::NormPow2;
    /// The square root of a squared norm.
    fn sqrt(&self, a: &Self::NormPow2) -> Self::Norm;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::real::{DoubleVector, LongField, LongVector};

    /// Integers modulo 7, a field no numeric type in the crate covers.
    #[derive(Copy, Clone, Debug, Default)]
    struct ModSeven;

    impl ModSeven {
        fn inverse(&self, a: &u32) -> u32 {
            // Fermat: a^(p-2) = a^-1 mod p
            (0..5).fold(1, |acc, _| acc * a % 7)
        }
    }

    impl Field for ModSeven {
        type Element = u32;
        type Quotient = u32;

        fn add(&self, a: &u32, b: &u32) -> u32 {
            (a + b) % 7
        }
        fn subtract(&self, a: &u32, b: &u32) -> u32 {
            (a + 7 - b) % 7
        }
        fn multiply(&self, a: &u32, b: &u32) -> u32 {
            a * b % 7
        }
        fn divide(&self, a: &u32, b: &u32) -> u32 {
            self.multiply(a, &self.inverse(b))
        }
        fn zero(&self) -> u32 {
            0
        }
        fn one(&self) -> u32 {
            1
        }
    }

    impl QuotientField for ModSeven {
        type Companion = ModSeven;

        fn embed(&self, a: &u32) -> u32 {
            *a
        }
    }

    /// Integers modulo 7 that are never reduced, so equal residues can differ as `u32`s.
    #[derive(Copy, Clone, Debug, Default)]
    struct LazyModSeven;

    impl Field for LazyModSeven {
        type Element = u32;
        type Quotient = u32;

        fn add(&self, a: &u32, b: &u32) -> u32 {
            a + b
        }
        fn subtract(&self, a: &u32, b: &u32) -> u32 {
            // a + 6b = a - b mod 7
            a + 6 * (b % 7)
        }
        fn multiply(&self, a: &u32, b: &u32) -> u32 {
            a * b
        }
        fn divide(&self, a: &u32, b: &u32) -> u32 {
            ModSeven.divide(&(a % 7), &(b % 7))
        }
        fn zero(&self) -> u32 {
            0
        }
        fn one(&self) -> u32 {
            1
        }
        fn equal_by_comparing(&self, a: &u32, b: &u32) -> bool {
            a % 7 == b % 7
        }
    }

    #[test]
    fn test_default_methods() {
        let field = ModSeven;
        assert_eq!(field.negate(&3), 4);
        assert!(field.is_zero(&0));
        assert!(!field.is_zero(&6));
        assert_eq!(field.sum([3, 5, 6]), 0);
        assert_eq!(field.multiply(&field.divide(&3, &5), &5), 3);
    }

    #[test]
    fn test_custom_field_vectors() {
        let v = Vector::<ModSeven>::try_from_elements(vec![1, 2, 3]).unwrap();
        let w = Vector::<ModSeven>::try_from_elements(vec![6, 5, 4]).unwrap();
        assert!(v.add(&w).unwrap().is_zero());
        // 6 + 10 + 12 = 28 = 0 mod 7
        assert!(v.orthogonal_to(&w).unwrap());
        let inverse = Matrix::<ModSeven>::try_from_rows(vec![vec![2, 1], vec![1, 1]])
            .unwrap()
            .inverse()
            .unwrap();
        assert_eq!(inverse.elements(), &[1, 6, 6, 2]);
    }

    #[test]
    fn test_value_comparison_differs_from_structural_equality() {
        let v = Vector::<LazyModSeven>::try_from_elements(vec![1, 2, 3]).unwrap();
        let w = Vector::<LazyModSeven>::try_from_elements(vec![8, 9, 17]).unwrap();
        assert_ne!(v, w);
        assert_eq!(v.equals_by_comparing(&w), Ok(true));
        // 3 - 3 is stored as 21
        let difference = v.subtract(&v).unwrap();
        assert_ne!(difference.elements(), &[0, 0, 0]);
        assert!(difference.is_zero());
        assert_eq!(v.negate().negate().equals_by_comparing(&v), Ok(true));

        let a = Matrix::<LazyModSeven>::try_from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::<LazyModSeven>::try_from_rows(vec![vec![8, 9], vec![10, 11]]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.equals_by_comparing(&b), Ok(true));
        let identity =
            Matrix::<LazyModSeven>::try_from_rows(vec![vec![8, 7], vec![14, 1]]).unwrap();
        assert!(identity.is_identity());
        assert_ne!(identity, Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_factories() {
        let field = LongField;
        let map = BTreeMap::from([(1, 0.5), (2, 1.5)]);
        let v: DoubleVector = field.vector_of(map).unwrap();
        assert_eq!(v.elements(), &[0.5, 1.5]);
        assert!(field.vector_of(BTreeMap::new()).is_err());

        let longs = LongVector::try_from_elements(vec![1, -2]).unwrap();
        assert_eq!(field.embed_vector(&longs).elements(), &[1.0, -2.0]);

        let cells = BTreeMap::from([((1, 1), 1.0), ((1, 2), 2.0)]);
        let m = field.matrix_of(cells).unwrap();
        assert_eq!((m.rows(), m.columns()), (1, 2));
    }
}
