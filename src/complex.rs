//! Complex domains: Gaussian integers and double-precision complex numbers.
//!
//! Dot products multiply corresponding elements without conjugation, so the squared Euclidean
//! norm of a complex vector is computed from absolute values rather than `v · v`.

use num_complex::Complex;

use crate::field::{Field, NormedField, QuotientField};
use crate::matrix::Matrix;
use crate::real::same_double;
use crate::vector::Vector;

/// Arithmetic on Gaussian integers `a + bi` with `a, b` in `i64`.
///
/// Quotients land in [`ComplexField`]. Norms are `f64` while squared norms stay integral.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GaussianIntegerField;

pub type GaussianIntegerVector = Vector<GaussianIntegerField>;
pub type GaussianIntegerMatrix = Matrix<GaussianIntegerField>;

impl Field for GaussianIntegerField {
    type Element = Complex<i64>;
    type Quotient = Complex<f64>;

    fn add(&self, a: &Complex<i64>, b: &Complex<i64>) -> Complex<i64> {
        a + b
    }
    fn subtract(&self, a: &Complex<i64>, b: &Complex<i64>) -> Complex<i64> {
        a - b
    }
    fn multiply(&self, a: &Complex<i64>, b: &Complex<i64>) -> Complex<i64> {
        a * b
    }
    fn divide(&self, a: &Complex<i64>, b: &Complex<i64>) -> Complex<f64> {
        self.embed(a) / self.embed(b)
    }
    fn zero(&self) -> Complex<i64> {
        Complex::new(0, 0)
    }
    fn one(&self) -> Complex<i64> {
        Complex::new(1, 0)
    }
    fn negate(&self, a: &Complex<i64>) -> Complex<i64> {
        -a
    }
}

impl QuotientField for GaussianIntegerField {
    type Companion = ComplexField;

    fn embed(&self, a: &Complex<i64>) -> Complex<f64> {
        Complex::new(a.re as f64, a.im as f64)
    }
}

impl NormedField for GaussianIntegerField {
    type Norm = f64;
    type NormPow2 = i64;

    fn abs(&self, a: &Complex<i64>) -> f64 {
        (a.norm_sqr() as f64).sqrt()
    }
    fn abs_pow2(&self, a: &Complex<i64>) -> i64 {
        a.norm_sqr()
    }
    fn sqrt(&self, a: &i64) -> f64 {
        (*a as f64).sqrt()
    }
}

/// Arithmetic on `Complex<f64>`, closed under division.
///
/// Compares component-wise like [`DoubleField`](crate::real::DoubleField), NaN equal to NaN.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComplexField;

pub type ComplexVector = Vector<ComplexField>;
pub type ComplexMatrix = Matrix<ComplexField>;

impl Field for ComplexField {
    type Element = Complex<f64>;
    type Quotient = Complex<f64>;

    fn add(&self, a: &Complex<f64>, b: &Complex<f64>) -> Complex<f64> {
        a + b
    }
    fn subtract(&self, a: &Complex<f64>, b: &Complex<f64>) -> Complex<f64> {
        a - b
    }
    fn multiply(&self, a: &Complex<f64>, b: &Complex<f64>) -> Complex<f64> {
        a * b
    }
    fn divide(&self, a: &Complex<f64>, b: &Complex<f64>) -> Complex<f64> {
        a / b
    }
    fn zero(&self) -> Complex<f64> {
        Complex::new(0.0, 0.0)
    }
    fn one(&self) -> Complex<f64> {
        Complex::new(1.0, 0.0)
    }
    fn negate(&self, a: &Complex<f64>) -> Complex<f64> {
        -a
    }
    fn equal_by_comparing(&self, a: &Complex<f64>, b: &Complex<f64>) -> bool {
        same_double(a.re, b.re) && same_double(a.im, b.im)
    }
}

impl QuotientField for ComplexField {
    type Companion = ComplexField;

    fn embed(&self, a: &Complex<f64>) -> Complex<f64> {
        *a
    }
}

impl NormedField for ComplexField {
    type Norm = f64;
    type NormPow2 = f64;

    fn abs(&self, a: &Complex<f64>) -> f64 {
        a.norm()
    }
    fn abs_pow2(&self, a: &Complex<f64>) -> f64 {
        a.norm_sqr()
    }
    fn sqrt(&self, a: &f64) -> f64 {
        a.sqrt()
    }
}
