//! Real-valued domains: machine integers, doubles, arbitrary-precision integers and rationals.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};

use crate::field::{Field, NormedField, QuotientField};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Arithmetic on `i64`. Quotients and norms are `f64`; squared norms stay integral.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LongField;

pub type LongVector = Vector<LongField>;
pub type LongMatrix = Matrix<LongField>;

impl Field for LongField {
    type Element = i64;
    type Quotient = f64;

    fn add(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }
    fn subtract(&self, a: &i64, b: &i64) -> i64 {
        a - b
    }
    fn multiply(&self, a: &i64, b: &i64) -> i64 {
        a * b
    }
    fn divide(&self, a: &i64, b: &i64) -> f64 {
        *a as f64 / *b as f64
    }
    fn zero(&self) -> i64 {
        0
    }
    fn one(&self) -> i64 {
        1
    }
    fn negate(&self, a: &i64) -> i64 {
        -a
    }
}

impl QuotientField for LongField {
    type Companion = DoubleField;

    fn embed(&self, a: &i64) -> f64 {
        *a as f64
    }
}

impl NormedField for LongField {
    type Norm = f64;
    type NormPow2 = i64;

    fn abs(&self, a: &i64) -> f64 {
        a.unsigned_abs() as f64
    }
    fn abs_pow2(&self, a: &i64) -> i64 {
        a * a
    }
    fn sqrt(&self, a: &i64) -> f64 {
        (*a as f64).sqrt()
    }
}

/// Arithmetic on `f64`, closed under division.
///
/// Comparison is IEEE equality except that NaN equals NaN, so `-0.0` and `0.0` compare equal
/// and comparing any value with itself succeeds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DoubleField;

pub type DoubleVector = Vector<DoubleField>;
pub type DoubleMatrix = Matrix<DoubleField>;

impl Field for DoubleField {
    type Element = f64;
    type Quotient = f64;

    fn add(&self, a: &f64, b: &f64) -> f64 {
        a + b
    }
    fn subtract(&self, a: &f64, b: &f64) -> f64 {
        a - b
    }
    fn multiply(&self, a: &f64, b: &f64) -> f64 {
        a * b
    }
    fn divide(&self, a: &f64, b: &f64) -> f64 {
        a / b
    }
    fn zero(&self) -> f64 {
        0.0
    }
    fn one(&self) -> f64 {
        1.0
    }
    fn negate(&self, a: &f64) -> f64 {
        -a
    }
    fn equal_by_comparing(&self, a: &f64, b: &f64) -> bool {
        same_double(*a, *b)
    }
}

/// `==` on doubles, with NaN equal to NaN.
pub(crate) fn same_double(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl QuotientField for DoubleField {
    type Companion = DoubleField;

    fn embed(&self, a: &f64) -> f64 {
        *a
    }
}

impl NormedField for DoubleField {
    type Norm = f64;
    type NormPow2 = f64;

    fn abs(&self, a: &f64) -> f64 {
        a.abs()
    }
    fn abs_pow2(&self, a: &f64) -> f64 {
        a * a
    }
    fn sqrt(&self, a: &f64) -> f64 {
        a.sqrt()
    }
}

/// Arithmetic on [`BigInt`]. Quotients and norms are exact [`BigRational`]s where possible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigIntegerField;

pub type BigIntegerVector = Vector<BigIntegerField>;
pub type BigIntegerMatrix = Matrix<BigIntegerField>;

impl Field for BigIntegerField {
    type Element = BigInt;
    type Quotient = BigRational;

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }
    fn subtract(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a - b
    }
    fn multiply(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }
    /// Panics if `b` is zero.
    fn divide(&self, a: &BigInt, b: &BigInt) -> BigRational {
        BigRational::new(a.clone(), b.clone())
    }
    fn zero(&self) -> BigInt {
        BigInt::from(0)
    }
    fn one(&self) -> BigInt {
        BigInt::from(1)
    }
    fn negate(&self, a: &BigInt) -> BigInt {
        -a
    }
}

impl QuotientField for BigIntegerField {
    type Companion = BigRationalField;

    fn embed(&self, a: &BigInt) -> BigRational {
        BigRational::from_integer(a.clone())
    }
}

impl NormedField for BigIntegerField {
    type Norm = BigRational;
    type NormPow2 = BigInt;

    fn abs(&self, a: &BigInt) -> BigRational {
        BigRational::from_integer(a.abs())
    }
    fn abs_pow2(&self, a: &BigInt) -> BigInt {
        a * a
    }
    fn sqrt(&self, a: &BigInt) -> BigRational {
        integer_sqrt(a)
    }
}

/// Arithmetic on [`BigRational`], closed under division.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigRationalField;

pub type BigRationalVector = Vector<BigRationalField>;
pub type BigRationalMatrix = Matrix<BigRationalField>;

impl Field for BigRationalField {
    type Element = BigRational;
    type Quotient = BigRational;

    fn add(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }
    fn subtract(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a - b
    }
    fn multiply(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a * b
    }
    /// Panics if `b` is zero.
    fn divide(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a / b
    }
    fn zero(&self) -> BigRational {
        BigRational::from_integer(BigInt::from(0))
    }
    fn one(&self) -> BigRational {
        BigRational::from_integer(BigInt::from(1))
    }
    fn negate(&self, a: &BigRational) -> BigRational {
        -a
    }
}

impl QuotientField for BigRationalField {
    type Companion = BigRationalField;

    fn embed(&self, a: &BigRational) -> BigRational {
        a.clone()
    }
}

impl NormedField for BigRationalField {
    type Norm = BigRational;
    type NormPow2 = BigRational;

    fn abs(&self, a: &BigRational) -> BigRational {
        a.abs()
    }
    fn abs_pow2(&self, a: &BigRational) -> BigRational {
        a * a
    }
    fn sqrt(&self, a: &BigRational) -> BigRational {
        rational_sqrt(a)
    }
}

/// Square root of a non-negative integer: exact for perfect squares, otherwise the
/// rational closest to the `f64` square root.
fn integer_sqrt(a: &BigInt) -> BigRational {
    let root = a.sqrt();
    if &root * &root == *a {
        BigRational::from_integer(root)
    } else {
        a.to_f64()
            .and_then(|value| BigRational::from_float(value.sqrt()))
            .unwrap_or_else(|| BigRational::from_integer(root))
    }
}

/// Square root of a non-negative rational, exact when numerator and denominator are both
/// perfect squares.
fn rational_sqrt(a: &BigRational) -> BigRational {
    let (numer, denom) = (a.numer().sqrt(), a.denom().sqrt());
    if &numer * &numer == *a.numer() && &denom * &denom == *a.denom() {
        BigRational::new(numer, denom)
    } else {
        a.numer()
            .to_f64()
            .zip(a.denom().to_f64())
            .and_then(|(n, d)| BigRational::from_float((n / d).sqrt()))
            .unwrap_or_else(|| BigRational::new(numer, denom))
    }
}
