//! Immutable vectors and matrices generic over the numeric domain.
//!
//! Arithmetic is never hard-wired to a number type. Every [`Vector`] and [`Matrix`] carries a
//! [`Field`] that supplies it, so the same code runs over `i64`, `f64`, [`num_bigint::BigInt`],
//! [`num_rational::BigRational`], Gaussian integers and `Complex<f64>`, or any domain a caller
//! implements the trait for. Indices are 1-based and operations on incompatible shapes return
//! a [`LinearError`] rather than panicking.
//!
//! ```
//! use lineal::real::LongVector;
//!
//! let v = LongVector::try_from_elements(vec![1, 2, 3]).unwrap();
//! let w = LongVector::try_from_elements(vec![4, 5, 6]).unwrap();
//! assert_eq!(v.dot_product(&w).unwrap(), 32);
//! assert_eq!(v[3], 3);
//! ```

pub mod builder;
pub mod complex;
pub mod entry;
pub mod error;
pub mod field;
mod helpers;
pub mod matrix;
pub mod real;
pub mod vector;

pub use builder::{MatrixBuilder, VectorBuilder};
pub use entry::{MatrixEntry, VectorEntry};
pub use error::{LinearError, Position, Result, Shape};
pub use field::{Field, NormedField, QuotientField};
pub use matrix::Matrix;
pub use vector::Vector;
