//! Elliptic curve group arithmetic over a prime field whose modulus is
//! chosen at runtime.
//!
//! A [`FiniteField`] provides modular inversion and square roots, an
//! [`EllipticCurve`] owns a field together with its Weierstrass
//! coefficients, and a [`Point`] borrows its curve and implements the
//! group law.

#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod curve;
pub mod field;
pub mod point;

pub use curve::EllipticCurve;
pub use field::{FiniteField, LegendreSymbol};
pub use point::{Coordinates, Point};

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("{0} has no inverse mod {1}")]
    NoInverse(BigUint, BigUint),
    #[error("{0} is a quadratic non-residue mod {1}")]
    NoSquareRoot(BigUint, BigUint),
    #[error("singular curve: 4A^3 + 27B^2 is zero mod {0}")]
    SingularCurve(BigUint),
    #[error("points lie on different curves (mod {0} and mod {1})")]
    CurveMismatch(BigUint, BigUint),
}
