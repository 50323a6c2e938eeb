use crate::field::FiniteField;
use crate::point::{Coordinates, Point};
use crate::ArithmeticError;

use num_bigint::BigUint;
use num_traits::Zero;

use std::fmt;

/// Short Weierstrass curve `y^2 = x^3 + Ax + B` over a prime field.
///
/// Owns its [`FiniteField`]; construction rejects singular curves, so a
/// live instance always satisfies `4A^3 + 27B^2 != 0 mod p`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EllipticCurve {
    field: FiniteField,
    a: BigUint,
    b: BigUint,
    d: BigUint,
}

impl EllipticCurve {
    pub fn new(field: FiniteField, a: BigUint, b: BigUint) -> Result<Self, ArithmeticError> {
        let a = field.reduce(&a);
        let b = field.reduce(&b);
        let a3 = field.mul(&field.mul(&a, &a), &a);
        let b2 = field.mul(&b, &b);
        let d = field.add(
            &field.mul(&BigUint::from(4u32), &a3),
            &field.mul(&BigUint::from(27u32), &b2),
        );
        if d.is_zero() {
            return Err(ArithmeticError::SingularCurve(field.modulus().clone()));
        }
        Ok(Self { field, a, b, d })
    }

    pub fn field(&self) -> &FiniteField {
        &self.field
    }

    pub fn a(&self) -> &BigUint {
        &self.a
    }

    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The discriminant `4A^3 + 27B^2 mod p`, nonzero by construction.
    pub fn discriminant(&self) -> &BigUint {
        &self.d
    }

    /// The distinguished identity element `O`.
    pub fn identity(&self) -> Point {
        Point::new(self, Coordinates::Identity)
    }

    /// An affine point with coordinates reduced into the field.
    ///
    /// The coordinates are not checked against the curve equation; use
    /// [`Point::is_on_curve`] for that.
    pub fn point(&self, x: BigUint, y: BigUint) -> Point {
        Point::new(
            self,
            Coordinates::Affine {
                x: self.field.reduce(&x),
                y: self.field.reduce(&y),
            },
        )
    }

    /// The right-hand side `x^3 + Ax + B` of the curve equation.
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let x = self.field.reduce(x);
        let x3 = self.field.mul(&self.field.mul(&x, &x), &x);
        self.field
            .add(&self.field.add(&x3, &self.field.mul(&self.a, &x)), &self.b)
    }

    /// Lifts an x-coordinate to some `y` with `y^2 = x^3 + Ax + B`.
    ///
    /// Returns one of the two symmetric roots; negate for the other.
    /// Fails when `x` has no lift on this curve.
    pub fn lift_x(&self, x: &BigUint) -> Result<BigUint, ArithmeticError> {
        self.field.sqrt(&self.rhs(x))
    }
}

impl fmt::Display for EllipticCurve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "EC: y^2 = x^3 + {}x + {} mod {}",
            self.a,
            self.b,
            self.field.modulus()
        )
    }
}
