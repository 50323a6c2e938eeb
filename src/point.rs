use crate::curve::EllipticCurve;
use crate::ArithmeticError;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use std::fmt;

/// Affine coordinates, or the distinguished identity element.
///
/// A tagged variant instead of a sentinel coordinate pair, so the group
/// law's case analysis is exhaustive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Coordinates {
    Identity,
    Affine { x: BigUint, y: BigUint },
}

/// A group element of the curve it borrows.
///
/// Points are value-like and immutable; combining points from curves
/// with different moduli fails with [`ArithmeticError::CurveMismatch`].
#[derive(Clone, Debug)]
pub struct Point<'c> {
    curve: &'c EllipticCurve,
    coords: Coordinates,
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.coords {
            Coordinates::Identity => write!(f, "O"),
            Coordinates::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.curve.field().modulus() == other.curve.field().modulus()
            && self.coords == other.coords
    }
}

impl Eq for Point<'_> {}

impl<'c> std::ops::Neg for Point<'c> {
    type Output = Point<'c>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'c> std::ops::Neg for &Point<'c> {
    type Output = Point<'c>;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<'c> Point<'c> {
    pub(crate) fn new(curve: &'c EllipticCurve, coords: Coordinates) -> Self {
        Self { curve, coords }
    }

    pub fn curve(&self) -> &'c EllipticCurve {
        self.curve
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coords
    }

    pub fn x(&self) -> Option<&BigUint> {
        match &self.coords {
            Coordinates::Identity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&BigUint> {
        match &self.coords {
            Coordinates::Identity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self.coords, Coordinates::Identity)
    }

    /// Whether the coordinates satisfy `y^2 = x^3 + Ax + B`.
    ///
    /// The identity is on every curve.
    pub fn is_on_curve(&self) -> bool {
        match &self.coords {
            Coordinates::Identity => true,
            Coordinates::Affine { x, y } => {
                let field = self.curve.field();
                field.mul(y, y) == self.curve.rhs(x)
            }
        }
    }

    /// The inverse group element `(x, p - y)`.
    pub fn negate(&self) -> Point<'c> {
        match &self.coords {
            Coordinates::Identity => self.clone(),
            Coordinates::Affine { x, y } => Point {
                curve: self.curve,
                coords: Coordinates::Affine {
                    x: x.clone(),
                    y: self.curve.field().neg(y),
                },
            },
        }
    }

    /// The elliptic curve group law.
    ///
    /// Chord-and-tangent addition: the identity absorbs, `P + (-P)`
    /// collapses to the identity (including a 2-torsion point `(x, 0)`
    /// doubled into itself, where the tangent is vertical), doubling
    /// uses the tangent slope `(3x^2 + A) / 2y` and distinct points the
    /// chord slope `(Qy - Py) / (Qx - Px)`. Both slope denominators are
    /// nonzero by the branch structure, so for on-curve operands the
    /// [`ArithmeticError::NoInverse`] path is unreachable.
    // not `std::ops::Add`: the group law is fallible
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &Point<'_>) -> Result<Point<'c>, ArithmeticError> {
        let field = self.curve.field();
        if field.modulus() != rhs.curve.field().modulus() {
            return Err(ArithmeticError::CurveMismatch(
                field.modulus().clone(),
                rhs.curve.field().modulus().clone(),
            ));
        }

        let (px, py) = match &self.coords {
            Coordinates::Identity => {
                // rebind rhs onto self's curve so the borrow lives long enough
                return Ok(Point {
                    curve: self.curve,
                    coords: rhs.coords.clone(),
                });
            }
            Coordinates::Affine { x, y } => (x, y),
        };
        let (qx, qy) = match &rhs.coords {
            Coordinates::Identity => return Ok(self.clone()),
            Coordinates::Affine { x, y } => (x, y),
        };

        let m = if px == qx {
            if py == qy {
                if py.is_zero() {
                    // 2-torsion: the tangent is vertical, 2P = O
                    return Ok(self.curve.identity());
                }
                // tangent slope (3x^2 + A) / 2y
                let num = field.add(
                    &field.mul(&BigUint::from(3u32), &field.mul(px, px)),
                    self.curve.a(),
                );
                let den = field.inv(&field.mul(&BigUint::from(2u32), py))?;
                field.mul(&num, &den)
            } else {
                // P + (-P) = O
                return Ok(self.curve.identity());
            }
        } else {
            // chord slope (Qy - Py) / (Qx - Px)
            let num = field.sub(qy, py);
            let den = field.inv(&field.sub(qx, px))?;
            field.mul(&num, &den)
        };

        let x = field.sub(&field.sub(&field.mul(&m, &m), px), qx);
        let y = field.sub(&field.mul(&m, &field.sub(px, &x)), py);
        Ok(Point {
            curve: self.curve,
            coords: Coordinates::Affine { x, y },
        })
    }

    /// Double-and-add scalar multiplication, least significant bit first.
    ///
    /// `n = 0` yields the identity.
    pub fn scalar_mul(&self, n: &BigUint) -> Result<Point<'c>, ArithmeticError> {
        let mut q = self.curve.identity();
        let mut r = self.clone();
        let mut n = n.clone();
        while !n.is_zero() {
            if n.is_odd() {
                q = q.add(&r)?;
            }
            r = r.add(&r)?;
            n >>= 1u32;
        }
        Ok(q)
    }
}
