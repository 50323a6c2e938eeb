use crate::ArithmeticError;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Classification of a field element by its Legendre symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendreSymbol {
    Zero,
    Residue,
    NonResidue,
}

/// Arithmetic modulo a prime `p`, with every result reduced into `[0, p)`.
///
/// The modulus is fixed at construction and never validated: it must be
/// prime for [`inv`](Self::inv) and odd for [`sqrt`](Self::sqrt) to be
/// meaningful, which is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiniteField {
    p: BigUint,
}

impl FiniteField {
    pub fn new(p: BigUint) -> Self {
        Self { p }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.p
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    /// Subtraction over operands already reduced into `[0, p)`.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + &self.p - b) % &self.p
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        (&self.p - a % &self.p) % &self.p
    }

    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, &self.p)
    }

    /// Multiplicative inverse of `a` via the extended Euclidean algorithm.
    ///
    /// Fails whenever `gcd(a, p) != 1`, in particular for `a == 0`.
    pub fn inv(&self, a: &BigUint) -> Result<BigUint, ArithmeticError> {
        let a = self.reduce(a);
        let modulus = BigInt::from(self.p.clone());
        let ext = BigInt::from(a.clone()).extended_gcd(&modulus);
        if !ext.gcd.is_one() {
            return Err(ArithmeticError::NoInverse(a, self.p.clone()));
        }
        // `x` is the Bezout coefficient of `a`; mod_floor with a positive
        // modulus lands in [0, p), so the unsigned conversion cannot fail
        let inv = ext.x.mod_floor(&modulus);
        Ok(inv.to_biguint().unwrap())
    }

    /// Legendre symbol of `a`, computed as `a^((p-1)/2) mod p` with the
    /// `p - 1` residue mapped to [`LegendreSymbol::NonResidue`].
    pub fn legendre(&self, a: &BigUint) -> LegendreSymbol {
        let a = self.reduce(a);
        if a.is_zero() {
            return LegendreSymbol::Zero;
        }
        let exp = (&self.p - 1u32) >> 1u32;
        if self.pow(&a, &exp) == &self.p - 1u32 {
            LegendreSymbol::NonResidue
        } else {
            LegendreSymbol::Residue
        }
    }

    /// Some `y` with `y^2 = a mod p`, via Tonelli-Shanks.
    ///
    /// Only one of the two symmetric roots is returned; the other is its
    /// negation. Fails when `a` is a quadratic non-residue.
    pub fn sqrt(&self, a: &BigUint) -> Result<BigUint, ArithmeticError> {
        let a = self.reduce(a);
        if self.p == BigUint::from(2u32) {
            // degenerate field, every element is its own root
            return Ok(a);
        }
        match self.legendre(&a) {
            LegendreSymbol::NonResidue => {
                return Err(ArithmeticError::NoSquareRoot(a, self.p.clone()))
            }
            LegendreSymbol::Zero => return Ok(BigUint::zero()),
            LegendreSymbol::Residue => {}
        }

        // factor p - 1 = s * 2^e with s odd
        let mut s = &self.p - 1u32;
        let mut e = 0u32;
        while s.is_even() {
            s >>= 1u32;
            e += 1;
        }

        // least witness n >= 2 with legendre(n) == -1
        let mut n = BigUint::from(2u32);
        while self.legendre(&n) != LegendreSymbol::NonResidue {
            n += 1u32;
        }

        let mut x = self.pow(&a, &((&s + 1u32) >> 1u32));
        let mut b = self.pow(&a, &s);
        let mut g = self.pow(&n, &s);

        loop {
            // least m in [0, e) with b^(2^m) == 1, by repeated squaring
            let mut t = b.clone();
            let mut m = 0u32;
            while !t.is_one() && m < e {
                t = self.mul(&t, &t);
                m += 1;
            }
            if !t.is_one() {
                // only reachable when the modulus is not prime
                return Err(ArithmeticError::NoSquareRoot(a, self.p.clone()));
            }
            if m == 0 {
                return Ok(x);
            }
            let gs = self.pow(&g, &(BigUint::one() << (e - m - 1)));
            g = self.mul(&gs, &gs);
            x = self.mul(&x, &gs);
            b = self.mul(&b, &g);
            e = m;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn field(p: u32) -> FiniteField {
        FiniteField::new(BigUint::from(p))
    }

    #[test]
    fn inverse_round_trip() {
        for p in [3u32, 17, 97, 7919] {
            let f = field(p);
            for a in 1..p {
                let a = BigUint::from(a);
                let inv = f.inv(&a).unwrap();
                assert!(inv < BigUint::from(p));
                assert!(f.mul(&a, &inv).is_one());
            }
        }
    }

    #[test]
    fn zero_has_no_inverse() {
        let f = field(17);
        assert_eq!(
            f.inv(&BigUint::zero()),
            Err(ArithmeticError::NoInverse(
                BigUint::zero(),
                BigUint::from(17u32)
            ))
        );
    }

    #[test]
    fn non_coprime_operand_has_no_inverse() {
        // not a prime modulus, but the gcd check must still catch this
        let f = field(12);
        assert_eq!(
            f.inv(&BigUint::from(8u32)),
            Err(ArithmeticError::NoInverse(
                BigUint::from(8u32),
                BigUint::from(12u32)
            ))
        );
    }

    #[test]
    fn legendre_classification() {
        let f = field(17);
        assert_eq!(f.legendre(&BigUint::zero()), LegendreSymbol::Zero);
        assert_eq!(f.legendre(&BigUint::from(17u32)), LegendreSymbol::Zero);
        // exactly (p - 1) / 2 nonzero residues
        let residues = (1..17u32)
            .filter(|a| f.legendre(&BigUint::from(*a)) == LegendreSymbol::Residue)
            .count();
        assert_eq!(residues, 8);
        for a in 1..17u32 {
            let a = BigUint::from(a);
            let sq = f.mul(&a, &a);
            assert_eq!(f.legendre(&sq), LegendreSymbol::Residue);
        }
    }

    #[test]
    fn sqrt_of_squares_round_trips() {
        for p in [17u32, 97, 101, 7919] {
            let f = field(p);
            for a in 0..p.min(500) {
                let a = BigUint::from(a);
                let sq = f.mul(&a, &a);
                let root = f.sqrt(&sq).unwrap();
                assert_eq!(f.mul(&root, &root), sq);
            }
        }
    }

    #[test]
    fn sqrt_of_known_residue() {
        // 6^2 = 36 = 2 mod 17
        let f = field(17);
        assert_eq!(f.sqrt(&BigUint::from(2u32)).unwrap(), BigUint::from(6u32));
    }

    #[test]
    fn sqrt_of_non_residue_fails() {
        let f = field(7);
        assert_eq!(
            f.sqrt(&BigUint::from(3u32)),
            Err(ArithmeticError::NoSquareRoot(
                BigUint::from(3u32),
                BigUint::from(7u32)
            ))
        );
    }

    #[test]
    fn sqrt_of_zero() {
        let f = field(17);
        assert_eq!(f.sqrt(&BigUint::zero()).unwrap(), BigUint::zero());
    }

    #[test]
    fn sqrt_mod_two() {
        let f = field(2);
        assert_eq!(f.sqrt(&BigUint::one()).unwrap(), BigUint::one());
        assert_eq!(f.sqrt(&BigUint::zero()).unwrap(), BigUint::zero());
    }

    #[test]
    fn sqrt_in_a_one_mod_four_field() {
        // p = 97 has p - 1 = 3 * 2^5, so the Tonelli-Shanks loop
        // actually has to iterate
        let f = field(97);
        for a in 1..97u32 {
            let a = BigUint::from(a);
            if f.legendre(&a) == LegendreSymbol::Residue {
                let root = f.sqrt(&a).unwrap();
                assert_eq!(f.mul(&root, &root), a);
            }
        }
    }

    #[test]
    fn subtraction_wraps() {
        let f = field(17);
        assert_eq!(
            f.sub(&BigUint::from(3u32), &BigUint::from(5u32)),
            BigUint::from(15u32)
        );
        assert_eq!(f.neg(&BigUint::zero()), BigUint::zero());
        assert_eq!(f.neg(&BigUint::from(5u32)), BigUint::from(12u32));
    }
}
