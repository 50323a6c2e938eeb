//! Walkthrough of the group law on the toy curve `y^2 = x^3 + x + 2`
//! over F_17.

use num_bigint::BigUint;
use primecurve::{EllipticCurve, FiniteField};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let field = FiniteField::new(BigUint::from(17u32));
    let curve = EllipticCurve::new(field, BigUint::from(1u32), BigUint::from(2u32))?;

    let p = curve.point(BigUint::from(0u32), curve.lift_x(&BigUint::from(0u32))?);
    let q = curve.point(BigUint::from(1u32), curve.lift_x(&BigUint::from(1u32))?);

    println!("{}", curve);
    println!("P = {}", p);
    println!("Q = {}", q);
    println!("P + Q = {}", p.add(&q)?);
    println!("P + P = {}", p.add(&p)?);
    println!("2P = {}", p.scalar_mul(&BigUint::from(2u32))?);
    println!("10P = {}", p.scalar_mul(&BigUint::from(10u32))?);

    Ok(())
}
