//! Group-law tests for curves over binary fields.

use ecckit::{BinaryCurve, BinaryPoint, ExtensionField, Poly, PrimeField};
use num_bigint::BigInt;

// F_16 = F_2[X] / (X^4 + X + 1)
fn f16() -> ExtensionField {
    let f2 = PrimeField::new(2u32.into()).unwrap();
    ExtensionField::new(Poly::from_ints(&f2, &[1, 1, 0, 0, 1])).unwrap()
}

// y² + xy = x³ + 1, on which (1, 0) generates a subgroup of order 4
fn curve() -> BinaryCurve {
    let f16 = f16();
    BinaryCurve::new(f16.zero(), f16.one()).unwrap()
}

fn generator(curve: &BinaryCurve) -> BinaryPoint {
    let field = curve.field().clone();
    curve.point(field.one(), field.zero()).unwrap()
}

#[test]
fn identity_is_neutral() {
    let curve = curve();
    let p = generator(&curve);
    let o = curve.identity();
    assert_eq!(p.clone() + o.clone(), p);
    assert_eq!(o.clone() + p.clone(), p);
    assert_eq!(o.clone() + o.clone(), o);
    assert!(o.x().is_err());
}

#[test]
fn negation_flips_to_x_plus_y() {
    let curve = curve();
    let field = curve.field().clone();
    let p = generator(&curve);
    let minus_p = -p.clone();
    assert_eq!(
        minus_p,
        curve.point(field.one(), field.one()).unwrap()
    );
    assert_eq!(p.clone() + minus_p, curve.identity());
    assert_eq!(p.clone() - p, curve.identity());
}

#[test]
fn doubling_chain_of_order_four() {
    let curve = curve();
    let field = curve.field().clone();
    let p = generator(&curve);

    // 2·(1,0) = (0,1)
    let double = p.clone() + p.clone();
    assert_eq!(double, curve.point(field.zero(), field.one()).unwrap());
    // x = 0 marks a 2-torsion point
    assert_eq!(double.clone() + double.clone(), curve.identity());
    // 3P = −P
    assert_eq!(double + p.clone(), -p.clone());
    assert_eq!(p.mul(&BigInt::from(4)), curve.identity());
}

#[test]
fn scalar_multiplication_wraps_the_subgroup() {
    let curve = curve();
    let p = generator(&curve);
    assert_eq!(p.mul(&BigInt::from(0)), curve.identity());
    assert_eq!(p.mul(&BigInt::from(1)), p);
    assert_eq!(p.mul(&BigInt::from(5)), p);
    assert_eq!(p.mul(&BigInt::from(-1)), -p.clone());
    assert_eq!(p.mul(&BigInt::from(-3)), p);
    assert_eq!(curve.identity().mul(&BigInt::from(7)), curve.identity());
}

#[test]
fn mixed_addition() {
    let curve = curve();
    let field = curve.field().clone();
    let p = generator(&curve);
    let q = curve.point(field.zero(), field.one()).unwrap();
    // (0,1) + (1,0) = (1,1) = −P
    assert_eq!(q + p.clone(), -p);
}
