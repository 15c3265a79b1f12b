//! Group-law tests for Weierstrass curves over prime fields, extension
//! fields and the named-curve registry.

use ecckit::named_curves::{domain_parameters, NAMES};
use ecckit::{EllipticCurve, ExtensionField, ModInt, Point, Poly, PrimeField};
use num_bigint::BigInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn curve_97() -> (PrimeField, EllipticCurve<ModInt>) {
    // y² = x³ + 2x + 3 over F_97
    let z97 = PrimeField::new(97u32.into()).unwrap();
    let curve = EllipticCurve::new(z97.element(2), z97.element(3)).unwrap();
    (z97, curve)
}

/// Repeated addition of `sign(e)·P`, the reference the double-and-add
/// ladder is checked against.
fn repeated_addition(point: &Point<ModInt>, e: i64) -> Point<ModInt> {
    let base = if e < 0 { -point } else { point.clone() };
    let mut acc = point.curve().identity();
    for _ in 0..e.abs() {
        acc = acc + base.clone();
    }
    acc
}

#[test]
fn known_points_over_f97() {
    let (z97, curve) = curve_97();
    let p = curve.point(z97.element(0), z97.element(10)).unwrap();
    let q = curve.point(z97.element(3), z97.element(6)).unwrap();

    let sum = curve.point(z97.element(85), z97.element(71)).unwrap();
    assert_eq!(p.clone() + q.clone(), sum);
    assert_eq!(q + p.clone(), sum);

    assert_eq!(-p.clone(), curve.point(z97.element(0), z97.element(87)).unwrap());
    assert_eq!(
        p.mul(&BigInt::from(3)),
        curve.point(z97.element(23), z97.element(24)).unwrap()
    );
}

#[test]
fn rejects_points_off_the_curve() {
    let (z97, curve) = curve_97();
    assert!(curve.point(z97.element(1), z97.element(1)).is_err());
}

#[test]
fn doubling_a_two_torsion_point_gives_the_identity() {
    // y² = x³ − 1 over F_7 has the 2-torsion point (1, 0)
    let z7 = PrimeField::new(7u32.into()).unwrap();
    let curve = EllipticCurve::new(z7.element(0), z7.element(-1)).unwrap();
    let p = curve.point(z7.element(1), z7.element(0)).unwrap();
    assert_eq!(p.clone() + p, curve.identity());
}

#[test]
fn double_and_add_matches_repeated_addition() {
    let (z97, curve) = curve_97();
    let p = curve.point(z97.element(3), z97.element(6)).unwrap();
    for e in -25i64..=25 {
        assert_eq!(p.mul(&BigInt::from(e)), repeated_addition(&p, e), "e = {e}");
    }
    assert_eq!(curve.identity().mul(&BigInt::from(13)), curve.identity());
}

#[test]
fn double_and_add_matches_repeated_addition_on_secp256k1() {
    let params = domain_parameters("secp256k1").unwrap();
    let g = &params.generator;
    for e in [-5i64, -1, 0, 1, 2, 3, 7] {
        assert_eq!(g.mul(&BigInt::from(e)), repeated_addition(g, e), "e = {e}");
    }
}

#[test]
fn group_axioms_on_every_named_curve() {
    let mut rng = ChaCha8Rng::seed_from_u64(5040);
    for name in NAMES {
        let params = domain_parameters(name).expect(name);
        let g = &params.generator;
        let o = params.curve.identity();

        let k1: u32 = rng.gen_range(0..=200);
        let k2: u32 = rng.gen_range(0..=200);
        let k3: u32 = rng.gen_range(0..=200);
        let p = g.mul(&BigInt::from(k1));
        let q = g.mul(&BigInt::from(k2));
        let r = g.mul(&BigInt::from(k3));

        assert_eq!(p.clone() + o.clone(), p, "{name}");
        assert_eq!(o.clone() + p.clone(), p, "{name}");
        assert_eq!(p.clone() + (-p.clone()), o, "{name}");
        assert_eq!(p.clone() + q.clone(), q.clone() + p.clone(), "{name}");
        assert_eq!(
            p.clone() + (q.clone() + r.clone()),
            (p.clone() + q.clone()) + r.clone(),
            "{name}"
        );
        assert_eq!(p.clone() - q.clone(), p + (-q), "{name}");
    }
}

#[test]
fn weierstrass_curve_over_an_extension_field() {
    // F_25 = F_5[X] / (X² + 2); y² = x³ + 1
    let f5 = PrimeField::new(5u32.into()).unwrap();
    let f25 = ExtensionField::new(Poly::from_ints(&f5, &[2, 0, 1])).unwrap();
    let curve = EllipticCurve::new(f25.zero(), f25.one()).unwrap();

    let p = curve.point(f25.constant(2), f25.constant(3)).unwrap();
    let q = curve.point(f25.constant(0), f25.constant(1)).unwrap();

    // 2·(2,3) = (0,1) and (0,1) has order 3
    assert_eq!(p.clone() + p.clone(), q);
    assert_eq!(q.mul(&BigInt::from(3)), curve.identity());

    // (2,3) + (0,1) = (4,0), a 2-torsion point
    let t = curve.point(f25.constant(4), f25.constant(0)).unwrap();
    assert_eq!(p + q, t);
    assert_eq!(t.clone() + t, curve.identity());
}
