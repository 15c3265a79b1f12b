//! Property-based tests for polynomial arithmetic over prime fields.

use ecckit::{Poly, PrimeField};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

static PRIMES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

fn prime() -> impl Strategy<Value = u32> {
    proptest::sample::select(&PRIMES[..])
}

fn coeffs() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(any::<i64>(), 1..8)
}

fn degree_sum(p: &Poly, q: &Poly) -> Option<usize> {
    match (p.degree(), q.degree()) {
        (Some(dp), Some(dq)) => Some(dp + dq),
        _ => None,
    }
}

proptest! {
    #[test]
    fn commutative_ring_axioms(prime in prime(), l1 in coeffs(), l2 in coeffs(), l3 in coeffs()) {
        let field = PrimeField::new(prime.into()).unwrap();
        let p = Poly::from_ints(&field, &l1);
        let q = Poly::from_ints(&field, &l2);
        let r = Poly::from_ints(&field, &l3);
        let zero = Poly::zero(&field);
        let one = Poly::one(&field);

        prop_assert_eq!(p.clone() + (q.clone() + r.clone()), (p.clone() + q.clone()) + r.clone());
        prop_assert_eq!(p.clone() + q.clone(), q.clone() + p.clone());
        prop_assert_eq!(p.clone() + zero.clone(), p.clone());
        prop_assert_eq!(zero.clone() + p.clone(), p.clone());
        prop_assert_eq!(p.clone() + (-p.clone()), zero);
        prop_assert_eq!(p.clone() * (q.clone() * r.clone()), (p.clone() * q.clone()) * r.clone());
        prop_assert_eq!(p.clone() * one, p.clone());
        prop_assert_eq!(
            p.clone() * (q.clone() + r.clone()),
            p.clone() * q.clone() + p.clone() * r.clone()
        );
        prop_assert_eq!(
            (p.clone() + q.clone()) * r.clone(),
            p.clone() * r.clone() + q.clone() * r.clone()
        );
        prop_assert_eq!(p.clone() * q.clone(), q * p);
    }

    #[test]
    fn subtraction_round_trips(prime in prime(), l1 in coeffs(), l2 in coeffs()) {
        let field = PrimeField::new(prime.into()).unwrap();
        let p = Poly::from_ints(&field, &l1);
        let q = Poly::from_ints(&field, &l2);
        prop_assert_eq!((p.clone() - q.clone()) + q, p);
    }

    #[test]
    fn division_undoes_multiplication(prime in prime(), l1 in coeffs(), l2 in coeffs()) {
        let field = PrimeField::new(prime.into()).unwrap();
        let p = Poly::from_ints(&field, &l1);
        let q = Poly::from_ints(&field, &l2);
        prop_assume!(!q.is_zero());
        prop_assert_eq!((p.clone() * q.clone()) / q, p);
    }

    #[test]
    fn scalar_multiplication_commutes(prime in prime(), l1 in coeffs(), n in any::<i64>()) {
        let field = PrimeField::new(prime.into()).unwrap();
        let p = Poly::from_ints(&field, &l1);
        prop_assert_eq!(p.clone() * n, n * p);
    }

    #[test]
    fn power_laws(prime in prime(), l1 in coeffs(), e in 0u32..4, f in 0u32..4) {
        let field = PrimeField::new(prime.into()).unwrap();
        let p = Poly::from_ints(&field, &l1);
        prop_assert_eq!(p.pow(e) * p.pow(f), p.pow(e + f));
        prop_assert_eq!(p.pow(e).pow(f), p.pow(e * f));
    }

    #[test]
    fn degree_laws(prime in prime(), l1 in coeffs(), l2 in coeffs()) {
        let field = PrimeField::new(prime.into()).unwrap();
        let p = Poly::from_ints(&field, &l1);
        let q = Poly::from_ints(&field, &l2);
        prop_assert_eq!((p.clone() * q.clone()).degree(), degree_sum(&p, &q));
        prop_assert!((p.clone() + q.clone()).degree() <= p.degree().max(q.degree()));
    }

    #[test]
    fn extended_euclid_invariants(prime in prime(), l1 in coeffs(), l2 in coeffs()) {
        let field = PrimeField::new(prime.into()).unwrap();
        let g = Poly::from_ints(&field, &l1);
        let h = Poly::from_ints(&field, &l2);
        prop_assume!(!g.is_zero());

        let (s, t, d) = Poly::ext_gcd(&g, &h).unwrap();
        prop_assert_eq!(s.clone() * g.clone() + t.clone() * h.clone(), d.clone());
        // the gcd is monic and divides both inputs
        prop_assert_eq!(d.leading_coeff(), field.one());
        prop_assert!(g.div_rem(&d).unwrap().1.is_zero());
        prop_assert!(h.div_rem(&d).unwrap().1.is_zero());
        if !h.is_zero() {
            prop_assert!(s.degree() <= h.degree());
            prop_assert!(t.degree() <= g.degree());
        }
    }
}

#[test]
fn euclid_worked_example_over_f2() {
    let f2 = PrimeField::new(2u32.into()).unwrap();
    let g = Poly::from_ints(&f2, &[0, 0, 0, 1]);
    let h = Poly::from_ints(&f2, &[1, 0, 1, 1]);
    let (s, t, d) = Poly::ext_gcd(&g, &h).unwrap();
    assert_eq!(s, Poly::from_ints(&f2, &[1, 1, 1]));
    assert_eq!(t, Poly::from_ints(&f2, &[1, 0, 1]));
    assert_eq!(d, Poly::one(&f2));
}

#[test]
fn generated_irreducibles_over_f2_come_from_the_catalogue() {
    // every monic irreducible of degree ≤ 4 over F_2
    let f2 = PrimeField::new(2u32.into()).unwrap();
    let catalogue: Vec<Poly> = [
        vec![1, 1],
        vec![0, 1],
        vec![1, 1, 1],
        vec![1, 1, 0, 1],
        vec![1, 0, 1, 1],
        vec![1, 1, 0, 0, 1],
        vec![1, 1, 1, 1, 1],
        vec![1, 0, 0, 1, 1],
    ]
    .iter()
    .map(|coeffs| Poly::from_ints(&f2, coeffs))
    .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(5040);
    for degree in 1..=4 {
        for _ in 0..5 {
            let f = Poly::generate_irreducible(&f2, degree, &mut rng).unwrap();
            assert_eq!(f.degree(), Some(degree));
            assert!(f.is_irreducible().unwrap());
            assert!(catalogue.contains(&f), "{f} is not in the catalogue");
        }
    }
}
