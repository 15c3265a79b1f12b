//! Property-based tests for the prime-field layer and the integer
//! extended Euclidean algorithm.

use ecckit::euclid::ext_gcd;
use ecckit::PrimeField;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use proptest::prelude::*;

static PRIMES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

fn prime() -> impl Strategy<Value = u32> {
    proptest::sample::select(&PRIMES[..])
}

proptest! {
    #[test]
    fn commutative_ring_axioms(p in prime(), n in any::<i64>(), m in any::<i64>(), k in any::<i64>()) {
        let field = PrimeField::new(p.into()).unwrap();
        let x = field.element(n);
        let y = field.element(m);
        let t = field.element(k);
        let zero = field.zero();
        let one = field.one();

        prop_assert_eq!(x.clone() + (y.clone() + t.clone()), (x.clone() + y.clone()) + t.clone());
        prop_assert_eq!(x.clone() + y.clone(), y.clone() + x.clone());
        prop_assert_eq!(x.clone() + zero.clone(), x.clone());
        prop_assert_eq!(zero.clone() + x.clone(), x.clone());
        prop_assert_eq!(x.clone() + (-x.clone()), zero.clone());
        prop_assert_eq!(x.clone() * (y.clone() * t.clone()), (x.clone() * y.clone()) * t.clone());
        prop_assert_eq!(x.clone() * one.clone(), x.clone());
        prop_assert_eq!(
            x.clone() * (y.clone() + t.clone()),
            x.clone() * y.clone() + x.clone() * t.clone()
        );
        prop_assert_eq!(
            (x.clone() + y.clone()) * t.clone(),
            x.clone() * t.clone() + y.clone() * t.clone()
        );
        prop_assert_eq!(x.clone() * y.clone(), y * x.clone());

        if !x.is_zero() {
            prop_assert_eq!(x.clone() * x.inverse().unwrap(), one);
        }
    }

    #[test]
    fn exponent_laws(p in prime(), n in any::<i64>(), e in -40i64..40, f in -40i64..40) {
        let field = PrimeField::new(p.into()).unwrap();
        let x = field.element(n);
        prop_assume!(!(x.is_zero() && (e < 0 || f < 0)));

        let xe = x.pow(&BigInt::from(e)).unwrap();
        let xf = x.pow(&BigInt::from(f)).unwrap();
        prop_assert_eq!(xe.clone() * xf.clone(), x.pow(&BigInt::from(e + f)).unwrap());
        prop_assert_eq!(xe.pow(&BigInt::from(f)).unwrap(), x.pow(&BigInt::from(e * f)).unwrap());
        if !x.is_zero() {
            prop_assert_eq!(xe / xf, x.pow(&BigInt::from(e - f)).unwrap());
        }
    }

    #[test]
    fn bezout_identity(a in 1u64.., b in 1u64..) {
        let a = BigInt::from(a);
        let b = BigInt::from(b);
        let (x, y, d) = ext_gcd(&a, &b);

        prop_assert_eq!(&a * &x + &b * &y, d.clone());
        prop_assert_eq!(d.clone(), a.gcd(&b));

        let a_divides_b = (&b % &a).is_zero();
        let b_divides_a = (&a % &b).is_zero();
        if !a_divides_b && !b_divides_a {
            prop_assert!(x.abs() < &b / &d);
            prop_assert!(y.abs() < &a / &d);
        }
    }
}
