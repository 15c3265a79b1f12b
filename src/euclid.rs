//!
//! Extended Euclidean algorithm over the integers
//!

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Extended Euclidean algorithm for non-negative integers.
///
/// Returns `(x, y, d)` with `a*x + b*y = d` and `d = gcd(a, b)`, computed
/// with the iterative two-vector update. The algorithm is symmetric in its
/// arguments: when `b > a` the inputs are swapped and the Bézout
/// coefficients are swapped back on return.
///
/// ```
/// use num_bigint::BigInt;
/// use ecckit::euclid::ext_gcd;
///
/// let (x, y, d) = ext_gcd(&BigInt::from(54), &BigInt::from(24));
/// assert_eq!((x, y, d), (BigInt::from(1), BigInt::from(-2), BigInt::from(6)));
/// ```
pub fn ext_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b > a {
        let (y, x, d) = ext_gcd(b, a);
        return (x, y, d);
    }
    if b.is_zero() {
        return (BigInt::one(), BigInt::zero(), a.clone());
    }

    let mut a = a.clone();
    let mut b = b.clone();
    let mut x2 = BigInt::one();
    let mut x1 = BigInt::zero();
    let mut y2 = BigInt::zero();
    let mut y1 = BigInt::one();
    while !b.is_zero() {
        let (q, r) = a.div_rem(&b);
        let x = &x2 - &q * &x1;
        let y = &y2 - &q * &y1;
        a = core::mem::replace(&mut b, r);
        x2 = core::mem::replace(&mut x1, x);
        y2 = core::mem::replace(&mut y1, y);
    }
    (x2, y2, a)
}
