//!
//! Integers modulo a prime p
//!

use crate::errors::{Error, Result};
use crate::euclid::ext_gcd;
use crate::field::FieldElement;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_bigint::{prime::probably_prime, BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use std::sync::Arc;

/// Number of Miller-Rabin rounds used when validating a field modulus.
const PRIMALITY_ROUNDS: usize = 20;

/// Handle describing the prime field F_p.
///
/// The handle is a cheap clone (the prime is shared behind an [`Arc`]) and
/// every [`ModInt`] carries one, so a value always knows its modulus.
///
/// ```
/// use ecckit::PrimeField;
///
/// let z7 = PrimeField::new(7u32.into()).unwrap();
/// let n = z7.element(2);
/// let m = z7.element(6);
/// assert_eq!(n + m, z7.element(1));
/// ```
#[derive(Clone, Debug)]
pub struct PrimeField(Arc<BigUint>);

impl PrimeField {
    /// Create the field of integers modulo `p`.
    ///
    /// Returns [`Error::NotPrime`] when `p` fails a Miller-Rabin test.
    pub fn new(p: BigUint) -> Result<Self> {
        if !probably_prime(&p, PRIMALITY_ROUNDS) {
            return Err(Error::NotPrime);
        }
        Ok(Self(Arc::new(p)))
    }

    /// The prime modulus p.
    pub fn prime(&self) -> &BigUint {
        &self.0
    }

    /// Canonical representative of `value` modulo p, as a field element.
    ///
    /// Negative inputs are accepted and land in `[0, p)`.
    pub fn element(&self, value: impl Into<BigInt>) -> ModInt {
        ModInt {
            value: self.reduce(value.into()),
            field: self.clone(),
        }
    }

    /// The additive identity.
    pub fn zero(&self) -> ModInt {
        ModInt {
            value: BigUint::zero(),
            field: self.clone(),
        }
    }

    /// The multiplicative identity.
    pub fn one(&self) -> ModInt {
        ModInt {
            value: BigUint::one(),
            field: self.clone(),
        }
    }

    pub(crate) fn reduce(&self, value: BigInt) -> BigUint {
        let p = BigInt::from_biguint(Sign::Plus, self.prime().clone());
        value
            .mod_floor(&p)
            .to_biguint()
            .expect("canonical representative is non-negative")
    }

    pub(crate) fn add_raw(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % self.prime()
    }

    pub(crate) fn sub_raw(&self, a: &BigUint, b: &BigUint) -> BigUint {
        ((a + self.prime()) - b) % self.prime()
    }

    pub(crate) fn neg_raw(&self, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            self.prime() - a
        }
    }

    pub(crate) fn mul_raw(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % self.prime()
    }

    /// Inverse of a nonzero canonical representative.
    ///
    /// Callers must guarantee `a != 0`; the public entry point is
    /// [`ModInt::inverse`].
    pub(crate) fn inv_nonzero(&self, a: &BigUint) -> BigUint {
        let a = BigInt::from_biguint(Sign::Plus, a.clone());
        let p = BigInt::from_biguint(Sign::Plus, self.prime().clone());
        let (x, _, _) = ext_gcd(&a, &p);
        self.reduce(x)
    }
}

impl PartialEq for PrimeField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for PrimeField {}

/// An integer modulo a prime p, always held in canonical form.
///
/// Supports `+`, `-`, `*`, `/` and unary negation with the usual modular
/// meaning; the right operand of `+`, `-` and `*` may also be a plain
/// integer, which is promoted into the field first.
#[derive(Clone)]
pub struct ModInt {
    value: BigUint,
    field: PrimeField,
}

impl ModInt {
    /// The canonical representative in `[0, p)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The field this value belongs to.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Whether this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The multiplicative inverse modulo p.
    ///
    /// Computed with the extended Euclidean algorithm; since p is prime and
    /// the value is nonzero the gcd is 1 and the Bézout coefficient of the
    /// value is its inverse.
    ///
    /// Returns [`Error::DivisionByZero`] for the zero element.
    ///
    /// ```
    /// use ecckit::PrimeField;
    ///
    /// let z7 = PrimeField::new(7u32.into()).unwrap();
    /// assert_eq!(z7.element(6).inverse().unwrap(), z7.element(6));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(ModInt {
            value: self.field.inv_nonzero(&self.value),
            field: self.field.clone(),
        })
    }

    /// Modular exponentiation.
    ///
    /// A negative exponent inverts first: `x.pow(-k) = x.inverse()^k`, so it
    /// fails with [`Error::DivisionByZero`] on the zero element.
    pub fn pow(&self, exponent: &BigInt) -> Result<Self> {
        let (base, magnitude) = if exponent.sign() == Sign::Minus {
            (self.inverse()?, exponent.clone().neg().to_biguint())
        } else {
            (self.clone(), exponent.to_biguint())
        };
        let magnitude = magnitude.expect("exponent magnitude is non-negative");
        Ok(ModInt {
            value: base.value.modpow(&magnitude, self.field.prime()),
            field: self.field.clone(),
        })
    }

    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.field == other.field,
            "arithmetic between different prime fields"
        );
    }
}

impl PartialEq for ModInt {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.value == other.value
    }
}

impl Eq for ModInt {}

impl PartialEq<i64> for ModInt {
    fn eq(&self, other: &i64) -> bool {
        *self == self.field.element(*other)
    }
}

impl Add for ModInt {
    type Output = ModInt;

    fn add(self, rhs: ModInt) -> ModInt {
        self.assert_same_field(&rhs);
        ModInt {
            value: self.field.add_raw(&self.value, &rhs.value),
            field: self.field,
        }
    }
}

impl Add<i64> for ModInt {
    type Output = ModInt;

    fn add(self, rhs: i64) -> ModInt {
        let rhs = self.field.element(rhs);
        self + rhs
    }
}

impl Sub for ModInt {
    type Output = ModInt;

    fn sub(self, rhs: ModInt) -> ModInt {
        self.assert_same_field(&rhs);
        ModInt {
            value: self.field.sub_raw(&self.value, &rhs.value),
            field: self.field,
        }
    }
}

impl Sub<i64> for ModInt {
    type Output = ModInt;

    fn sub(self, rhs: i64) -> ModInt {
        let rhs = self.field.element(rhs);
        self - rhs
    }
}

impl Neg for ModInt {
    type Output = ModInt;

    fn neg(self) -> ModInt {
        ModInt {
            value: self.field.neg_raw(&self.value),
            field: self.field,
        }
    }
}

impl Mul for ModInt {
    type Output = ModInt;

    fn mul(self, rhs: ModInt) -> ModInt {
        self.assert_same_field(&rhs);
        ModInt {
            value: self.field.mul_raw(&self.value, &rhs.value),
            field: self.field,
        }
    }
}

impl Mul<i64> for ModInt {
    type Output = ModInt;

    fn mul(self, rhs: i64) -> ModInt {
        let rhs = self.field.element(rhs);
        self * rhs
    }
}

impl Div for ModInt {
    type Output = ModInt;

    /// # Panics
    ///
    /// Panics when dividing by zero, like integer division. Use
    /// [`ModInt::inverse`] for a fallible version.
    fn div(self, rhs: ModInt) -> ModInt {
        self.assert_same_field(&rhs);
        match rhs.inverse() {
            Ok(inverse) => self * inverse,
            Err(_) => panic!("division by zero in F_p"),
        }
    }
}

impl FieldElement for ModInt {
    fn zero(&self) -> Self {
        self.field.zero()
    }

    fn one(&self) -> Self {
        self.field.one()
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn lift(&self, value: i64) -> Self {
        self.field.element(value)
    }

    fn inverse(&self) -> Result<Self> {
        ModInt::inverse(self)
    }

    fn characteristic(&self) -> BigUint {
        self.field.prime().clone()
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mod {}", self.value, self.field.prime())
    }
}
