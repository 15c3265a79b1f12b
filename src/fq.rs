//!
//! Finite fields of prime-power order
//!
//! F_{p^n} is realised in its polynomial representation: elements are the
//! residues of F_p[X] modulo a fixed irreducible polynomial of degree n.
//!

use crate::errors::{Error, Result};
use crate::field::FieldElement;
use crate::modp::PrimeField;
use crate::poly::Poly;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use rand::RngCore;
use std::sync::Arc;

#[derive(Debug)]
struct ExtRepr {
    prime: PrimeField,
    degree: usize,
    modulus: Poly,
    order: BigUint,
}

/// Handle describing the extension field F_{p^n}.
///
/// The handle is a cheap clone shared by all of its elements. The reduction
/// polynomial may be supplied (it is trusted to be irreducible; see
/// [`Poly::is_irreducible`]) or sampled with [`ExtensionField::generate`].
///
/// ```
/// use ecckit::{ExtensionField, Poly, PrimeField};
///
/// let f2 = PrimeField::new(2u32.into()).unwrap();
/// // X^4 + X + 1
/// let f16 = ExtensionField::new(Poly::from_ints(&f2, &[1, 1, 0, 0, 1])).unwrap();
/// let x = f16.element(&[0, 1]);
/// assert_eq!(x.pow(&4.into()).unwrap(), f16.element(&[1, 1]));
/// ```
#[derive(Clone, Debug)]
pub struct ExtensionField(Arc<ExtRepr>);

impl ExtensionField {
    /// Build F_{p^n} from a reduction polynomial of degree n ≥ 1.
    ///
    /// The prime p is the coefficient field of the polynomial. Returns
    /// [`Error::DegreeMismatch`] for a constant (or zero) polynomial.
    pub fn new(modulus: Poly) -> Result<Self> {
        let degree = match modulus.degree() {
            Some(degree) if degree >= 1 => degree,
            _ => return Err(Error::DegreeMismatch),
        };
        let prime = modulus.field().clone();
        let mut order = BigUint::one();
        for _ in 0..degree {
            order *= prime.prime();
        }
        Ok(Self(Arc::new(ExtRepr {
            prime,
            degree,
            modulus,
            order,
        })))
    }

    /// Build F_{p^n} with a freshly sampled irreducible of degree n.
    pub fn generate<R: RngCore + ?Sized>(
        field: &PrimeField,
        degree: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let modulus = Poly::generate_irreducible(field, degree, rng)?;
        Self::new(modulus)
    }

    /// The coefficient field F_p.
    pub fn prime_field(&self) -> &PrimeField {
        &self.0.prime
    }

    /// The field characteristic p.
    pub fn characteristic(&self) -> &BigUint {
        self.0.prime.prime()
    }

    /// The extension degree n.
    pub fn degree(&self) -> usize {
        self.0.degree
    }

    /// The reduction polynomial.
    pub fn modulus(&self) -> &Poly {
        &self.0.modulus
    }

    /// The number of elements q = p^n.
    pub fn order(&self) -> &BigUint {
        &self.0.order
    }

    /// An element from its coefficients, least-significant first.
    pub fn element(&self, coefficients: &[i64]) -> FqElement {
        self.from_poly(Poly::from_ints(&self.0.prime, coefficients))
    }

    /// The constant element `value`.
    pub fn constant(&self, value: i64) -> FqElement {
        self.from_poly(Poly::constant(&self.0.prime, value))
    }

    /// An element from a polynomial over F_p, reduced modulo the reduction
    /// polynomial.
    ///
    /// # Panics
    ///
    /// Panics when the polynomial's coefficient field is not this field's
    /// F_p.
    pub fn from_poly(&self, poly: Poly) -> FqElement {
        assert!(
            poly.field() == &self.0.prime,
            "polynomial belongs to a different prime field"
        );
        FqElement {
            poly: poly.rem_nonzero(&self.0.modulus),
            field: self.clone(),
        }
    }

    /// The additive identity.
    pub fn zero(&self) -> FqElement {
        self.constant(0)
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FqElement {
        self.constant(1)
    }
}

impl PartialEq for ExtensionField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.prime == other.0.prime
                && self.0.degree == other.0.degree
                && self.0.modulus == other.0.modulus)
    }
}

impl Eq for ExtensionField {}

/// An element of F_{p^n}, stored as the canonical remainder modulo the
/// field's reduction polynomial.
#[derive(Clone, Debug)]
pub struct FqElement {
    poly: Poly,
    field: ExtensionField,
}

impl FqElement {
    /// The field this element belongs to.
    pub fn field(&self) -> &ExtensionField {
        &self.field
    }

    /// The element in its polynomial representation (degree < n).
    pub fn as_poly(&self) -> &Poly {
        &self.poly
    }

    /// Whether this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.poly.is_zero()
    }

    /// The multiplicative inverse.
    ///
    /// The extended Euclidean algorithm on the element and the reduction
    /// polynomial yields `s·self + t·f = 1` (the gcd is 1 because f is
    /// irreducible and self is nonzero), so the s-cofactor is the inverse.
    ///
    /// Returns [`Error::DivisionByZero`] for the zero element.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let (s, _, _) = Poly::ext_gcd(&self.poly, self.field.modulus())?;
        Ok(self.field.from_poly(s))
    }

    /// Exponentiation by square-and-multiply.
    ///
    /// The exponent is first reduced modulo q − 1 (Lagrange), which is what
    /// keeps astronomically large exponents cheap; a negative exponent
    /// inverts the base first.
    ///
    /// Zero raised to any power is zero and one raised to any power is one;
    /// both short-circuit before the exponent is even looked at.
    pub fn pow(&self, exponent: &BigInt) -> Result<Self> {
        if self.is_zero() {
            return Ok(self.clone());
        }
        if *self == self.field.one() || exponent.is_zero() {
            return Ok(self.field.one());
        }

        let group_order = self.field.order() - &BigUint::one();
        let (base, magnitude) = if exponent.is_negative() {
            (self.inverse()?, exponent.clone().neg())
        } else {
            (self.clone(), exponent.clone())
        };
        let magnitude = magnitude
            .to_biguint()
            .expect("exponent magnitude is non-negative");
        Ok(base.pow_unsigned(&(magnitude % group_order)))
    }

    fn pow_unsigned(&self, exponent: &BigUint) -> Self {
        let mut acc = self.field.one();
        for digit in exponent.to_radix_be(2) {
            acc = acc.clone() * acc;
            if digit == 1 {
                acc = acc * self.clone();
            }
        }
        acc
    }

    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.field == other.field,
            "arithmetic between different extension fields"
        );
    }
}

impl PartialEq for FqElement {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.poly == other.poly
    }
}

impl Eq for FqElement {}

impl PartialEq<i64> for FqElement {
    fn eq(&self, other: &i64) -> bool {
        self.poly == *other
    }
}

impl Add for FqElement {
    type Output = FqElement;

    fn add(self, rhs: FqElement) -> FqElement {
        self.assert_same_field(&rhs);
        let field = self.field.clone();
        field.from_poly(self.poly + rhs.poly)
    }
}

impl Sub for FqElement {
    type Output = FqElement;

    fn sub(self, rhs: FqElement) -> FqElement {
        self.assert_same_field(&rhs);
        let field = self.field.clone();
        field.from_poly(self.poly - rhs.poly)
    }
}

impl Neg for FqElement {
    type Output = FqElement;

    fn neg(self) -> FqElement {
        let field = self.field.clone();
        field.from_poly(-self.poly)
    }
}

impl Mul for FqElement {
    type Output = FqElement;

    fn mul(self, rhs: FqElement) -> FqElement {
        self.assert_same_field(&rhs);
        let field = self.field.clone();
        field.from_poly(self.poly * rhs.poly)
    }
}

impl Div for FqElement {
    type Output = FqElement;

    /// # Panics
    ///
    /// Panics when dividing by zero; use [`FqElement::inverse`] for a
    /// fallible version.
    fn div(self, rhs: FqElement) -> FqElement {
        self.assert_same_field(&rhs);
        match rhs.inverse() {
            Ok(inverse) => self * inverse,
            Err(_) => panic!("division by zero in F_q"),
        }
    }
}

impl fmt::Display for FqElement {
    /// `{[c0, c1, …, c_{n−1}]; q}` with the coefficient list zero-padded to
    /// the extension degree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self
            .poly
            .coefficients()
            .iter()
            .map(|c| c.to_string())
            .collect();
        while parts.len() < self.field.degree() {
            parts.push("0".to_string());
        }
        write!(f, "{{[{}]; {}}}", parts.join(", "), self.field.order())
    }
}

impl FieldElement for FqElement {
    fn zero(&self) -> Self {
        self.field.zero()
    }

    fn one(&self) -> Self {
        self.field.one()
    }

    fn is_zero(&self) -> bool {
        self.poly.is_zero()
    }

    fn lift(&self, value: i64) -> Self {
        self.field.constant(value)
    }

    fn inverse(&self) -> Result<Self> {
        FqElement::inverse(self)
    }

    fn characteristic(&self) -> BigUint {
        self.field.characteristic().clone()
    }
}
