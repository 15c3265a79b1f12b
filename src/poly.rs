//!
//! Univariate polynomials with coefficients in a prime field
//!
//! Coefficients are stored least-significant first: the first entry is the
//! constant term and the last is the leading coefficient. The zero
//! polynomial is canonicalised to a single zero coefficient.
//!

use crate::errors::{Error, Result};
use crate::modp::{ModInt, PrimeField};
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::RngCore;

/// A polynomial over F_p.
///
/// ```
/// use ecckit::{Poly, PrimeField};
///
/// let f2 = PrimeField::new(2u32.into()).unwrap();
/// let f = Poly::from_ints(&f2, &[0, 0, 1]);
/// let g = Poly::from_ints(&f2, &[1, 1]);
/// assert_eq!((f.clone() + g.clone()).to_string(), "X^2 + X + 1");
/// assert_eq!((f * g).to_string(), "X^3 + X^2");
/// ```
#[derive(Clone)]
pub struct Poly {
    field: PrimeField,
    coeffs: Vec<BigUint>,
}

impl Poly {
    /// Build a polynomial from coefficients in ascending-degree order.
    ///
    /// Coefficients are reduced modulo p and trailing zeros are stripped.
    pub fn new(field: &PrimeField, coefficients: Vec<BigInt>) -> Self {
        let coeffs = coefficients
            .into_iter()
            .map(|c| field.reduce(c))
            .collect();
        Self::canonical(field.clone(), coeffs)
    }

    /// Convenience constructor from machine integers.
    pub fn from_ints(field: &PrimeField, coefficients: &[i64]) -> Self {
        Self::new(field, coefficients.iter().map(|&c| BigInt::from(c)).collect())
    }

    /// The monomial `c·X^k`.
    ///
    /// ```
    /// use ecckit::{Poly, PrimeField};
    ///
    /// let f2 = PrimeField::new(2u32.into()).unwrap();
    /// assert_eq!(Poly::monomial(&f2, -1, 7).to_string(), "X^7");
    /// ```
    pub fn monomial(field: &PrimeField, coefficient: impl Into<BigInt>, degree: usize) -> Self {
        let mut coeffs = vec![BigUint::zero(); degree];
        coeffs.push(field.reduce(coefficient.into()));
        Self::canonical(field.clone(), coeffs)
    }

    /// The constant polynomial `c`.
    pub fn constant(field: &PrimeField, value: impl Into<BigInt>) -> Self {
        Self::monomial(field, value, 0)
    }

    /// The zero polynomial.
    pub fn zero(field: &PrimeField) -> Self {
        Self::constant(field, 0)
    }

    /// The constant polynomial 1.
    pub fn one(field: &PrimeField) -> Self {
        Self::constant(field, 1)
    }

    fn canonical(field: PrimeField, mut coeffs: Vec<BigUint>) -> Self {
        while coeffs.len() > 1 && coeffs.last().map_or(false, Zero::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(BigUint::zero());
        }
        Self { field, coeffs }
    }

    /// The coefficient field.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Canonical coefficients in ascending-degree order.
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coeffs
    }

    /// Whether this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// The degree, or `None` for the zero polynomial.
    ///
    /// `None` plays the role of −∞: it compares strictly below `Some(k)`
    /// for every natural k, which is exactly the ordering the division and
    /// degree laws rely on.
    pub fn degree(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// The coefficient of the highest-degree term (zero for the zero
    /// polynomial).
    pub fn leading_coeff(&self) -> ModInt {
        self.field
            .element(BigInt::from_biguint(num_bigint::Sign::Plus, self.leading_raw().clone()))
    }

    fn leading_raw(&self) -> &BigUint {
        self.coeffs.last().expect("coefficients are never empty")
    }

    /// Classical polynomial long division.
    ///
    /// Returns `(quotient, remainder)` with `deg remainder < deg divisor`,
    /// or [`Error::DivisionByZero`] when the divisor is the zero
    /// polynomial.
    pub fn div_rem(&self, divisor: &Poly) -> Result<(Poly, Poly)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.div_rem_inner(divisor))
    }

    // Contract: divisor is nonzero, so its leading coefficient is a unit.
    fn div_rem_inner(&self, divisor: &Poly) -> (Poly, Poly) {
        let field = &self.field;
        let divisor_degree = divisor.degree();
        let lead_inv = field.inv_nonzero(divisor.leading_raw());

        let mut quotient = Poly::zero(field);
        let mut remainder = self.clone();
        while !remainder.is_zero() && remainder.degree() >= divisor_degree {
            let (Some(rd), Some(dd)) = (remainder.degree(), divisor_degree) else {
                break;
            };
            let coefficient = field.mul_raw(remainder.leading_raw(), &lead_inv);
            let mut coeffs = vec![BigUint::zero(); rd - dd];
            coeffs.push(coefficient);
            let term = Poly::canonical(field.clone(), coeffs);
            quotient = quotient + term.clone();
            remainder = remainder - term * divisor.clone();
        }
        (quotient, remainder)
    }

    /// Remainder modulo a divisor that is known to be nonzero.
    pub(crate) fn rem_nonzero(&self, divisor: &Poly) -> Poly {
        if self.degree() < divisor.degree() {
            self.clone()
        } else {
            self.div_rem_inner(divisor).1
        }
    }

    /// Naive exponentiation by iterated multiplication.
    pub fn pow(&self, exponent: u32) -> Poly {
        let mut power = Poly::one(&self.field);
        for _ in 0..exponent {
            power = power * self.clone();
        }
        power
    }

    /// Square-and-multiply exponentiation reduced modulo `modulus` at every
    /// step; this is what keeps `X^(p^i) mod f` tractable for large p.
    pub fn powmod(&self, exponent: &BigUint, modulus: &Poly) -> Result<Poly> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let base = self.rem_nonzero(modulus);
        let mut acc = Poly::one(&self.field);
        for digit in exponent.to_radix_be(2) {
            acc = (acc.clone() * acc).rem_nonzero(modulus);
            if digit == 1 {
                acc = (acc * base.clone()).rem_nonzero(modulus);
            }
        }
        Ok(acc)
    }

    /// Extended Euclidean algorithm for polynomials.
    ///
    /// Returns `(s, t, d)` with `s·g + t·h = d` where `d` is the *monic*
    /// gcd of `g` and `h`. `g` must be nonzero.
    ///
    /// ```
    /// use ecckit::{Poly, PrimeField};
    ///
    /// let f2 = PrimeField::new(2u32.into()).unwrap();
    /// let g = Poly::from_ints(&f2, &[0, 0, 0, 1]);
    /// let h = Poly::from_ints(&f2, &[1, 0, 1, 1]);
    /// let (s, t, d) = Poly::ext_gcd(&g, &h).unwrap();
    /// assert_eq!(s.to_string(), "X^2 + X + 1");
    /// assert_eq!(t.to_string(), "X^2 + 1");
    /// assert_eq!(d.to_string(), "1");
    /// ```
    pub fn ext_gcd(g: &Poly, h: &Poly) -> Result<(Poly, Poly, Poly)> {
        assert!(
            g.field == h.field,
            "arithmetic between different prime fields"
        );
        let field = &g.field;
        let zero = Poly::zero(field);
        let one = Poly::one(field);

        let (mut s, mut t, mut d) = if h.is_zero() {
            (one, zero, g.clone())
        } else {
            let mut s2 = one.clone();
            let mut s1 = zero.clone();
            let mut t2 = zero;
            let mut t1 = one;
            let mut g = g.clone();
            let mut h = h.clone();
            while !h.is_zero() {
                let (q, r) = g.div_rem(&h)?;
                let s_next = s2.clone() - q.clone() * s1.clone();
                let t_next = t2.clone() - q * t1.clone();
                g = core::mem::replace(&mut h, r);
                s2 = core::mem::replace(&mut s1, s_next);
                t2 = core::mem::replace(&mut t1, t_next);
            }
            (s2, t2, g)
        };

        // Normalise the gcd to be monic; the leading coefficient is zero
        // only when g = h = 0.
        let lead = d.leading_coeff();
        if lead.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if lead != field.one() {
            let scale = Poly::constant(
                field,
                BigInt::from_biguint(num_bigint::Sign::Plus, lead.inverse()?.value().clone()),
            );
            s = s * scale.clone();
            t = t * scale.clone();
            d = d * scale;
        }
        Ok((s, t, d))
    }

    /// Rabin-style irreducibility test.
    ///
    /// The polynomial (made monic first) of degree m is irreducible over
    /// F_p iff it shares no nontrivial factor with `X^(p^i) − X` for every
    /// `i ≤ m/2`; the powers are computed incrementally modulo the
    /// polynomial itself.
    pub fn is_irreducible(&self) -> Result<bool> {
        let field = &self.field;
        let lead = self.leading_coeff();
        let f = if lead == field.one() {
            self.clone()
        } else {
            let scale = Poly::constant(
                field,
                BigInt::from_biguint(num_bigint::Sign::Plus, lead.inverse()?.value().clone()),
            );
            self.clone() * scale
        };
        let m = match f.degree() {
            Some(m) => m,
            None => return Err(Error::DivisionByZero),
        };

        let x = Poly::monomial(field, 1, 1);
        let p = field.prime().clone();
        let mut u = x.clone();
        for _ in 1..=(m / 2) {
            u = u.powmod(&p, &f)?;
            let (_, _, d) = Poly::ext_gcd(&f, &(u.clone() - x.clone()))?;
            if d != Poly::one(field) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Sample a random monic irreducible polynomial of the given degree.
    ///
    /// The constant term is drawn from `[1, p)` and the middle coefficients
    /// from `[0, p)`; candidates are resampled until the irreducibility
    /// test passes, so termination is probabilistic.
    pub fn generate_irreducible<R: RngCore + ?Sized>(
        field: &PrimeField,
        degree: usize,
        rng: &mut R,
    ) -> Result<Poly> {
        let p = field.prime();
        loop {
            let mut coeffs = Vec::with_capacity(degree + 1);
            coeffs.push(rng.gen_biguint_range(&BigUint::one(), p));
            for _ in 1..degree {
                coeffs.push(rng.gen_biguint_below(p));
            }
            coeffs.push(BigUint::one());
            let f = Poly::canonical(field.clone(), coeffs);
            if f.is_irreducible()? {
                return Ok(f);
            }
        }
    }

    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.field == other.field,
            "arithmetic between different prime fields"
        );
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.coeffs == other.coeffs
    }
}

impl Eq for Poly {}

impl PartialEq<i64> for Poly {
    /// A polynomial of degree < 1 equals a plain integer iff its constant
    /// term does.
    fn eq(&self, other: &i64) -> bool {
        self.degree() < Some(1) && self.coeffs[0] == *self.field.element(*other).value()
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        self.assert_same_field(&rhs);
        let field = self.field.clone();
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let zero = BigUint::zero();
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = rhs.coeffs.get(i).unwrap_or(&zero);
                field.add_raw(a, b)
            })
            .collect();
        Poly::canonical(field, coeffs)
    }
}

impl Add<i64> for Poly {
    type Output = Poly;

    fn add(self, rhs: i64) -> Poly {
        let rhs = Poly::constant(&self.field, rhs);
        self + rhs
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        self.assert_same_field(&rhs);
        let field = self.field.clone();
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let zero = BigUint::zero();
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero);
                let b = rhs.coeffs.get(i).unwrap_or(&zero);
                field.sub_raw(a, b)
            })
            .collect();
        Poly::canonical(field, coeffs)
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        let field = self.field.clone();
        let coeffs = self.coeffs.iter().map(|c| field.neg_raw(c)).collect();
        Poly::canonical(field, coeffs)
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        self.assert_same_field(&rhs);
        let field = self.field.clone();
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero(&field);
        }
        let mut coeffs = vec![BigUint::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = field.add_raw(&coeffs[i + j], &field.mul_raw(a, b));
            }
        }
        Poly::canonical(field, coeffs)
    }
}

impl Mul<i64> for Poly {
    type Output = Poly;

    fn mul(self, rhs: i64) -> Poly {
        let rhs = Poly::constant(&self.field, rhs);
        self * rhs
    }
}

impl Mul<Poly> for i64 {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        rhs * self
    }
}

impl Div for Poly {
    type Output = Poly;

    /// The quotient of the long division.
    ///
    /// # Panics
    ///
    /// Panics when the divisor is the zero polynomial; use
    /// [`Poly::div_rem`] for a fallible version.
    fn div(self, rhs: Poly) -> Poly {
        match self.div_rem(&rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("division by the zero polynomial"),
        }
    }
}

impl Rem for Poly {
    type Output = Poly;

    /// The remainder of the long division.
    ///
    /// # Panics
    ///
    /// Panics when the divisor is the zero polynomial; use
    /// [`Poly::div_rem`] for a fallible version.
    fn rem(self, rhs: Poly) -> Poly {
        match self.div_rem(&rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("division by the zero polynomial"),
        }
    }
}

impl fmt::Display for Poly {
    /// Monomials in descending-degree order joined by ` + `, e.g.
    /// `X^3 + 2*X + 1`; the zero polynomial prints as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut monomials = Vec::new();
        for (degree, coeff) in self.coeffs.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }
            let piece = match (degree, coeff.is_one()) {
                (0, _) => format!("{coeff}"),
                (1, true) => "X".to_string(),
                (1, false) => format!("{coeff}*X"),
                (_, true) => format!("X^{degree}"),
                (_, false) => format!("{coeff}*X^{degree}"),
            };
            monomials.push(piece);
        }
        write!(f, "{}", monomials.join(" + "))
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over F_{}", self, self.field.prime())
    }
}
