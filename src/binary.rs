//!
//! Elliptic curves over binary fields
//!
//! In characteristic 2 the short Weierstrass equation is singular, so
//! curves over F_{2^m} use the non-simplified form
//! `y² + xy = x³ + ax² + b` with its own group law.
//!

use crate::errors::{Error, Result};
use crate::fq::{ExtensionField, FqElement};
use crate::group::CurvePoint;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Signed;

/// A curve `y² + xy = x³ + ax² + b` over F_{2^m}.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryCurve {
    a: FqElement,
    b: FqElement,
}

impl BinaryCurve {
    /// Define the curve `y² + xy = x³ + ax² + b`.
    ///
    /// Returns [`Error::UnsupportedCharacteristic`] unless the coefficient
    /// field has characteristic 2, and [`Error::SingularCurve`] when
    /// `b = 0`.
    ///
    /// # Panics
    ///
    /// Panics when `a` and `b` belong to different fields.
    pub fn new(a: FqElement, b: FqElement) -> Result<Self> {
        assert!(
            a.field() == b.field(),
            "curve coefficients from different fields"
        );
        if a.field().characteristic() != &BigUint::from(2u32) {
            return Err(Error::UnsupportedCharacteristic);
        }
        if b.is_zero() {
            return Err(Error::SingularCurve);
        }
        Ok(Self { a, b })
    }

    /// The coefficient field F_{2^m}.
    pub fn field(&self) -> &ExtensionField {
        self.a.field()
    }

    /// The coefficient `a`.
    pub fn a(&self) -> &FqElement {
        &self.a
    }

    /// The coefficient `b`.
    pub fn b(&self) -> &FqElement {
        &self.b
    }

    /// Whether `(x, y)` satisfies the curve equation.
    pub fn contains(&self, x: &FqElement, y: &FqElement) -> bool {
        let lhs = y.clone() * y.clone() + x.clone() * y.clone();
        let rhs = x.clone() * x.clone() * x.clone()
            + self.a.clone() * x.clone() * x.clone()
            + self.b.clone();
        lhs == rhs
    }

    /// The affine point `(x, y)`.
    ///
    /// Returns [`Error::PointNotOnCurve`] when the coordinates do not
    /// satisfy the curve equation.
    pub fn point(&self, x: FqElement, y: FqElement) -> Result<BinaryPoint> {
        if !self.contains(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }
        Ok(BinaryPoint {
            curve: self.clone(),
            coords: Some((x, y)),
        })
    }

    /// The identity of the point group.
    pub fn identity(&self) -> BinaryPoint {
        BinaryPoint {
            curve: self.clone(),
            coords: None,
        }
    }
}

/// A point of a binary curve: an affine pair or the identity.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryPoint {
    curve: BinaryCurve,
    coords: Option<(FqElement, FqElement)>,
}

impl BinaryPoint {
    /// The curve this point lives on.
    pub fn curve(&self) -> &BinaryCurve {
        &self.curve
    }

    /// Whether this is the identity.
    pub fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    /// Both affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&FqElement, &FqElement)> {
        self.coords.as_ref().map(|(x, y)| (x, y))
    }

    /// The affine x-coordinate, or [`Error::IdentityPoint`].
    pub fn x(&self) -> Result<&FqElement> {
        match &self.coords {
            Some((x, _)) => Ok(x),
            None => Err(Error::IdentityPoint),
        }
    }

    /// The affine y-coordinate, or [`Error::IdentityPoint`].
    pub fn y(&self) -> Result<&FqElement> {
        match &self.coords {
            Some((_, y)) => Ok(y),
            None => Err(Error::IdentityPoint),
        }
    }

    /// Scalar multiplication by double-and-add, negating first for a
    /// negative scalar.
    pub fn mul(&self, scalar: &BigInt) -> BinaryPoint {
        if self.is_identity() {
            return self.clone();
        }
        let base = if scalar.sign() == Sign::Minus {
            -self.clone()
        } else {
            self.clone()
        };
        let magnitude = scalar
            .abs()
            .to_biguint()
            .expect("absolute value is non-negative");
        let mut acc = self.curve.identity();
        for digit in magnitude.to_radix_be(2) {
            acc = acc.clone() + acc;
            if digit == 1 {
                acc = acc + base.clone();
            }
        }
        acc
    }

    fn assert_same_curve(&self, other: &Self) {
        assert!(self.curve == other.curve, "points on different curves");
    }
}

impl CurvePoint for BinaryPoint {
    type Coordinate = FqElement;

    fn identity_of(&self) -> Self {
        self.curve.identity()
    }

    fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    fn x(&self) -> Result<&FqElement> {
        BinaryPoint::x(self)
    }

    fn mul(&self, scalar: &BigInt) -> Self {
        BinaryPoint::mul(self, scalar)
    }
}

impl Add for BinaryPoint {
    type Output = BinaryPoint;

    fn add(self, rhs: BinaryPoint) -> BinaryPoint {
        self.assert_same_curve(&rhs);
        let curve = self.curve.clone();
        let (x1, y1) = match self.coords {
            None => return rhs,
            Some(coords) => coords,
        };
        let (x2, y2) = match rhs.coords {
            None => {
                return BinaryPoint {
                    curve,
                    coords: Some((x1, y1)),
                }
            }
            Some(coords) => coords,
        };

        if x1 == x2 {
            if y1 != y2 || x1.is_zero() {
                // The two points are mutual inverses, or the doubled point
                // is 2-torsion (x = 0).
                return curve.identity();
            }
            let one = curve.field().one();
            let lambda = x1.clone() + y1.clone() / x1.clone();
            let x3 = lambda.clone() * lambda.clone() + lambda.clone() + curve.a.clone();
            let y3 = x1.clone() * x1 + (lambda + one) * x3.clone();
            return BinaryPoint {
                curve,
                coords: Some((x3, y3)),
            };
        }

        let lambda = (y1.clone() + y2) / (x1.clone() + x2.clone());
        let x3 = lambda.clone() * lambda.clone()
            + lambda.clone()
            + x1.clone()
            + x2
            + curve.a.clone();
        let y3 = lambda * (x1 + x3.clone()) + x3.clone() + y1;
        BinaryPoint {
            curve,
            coords: Some((x3, y3)),
        }
    }
}

impl Add for &BinaryPoint {
    type Output = BinaryPoint;

    fn add(self, rhs: &BinaryPoint) -> BinaryPoint {
        self.clone() + rhs.clone()
    }
}

impl Neg for BinaryPoint {
    type Output = BinaryPoint;

    /// `−(x, y) = (x, x + y)` in characteristic 2.
    fn neg(self) -> BinaryPoint {
        let coords = self.coords.map(|(x, y)| (x.clone(), x + y));
        BinaryPoint {
            curve: self.curve,
            coords,
        }
    }
}

impl Neg for &BinaryPoint {
    type Output = BinaryPoint;

    fn neg(self) -> BinaryPoint {
        -self.clone()
    }
}

impl Sub for BinaryPoint {
    type Output = BinaryPoint;

    fn sub(self, rhs: BinaryPoint) -> BinaryPoint {
        self + (-rhs)
    }
}

impl Sub for &BinaryPoint {
    type Output = BinaryPoint;

    fn sub(self, rhs: &BinaryPoint) -> BinaryPoint {
        self.clone() - rhs.clone()
    }
}

impl Mul<&BigInt> for &BinaryPoint {
    type Output = BinaryPoint;

    fn mul(self, scalar: &BigInt) -> BinaryPoint {
        BinaryPoint::mul(self, scalar)
    }
}

impl Mul<i64> for &BinaryPoint {
    type Output = BinaryPoint;

    fn mul(self, scalar: i64) -> BinaryPoint {
        BinaryPoint::mul(self, &BigInt::from(scalar))
    }
}

impl fmt::Display for BinaryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            Some((x, y)) => write!(f, "({x},{y})"),
            None => write!(f, "Identity"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::BinaryCurve;
    use crate::errors::Error;
    use crate::fq::ExtensionField;
    use crate::modp::PrimeField;
    use crate::poly::Poly;

    // F_16 = F_2[X] / (X^4 + X + 1)
    fn f16() -> ExtensionField {
        let f2 = PrimeField::new(2u32.into()).unwrap();
        ExtensionField::new(Poly::from_ints(&f2, &[1, 1, 0, 0, 1])).unwrap()
    }

    #[test]
    fn rejects_zero_b() {
        let f16 = f16();
        assert_eq!(
            BinaryCurve::new(f16.zero(), f16.zero()),
            Err(Error::SingularCurve)
        );
    }

    #[test]
    fn rejects_odd_characteristic() {
        let f3 = PrimeField::new(3u32.into()).unwrap();
        // X^2 + 1 is irreducible over F_3
        let f9 = ExtensionField::new(Poly::from_ints(&f3, &[1, 0, 1])).unwrap();
        assert_eq!(
            BinaryCurve::new(f9.zero(), f9.one()),
            Err(Error::UnsupportedCharacteristic)
        );
    }

    #[test]
    fn membership() {
        let f16 = f16();
        let curve = BinaryCurve::new(f16.zero(), f16.one()).unwrap();
        assert!(curve.contains(&f16.one(), &f16.zero()));
        assert!(curve.contains(&f16.zero(), &f16.one()));
        assert!(!curve.contains(&f16.element(&[0, 1]), &f16.zero()));
        assert!(curve.point(f16.element(&[0, 1]), f16.one()).is_err());
    }
}
