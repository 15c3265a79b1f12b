//!
//! Elliptic curves in short Weierstrass form
//!
//! `y² = x³ + ax + b` over any [`FieldElement`] type whose characteristic
//! is neither 2 nor 3 — prime fields, extension fields of odd
//! characteristic and ℚ all share this one group law. Characteristic 2 has
//! its own equation and lives in [`crate::binary`].
//!

use crate::errors::{Error, Result};
use crate::field::FieldElement;
use crate::group::CurvePoint;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Signed;

/// A short-Weierstrass curve `y² = x³ + ax + b`.
///
/// Construction checks that the characteristic allows the simplified
/// equation and that the discriminant `4a³ + 27b²` does not vanish.
#[derive(Clone, Debug, PartialEq)]
pub struct EllipticCurve<F: FieldElement> {
    a: F,
    b: F,
}

impl<F: FieldElement> EllipticCurve<F> {
    /// Define the curve `y² = x³ + ax + b`.
    ///
    /// Returns [`Error::UnsupportedCharacteristic`] over fields of
    /// characteristic 2 or 3 and [`Error::SingularCurve`] when
    /// `4a³ + 27b² = 0`.
    pub fn new(a: F, b: F) -> Result<Self> {
        let characteristic = a.characteristic();
        if characteristic == BigUint::from(2u32) || characteristic == BigUint::from(3u32) {
            return Err(Error::UnsupportedCharacteristic);
        }
        let curve = Self { a, b };
        if curve.discriminant().is_zero() {
            return Err(Error::SingularCurve);
        }
        Ok(curve)
    }

    /// The coefficient `a`.
    pub fn a(&self) -> &F {
        &self.a
    }

    /// The coefficient `b`.
    pub fn b(&self) -> &F {
        &self.b
    }

    /// The discriminant `4a³ + 27b²`.
    pub fn discriminant(&self) -> F {
        let a = self.a.clone();
        let b = self.b.clone();
        a.lift(4) * a.clone() * a.clone() * a.clone() + b.lift(27) * b.clone() * b
    }

    /// Whether `(x, y)` satisfies the curve equation.
    pub fn contains(&self, x: &F, y: &F) -> bool {
        let lhs = y.clone() * y.clone();
        let rhs = x.clone() * x.clone() * x.clone() + self.a.clone() * x.clone() + self.b.clone();
        lhs == rhs
    }

    /// The affine point `(x, y)`.
    ///
    /// Returns [`Error::PointNotOnCurve`] when the coordinates do not
    /// satisfy the curve equation.
    pub fn point(&self, x: F, y: F) -> Result<Point<F>> {
        if !self.contains(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }
        Ok(Point {
            curve: self.clone(),
            coords: Some((x, y)),
        })
    }

    /// The identity of the point group (the point at infinity).
    pub fn identity(&self) -> Point<F> {
        Point {
            curve: self.clone(),
            coords: None,
        }
    }
}

/// A point of the curve group: an affine pair or the identity.
///
/// Points are immutable values; the group operations hand back fresh
/// points and never revalidate coordinates, which satisfy the curve
/// equation by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<F: FieldElement> {
    curve: EllipticCurve<F>,
    coords: Option<(F, F)>,
}

impl<F: FieldElement> Point<F> {
    /// The curve this point lives on.
    pub fn curve(&self) -> &EllipticCurve<F> {
        &self.curve
    }

    /// Whether this is the identity.
    pub fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    /// Both affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&F, &F)> {
        self.coords.as_ref().map(|(x, y)| (x, y))
    }

    /// The affine x-coordinate.
    ///
    /// Returns [`Error::IdentityPoint`] for the identity, which has no
    /// coordinates.
    pub fn x(&self) -> Result<&F> {
        match &self.coords {
            Some((x, _)) => Ok(x),
            None => Err(Error::IdentityPoint),
        }
    }

    /// The affine y-coordinate.
    ///
    /// Returns [`Error::IdentityPoint`] for the identity, which has no
    /// coordinates.
    pub fn y(&self) -> Result<&F> {
        match &self.coords {
            Some((_, y)) => Ok(y),
            None => Err(Error::IdentityPoint),
        }
    }

    /// Scalar multiplication by left-to-right double-and-add over the
    /// binary expansion of `|scalar|`; a negative scalar multiplies the
    /// negated point.
    pub fn mul(&self, scalar: &BigInt) -> Point<F> {
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

impl<F: FieldElement> CurvePoint for Point<F> {
    type Coordinate = F;

    fn identity_of(&self) -> Self {
        self.curve.identity()
    }

    fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    fn x(&self) -> Result<&F> {
        Point::x(self)
    }

    fn mul(&self, scalar: &BigInt) -> Self {
        Point::mul(self, scalar)
    }
}

impl<F: FieldElement> Add for Point<F> {
    type Output = Point<F>;

    fn add(self, rhs: Point<F>) -> Point<F> {
        self.assert_same_curve(&rhs);
        let curve = self.curve.clone();
        let (x1, y1) = match self.coords {
            None => return rhs,
            Some(coords) => coords,
        };
        let (x2, y2) = match rhs.coords {
            None => {
                return Point {
                    curve,
                    coords: Some((x1, y1)),
                }
            }
            Some(coords) => coords,
        };

        let lambda = if x1 == x2 {
            // Either the points are mutual inverses (a vertical chord, which
            // also covers doubling a 2-torsion point) or they coincide with
            // y ≠ 0 and the tangent slope applies.
            if (y1.clone() + y2.clone()).is_zero() {
                return curve.identity();
            }
            let numerator = y1.lift(3) * x1.clone() * x1.clone() + curve.a.clone();
            let denominator = y1.lift(2) * y1.clone();
            numerator / denominator
        } else {
            (y2 - y1.clone()) / (x2.clone() - x1.clone())
        };

        let x3 = lambda.clone() * lambda.clone() - x1.clone() - x2;
        let y3 = lambda * (x1 - x3.clone()) - y1;
        Point {
            curve,
            coords: Some((x3, y3)),
        }
    }
}

impl<F: FieldElement> Add for &Point<F> {
    type Output = Point<F>;

    fn add(self, rhs: &Point<F>) -> Point<F> {
        self.clone() + rhs.clone()
    }
}

impl<F: FieldElement> Neg for Point<F> {
    type Output = Point<F>;

    fn neg(self) -> Point<F> {
        let coords = self.coords.map(|(x, y)| (x, -y));
        Point {
            curve: self.curve,
            coords,
        }
    }
}

impl<F: FieldElement> Neg for &Point<F> {
    type Output = Point<F>;

    fn neg(self) -> Point<F> {
        -self.clone()
    }
}

impl<F: FieldElement> Sub for Point<F> {
    type Output = Point<F>;

    fn sub(self, rhs: Point<F>) -> Point<F> {
        self + (-rhs)
    }
}

impl<F: FieldElement> Sub for &Point<F> {
    type Output = Point<F>;

    fn sub(self, rhs: &Point<F>) -> Point<F> {
        self.clone() - rhs.clone()
    }
}

impl<F: FieldElement> Mul<&BigInt> for &Point<F> {
    type Output = Point<F>;

    fn mul(self, scalar: &BigInt) -> Point<F> {
        Point::mul(self, scalar)
    }
}

impl<F: FieldElement> Mul<i64> for &Point<F> {
    type Output = Point<F>;

    fn mul(self, scalar: i64) -> Point<F> {
        Point::mul(self, &BigInt::from(scalar))
    }
}

impl<F: FieldElement> Mul<i64> for Point<F> {
    type Output = Point<F>;

    fn mul(self, scalar: i64) -> Point<F> {
        Point::mul(&self, &BigInt::from(scalar))
    }
}

impl<F: FieldElement> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            Some((x, y)) => write!(f, "({x},{y})"),
            None => write!(f, "Identity"),
        }
    }
}
