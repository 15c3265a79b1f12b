//!
//! The abstract field contract the curve layer is generic over
//!

use crate::errors::{Error, Result};
use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_bigint::{BigInt, BigUint};
use num_rational::Ratio;
use num_traits::{One, Zero};

/// An exact rational number, the scalar type of curves over ℚ.
pub type Rational = Ratio<BigInt>;

/// Arithmetic shared by every field a curve can be defined over.
///
/// Implemented by [`ModInt`](crate::ModInt), [`FqElement`](crate::FqElement)
/// and [`Rational`]. Field-level constants are instance methods (`zero`,
/// `one`, `lift`): a value acts as the witness of its own field, which is
/// what lets curves over runtime-chosen moduli share one generic group law.
pub trait FieldElement:
    Clone
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity of this element's field.
    fn zero(&self) -> Self;

    /// The multiplicative identity of this element's field.
    fn one(&self) -> Self;

    /// Whether this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Promote a plain integer into this element's field.
    fn lift(&self, value: i64) -> Self;

    /// The multiplicative inverse, or [`Error::DivisionByZero`] on zero.
    fn inverse(&self) -> Result<Self>;

    /// The field characteristic; zero for ℚ.
    fn characteristic(&self) -> BigUint;
}

impl FieldElement for Rational {
    fn zero(&self) -> Self {
        <Rational as Zero>::zero()
    }

    fn one(&self) -> Self {
        <Rational as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn lift(&self, value: i64) -> Self {
        Rational::from_integer(BigInt::from(value))
    }

    fn inverse(&self) -> Result<Self> {
        if Zero::is_zero(self) {
            return Err(Error::DivisionByZero);
        }
        Ok(self.recip())
    }

    fn characteristic(&self) -> BigUint {
        BigUint::zero()
    }
}
