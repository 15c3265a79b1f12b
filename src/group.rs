//!
//! The point-group contract shared by every curve variant
//!

use crate::errors::Result;
use core::fmt::{Debug, Display};
use num_bigint::BigInt;

/// What a protocol needs from the points of a curve group, whatever the
/// underlying equation: the Weierstrass form over F_q or ℚ, or the binary
/// form over F_{2^m}.
///
/// Implemented by [`Point`](crate::Point) and
/// [`BinaryPoint`](crate::BinaryPoint).
pub trait CurvePoint: Clone + PartialEq + Debug + Display + Sized {
    /// The base-field element type of the affine coordinates.
    type Coordinate: Clone + PartialEq + Debug;

    /// The identity of the group this point belongs to.
    fn identity_of(&self) -> Self;

    /// Whether this is the identity.
    fn is_identity(&self) -> bool;

    /// The affine x-coordinate, or
    /// [`Error::IdentityPoint`](crate::Error::IdentityPoint) for the
    /// identity.
    fn x(&self) -> Result<&Self::Coordinate>;

    /// Scalar multiplication.
    fn mul(&self, scalar: &BigInt) -> Self;
}
