//!
//! Error types shared by every layer of the toolkit
//!

/// Result alias with the crate-wide [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Attempted to invert zero, or to divide by the zero polynomial
    DivisionByZero,
    /// A modulus that must be prime failed the primality test
    NotPrime,
    /// A curve equation is not defined over a field of this characteristic
    UnsupportedCharacteristic,
    /// The discriminant vanishes (or `b = 0` in the binary form), so the
    /// equation does not describe a smooth curve
    SingularCurve,
    /// The coordinates do not satisfy the curve equation
    PointNotOnCurve,
    /// The identity point has no affine coordinates
    IdentityPoint,
    /// A reduction polynomial does not have the degree the field requires
    DegreeMismatch,
    /// Malformed domain parameters
    InvalidParameters,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "ecckit: division by zero"),
            Error::NotPrime => write!(f, "ecckit: modulus is not prime"),
            Error::UnsupportedCharacteristic => {
                write!(f, "ecckit: curve equation not defined over this characteristic")
            }
            Error::SingularCurve => write!(f, "ecckit: curve is singular"),
            Error::PointNotOnCurve => write!(f, "ecckit: point is not on the curve"),
            Error::IdentityPoint => write!(f, "ecckit: the identity point has no coordinates"),
            Error::DegreeMismatch => write!(f, "ecckit: reduction polynomial has the wrong degree"),
            Error::InvalidParameters => write!(f, "ecckit: invalid domain parameters"),
        }
    }
}

impl std::error::Error for Error {}
