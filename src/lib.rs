#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod binary;
pub mod domain;
pub mod ecdh;
pub mod ecdsa;
mod errors;
pub mod euclid;
pub mod field;
pub mod fq;
pub mod group;
pub mod modp;
pub mod named_curves;
pub mod poly;
pub mod weierstrass;

pub use crate::binary::{BinaryCurve, BinaryPoint};
pub use crate::domain::DomainParameters;
pub use crate::ecdh::EcdhParty;
pub use crate::ecdsa::{Signature, SigningKey, VerifyingKey};
pub use crate::errors::{Error, Result};
pub use crate::field::{FieldElement, Rational};
pub use crate::fq::{ExtensionField, FqElement};
pub use crate::group::CurvePoint;
pub use crate::modp::{ModInt, PrimeField};
pub use crate::poly::Poly;
pub use crate::weierstrass::{EllipticCurve, Point};
