//!
//! Domain parameters shared by the key-agreement and signature protocols
//!

use crate::field::FieldElement;
use crate::weierstrass::{EllipticCurve, Point};
use num_bigint::BigUint;

/// The `(E, G, n)` triple a protocol instance runs over: a curve, a base
/// point and the order of that point.
///
/// The fields are public on purpose — the triple is plain data, usually
/// obtained from [`crate::named_curves::domain_parameters`] — and the
/// generator is already validated against the curve equation by
/// construction.
#[derive(Clone, Debug)]
pub struct DomainParameters<F: FieldElement> {
    /// The curve E.
    pub curve: EllipticCurve<F>,
    /// The base point G.
    pub generator: Point<F>,
    /// The order n of G, i.e. the least n > 0 with n·G = O.
    pub order: BigUint,
}
