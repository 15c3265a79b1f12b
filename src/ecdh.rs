//!
//! Elliptic-curve Diffie-Hellman key agreement
//!

use crate::errors::Result;
use crate::group::CurvePoint;
use core::fmt;
use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::One;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// One participant of an ECDH exchange over any curve group.
///
/// A participant is built from the `(G, n)` half of the domain parameters
/// (the curve itself travels inside the point). It holds the private
/// scalar `d ∈ [1, n)` and the public point `Q = d·G`; each side sends its
/// public point to the peer and derives the shared secret as the
/// x-coordinate of `d·Q_peer`.
///
/// The sampling is only as good as the RNG supplied; production key
/// material needs a vetted cryptographically secure source.
///
/// ```
/// use ecckit::{named_curves::domain_parameters, EcdhParty};
/// use rand::rngs::OsRng;
///
/// let params = domain_parameters("secp256k1").unwrap();
/// let alice = EcdhParty::generate(&mut OsRng, params.generator.clone(), params.order.clone());
/// let bob = EcdhParty::generate(&mut OsRng, params.generator, params.order);
/// assert_eq!(
///     alice.shared_secret(bob.public_key()).unwrap(),
///     bob.shared_secret(alice.public_key()).unwrap(),
/// );
/// ```
#[derive(Clone)]
pub struct EcdhParty<P: CurvePoint> {
    generator: P,
    order: BigUint,
    private_key: Zeroizing<BigUint>,
    public_key: P,
}

impl<P: CurvePoint> EcdhParty<P> {
    /// Generate a keypair with a uniformly sampled private scalar.
    pub fn generate<R: CryptoRng + RngCore + ?Sized>(
        rng: &mut R,
        generator: P,
        order: BigUint,
    ) -> Self {
        let private = rng.gen_biguint_range(&BigUint::one(), &order);
        Self::from_private_scalar(generator, order, private)
    }

    /// Build a participant from a known private scalar.
    ///
    /// The public point is recomputed as `d·G`, so the `Q = d·G` invariant
    /// holds by construction.
    pub fn from_private_scalar(generator: P, order: BigUint, private: BigUint) -> Self {
        let scalar = BigInt::from_biguint(Sign::Plus, private.clone());
        let public_key = generator.mul(&scalar);
        Self {
            generator,
            order,
            private_key: Zeroizing::new(private),
            public_key,
        }
    }

    /// The base point G.
    pub fn generator(&self) -> &P {
        &self.generator
    }

    /// The order of G.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// The private scalar d.
    pub fn private_scalar(&self) -> &BigUint {
        &self.private_key
    }

    /// The public point Q = d·G.
    pub fn public_key(&self) -> &P {
        &self.public_key
    }

    /// The shared secret against a peer's public point: the x-coordinate
    /// of `d·Q_peer`, as a base-field element.
    ///
    /// Returns [`Error::IdentityPoint`](crate::Error::IdentityPoint) when
    /// the product is the identity (a degenerate peer point).
    pub fn shared_secret(&self, peer_public: &P) -> Result<P::Coordinate> {
        let scalar = BigInt::from_biguint(Sign::Plus, (*self.private_key).clone());
        let shared = peer_public.mul(&scalar);
        Ok(shared.x()?.clone())
    }
}

impl<P: CurvePoint> fmt::Debug for EcdhParty<P> {
    /// Redacts the private scalar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdhParty")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
