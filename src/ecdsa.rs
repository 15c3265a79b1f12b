//!
//! Elliptic-curve digital signature algorithm over SHA-1
//!
//! The scheme is only defined when the curve's base field is F_p itself
//! (never a proper extension) and the generator's order n is prime; the
//! first requirement is enforced at the type level by working over
//! [`ModInt`] points, the second by building the scalar field Z_n, which
//! rejects composite moduli.
//!

use crate::domain::DomainParameters;
use crate::errors::Result;
use crate::modp::{ModInt, PrimeField};
use crate::weierstrass::Point;
use core::cmp::min;
use core::fmt;
use digest::Digest;
use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use sha1::Sha1;
use zeroize::Zeroizing;

/// Container of an ECDSA signature: the pair of plain integers `(r, s)`,
/// both in `[1, n − 1]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a new signature container from its components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Signature part r.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Signature part s.
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

/// ECDSA verification key: the signer's public point.
#[derive(Clone)]
pub struct VerifyingKey {
    params: DomainParameters<ModInt>,
    scalar_field: PrimeField,
    public_point: Point<ModInt>,
}

impl VerifyingKey {
    /// Build a verification key from the signer's public point.
    ///
    /// Returns [`Error::NotPrime`](crate::Error::NotPrime) when the group
    /// order is composite.
    pub fn new(params: DomainParameters<ModInt>, public_point: Point<ModInt>) -> Result<Self> {
        let scalar_field = PrimeField::new(params.order.clone())?;
        Ok(Self {
            params,
            scalar_field,
            public_point,
        })
    }

    /// The domain parameters this key runs over.
    pub fn params(&self) -> &DomainParameters<ModInt> {
        &self.params
    }

    /// The signer's public point Q.
    pub fn public_point(&self) -> &Point<ModInt> {
        &self.public_point
    }

    /// Verify a signature over `message`.
    ///
    /// Returns `false` both for out-of-range components and for a failed
    /// verification equation; no error escapes.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let n = &self.params.order;
        let (r, s) = (signature.r(), signature.s());
        if r.is_zero() || r >= n || s.is_zero() || s >= n {
            return false;
        }

        let e = message_scalar::<Sha1>(message, n);
        let w = match self.scalar_field.element(to_int(s)).inverse() {
            Ok(w) => w,
            Err(_) => return false,
        };
        let u1 = self.scalar_field.element(to_int(&e)) * w.clone();
        let u2 = self.scalar_field.element(to_int(r)) * w;

        let x_point = self.params.generator.mul(&to_int(u1.value()))
            + self.public_point.mul(&to_int(u2.value()));
        match x_point.coordinates() {
            Some((x, _)) => x.value() % n == *r,
            None => false,
        }
    }
}

impl fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("public_point", &self.public_point)
            .finish_non_exhaustive()
    }
}

/// ECDSA signing key: a private scalar together with its verification key.
#[derive(Clone)]
pub struct SigningKey {
    verifying_key: VerifyingKey,
    x: Zeroizing<BigUint>,
}

impl SigningKey {
    /// Generate a keypair with a uniformly sampled private scalar.
    ///
    /// Returns [`Error::NotPrime`](crate::Error::NotPrime) when the group
    /// order is composite.
    pub fn generate<R: CryptoRng + RngCore + ?Sized>(
        rng: &mut R,
        params: DomainParameters<ModInt>,
    ) -> Result<Self> {
        let private = rng.gen_biguint_range(&BigUint::one(), &params.order);
        Self::from_private_scalar(params, private)
    }

    /// Build a signing key from a known private scalar; the public point
    /// is recomputed as `d·G`.
    pub fn from_private_scalar(
        params: DomainParameters<ModInt>,
        private: BigUint,
    ) -> Result<Self> {
        let public_point = params.generator.mul(&to_int(&private));
        let verifying_key = VerifyingKey::new(params, public_point)?;
        Ok(Self {
            verifying_key,
            x: Zeroizing::new(private),
        })
    }

    /// The verification key of this keypair.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// The private scalar d.
    pub fn private_scalar(&self) -> &BigUint {
        &self.x
    }

    /// Sign a message.
    ///
    /// Samples a fresh nonce `k ∈ [1, n)` per attempt and retries whenever
    /// the derived `r` or `s` comes out zero, as the scheme prescribes.
    pub fn sign<R: CryptoRng + RngCore + ?Sized>(
        &self,
        rng: &mut R,
        message: &[u8],
    ) -> Result<Signature> {
        let params = &self.verifying_key.params;
        let zn = &self.verifying_key.scalar_field;
        let n = &params.order;
        let e = message_scalar::<Sha1>(message, n);

        loop {
            let k = rng.gen_biguint_range(&BigUint::one(), n);
            let nonce_point = params.generator.mul(&to_int(&k));

            let r = zn.element(to_int(nonce_point.x()?.value()));
            if r.is_zero() {
                continue;
            }

            let k_inv = zn.element(to_int(&k)).inverse()?;
            let s = k_inv
                * (zn.element(to_int(&e)) + zn.element(to_int(&self.x)) * r.clone());
            if s.is_zero() {
                continue;
            }

            return Ok(Signature::new(r.value().clone(), s.value().clone()));
        }
    }
}

impl fmt::Debug for SigningKey {
    /// Redacts the private scalar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

/// The integer interpretation of the leading `⌈bitlen(n)/8⌉` bytes of the
/// message digest, big-endian (truncated to the digest size when the
/// order is wider than the hash).
fn message_scalar<D: Digest>(message: &[u8], order: &BigUint) -> BigUint {
    let digest = D::digest(message);
    let order_bytes = (order.bits() + 7) / 8;
    let z_len = min(order_bytes, <D as Digest>::output_size());
    BigUint::from_bytes_be(&digest[..z_len])
}

fn to_int(value: &BigUint) -> BigInt {
    BigInt::from_biguint(Sign::Plus, value.clone())
}

#[cfg(test)]
mod test {
    use super::message_scalar;
    use num_bigint::BigUint;
    use num_traits::Zero;
    use sha1::Sha1;

    #[test]
    fn digest_truncation_tracks_the_order_width() {
        // 16-bit order keeps two bytes of the digest
        let order = BigUint::from(0xffffu32);
        let e = message_scalar::<Sha1>(b"abc", &order);
        assert!(e.bits() <= 16);

        // a 256-bit order swallows the whole 20-byte digest
        let wide = BigUint::from(1u32) << 255;
        let e = message_scalar::<Sha1>(b"abc", &wide);
        assert!(e.bits() <= 160);
        assert!(!e.is_zero());
    }
}
