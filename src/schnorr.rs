//! Single signer Schnorr signatures over Ristretto.
//!
//! Signing: `(R, s) = (r*G, r + e*x)` with `e = H(R || P || m)`.
//! Verification: `s*G == R + e*P`.

use crate::encoding::{point_from_bytes, scalar_from_bytes, scalar_to_bytes, ELEMENT_LEN};
use crate::error::Error;
use crate::hash::{hash_to_scalar, random_scalar};
use crate::keys::{PublicKey, SecretKey};
use crate::traits::Verify;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};
use sha2::Sha512;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Encoded length of a Schnorr signature
pub const SIGNATURE_LEN: usize = 2 * ELEMENT_LEN;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchnorrSignature {
    /// Commitment `R = r*G`
    pub r: CompressedRistretto,
    /// Response `s = r + e*x`
    pub s: Scalar,
}

impl SchnorrSignature {
    pub fn sign<CSPRNG: CryptoRng + RngCore>(
        message: &[u8],
        k: &SecretKey,
        csprng: &mut CSPRNG,
    ) -> SchnorrSignature {
        let k_point = k.public_key();
        let mut r = random_scalar(csprng);
        let r_point = RistrettoPoint::mul_base(&r).compress();
        let e = challenge(&r_point, &k_point, message);
        let s = r + e * k.0;
        r.zeroize();
        SchnorrSignature { r: r_point, s }
    }

    pub fn verify(&self, message: &[u8], public_key: &PublicKey) -> bool {
        let r_point = match self.r.decompress() {
            Some(point) => point,
            None => return false,
        };
        let e = challenge(&self.r, public_key, message);
        let lhs = RistrettoPoint::mul_base(&self.s).compress();
        let rhs = (r_point + e * public_key.as_point()).compress();
        lhs.as_bytes().ct_eq(rhs.as_bytes()).into()
    }

    /// `R || s`, `s` big-endian
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..ELEMENT_LEN].copy_from_slice(self.r.as_bytes());
        bytes[ELEMENT_LEN..].copy_from_slice(&scalar_to_bytes(&self.s));
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(Error::length_mismatch(bytes.len(), SIGNATURE_LEN));
        }
        let (r, s) = bytes.split_at(ELEMENT_LEN);
        let (r, _) = point_from_bytes(r)?;
        Ok(SchnorrSignature {
            r,
            s: scalar_from_bytes(s)?,
        })
    }
}

impl<'a> Verify<&'a PublicKey> for SchnorrSignature {
    fn verify(&self, message: &[u8], public_key: &'a PublicKey) -> bool {
        SchnorrSignature::verify(self, message, public_key)
    }
}

fn challenge(r: &CompressedRistretto, public_key: &PublicKey, message: &[u8]) -> Scalar {
    hash_to_scalar::<Sha512>(&[&r.as_bytes()[..], &public_key.as_bytes()[..], message])
}
