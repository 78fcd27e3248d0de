//! Key material: secret scalars, their base point multiples, and key pairs.

use crate::encoding::{point_from_bytes, scalar_from_bytes, scalar_to_bytes};
use crate::error::Error;
use crate::hash::{hash_to_point, random_scalar};
use core::fmt;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A secret scalar. Zeroized on drop, never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(pub(crate) Scalar);

impl SecretKey {
    /// Draw a fresh secret from 64 bytes of CSPRNG output
    pub fn generate<CSPRNG: CryptoRng + RngCore>(csprng: &mut CSPRNG) -> Self {
        SecretKey(random_scalar(csprng))
    }

    /// Decode a 32-byte big-endian scalar. Values `>= n` are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        scalar_from_bytes(bytes).map(SecretKey)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        scalar_to_bytes(&self.0)
    }

    /// `x * G`
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_point(RistrettoPoint::mul_base(&self.0))
    }
}

impl From<Scalar> for SecretKey {
    fn from(s: Scalar) -> Self {
        SecretKey(s)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// A group element `x * G`, held alongside its canonical encoding
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CompressedRistretto", into = "CompressedRistretto")
)]
#[derive(Clone, Copy, Debug)]
pub struct PublicKey {
    pub(crate) point: RistrettoPoint,
    pub(crate) compressed: CompressedRistretto,
}

impl PublicKey {
    pub fn from_point(point: RistrettoPoint) -> Self {
        PublicKey {
            point,
            compressed: point.compress(),
        }
    }

    /// Decode a canonical 32-byte encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (compressed, point) = point_from_bytes(bytes)?;
        Ok(PublicKey { point, compressed })
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.compressed.as_bytes()
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.compressed.to_bytes()
    }

    pub fn as_point(&self) -> &RistrettoPoint {
        &self.point
    }

    /// `H(P)`, the second generator this key contributes to a ring
    pub fn hashed_to_point(&self) -> RistrettoPoint {
        hash_to_point(self.as_bytes())
    }
}

impl ConstantTimeEq for PublicKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.compressed.as_bytes().ct_eq(other.compressed.as_bytes())
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for PublicKey {}

impl TryFrom<CompressedRistretto> for PublicKey {
    type Error = Error;

    fn try_from(compressed: CompressedRistretto) -> Result<Self, Error> {
        PublicKey::from_bytes(compressed.as_bytes())
    }
}

impl From<PublicKey> for CompressedRistretto {
    fn from(k: PublicKey) -> Self {
        k.compressed
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(k: &SecretKey) -> Self {
        k.public_key()
    }
}

/// A secret key and the public key derived from it
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl KeyPair {
    pub fn generate<CSPRNG: CryptoRng + RngCore>(csprng: &mut CSPRNG) -> Self {
        KeyPair::from(SecretKey::generate(csprng))
    }
}

impl From<SecretKey> for KeyPair {
    fn from(secret: SecretKey) -> Self {
        let public = secret.public_key();
        KeyPair { secret, public }
    }
}

/// Generate a key pair using the supplied CSPRNG
pub fn generate_keypair<CSPRNG: CryptoRng + RngCore>(csprng: &mut CSPRNG) -> KeyPair {
    KeyPair::generate(csprng)
}

/// Derive the public key of a secret key
pub fn get_public_key(secret: &SecretKey) -> PublicKey {
    secret.public_key()
}
