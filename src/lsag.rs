use crate::encoding::{point_from_bytes, scalar_from_bytes, scalar_to_bytes, ELEMENT_LEN};
use crate::error::Error;
use crate::hash::{challenge, random_scalar};
use crate::keys::{PublicKey, SecretKey};
use crate::traits::{KeyImageGen, Link, Sign, Verify};
use alloc::vec::Vec;
use curve25519_dalek::constants;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::MultiscalarMul;
use log::debug;
use rand_core::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The "image" of a secret key `x`: `I = x * H(x * G) = x * H(P)`.
///
/// It depends on nothing but the secret key, so every signature made with the same key carries
/// the same image no matter the message or the ring.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CompressedRistretto", into = "CompressedRistretto")
)]
#[derive(Clone, Copy, Debug)]
pub struct KeyImage {
    point: RistrettoPoint,
    compressed: CompressedRistretto,
}

impl KeyImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (compressed, point) = point_from_bytes(bytes)?;
        Ok(KeyImage { point, compressed })
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.compressed.as_bytes()
    }

    pub fn as_point(&self) -> &RistrettoPoint {
        &self.point
    }
}

impl From<&SecretKey> for KeyImage {
    fn from(k: &SecretKey) -> Self {
        let point = k.0 * k.public_key().hashed_to_point();
        KeyImage {
            point,
            compressed: point.compress(),
        }
    }
}

impl TryFrom<CompressedRistretto> for KeyImage {
    type Error = Error;

    fn try_from(compressed: CompressedRistretto) -> Result<Self, Error> {
        KeyImage::from_bytes(compressed.as_bytes())
    }
}

impl From<KeyImage> for CompressedRistretto {
    fn from(image: KeyImage) -> Self {
        image.compressed
    }
}

impl ConstantTimeEq for KeyImage {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl PartialEq for KeyImage {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for KeyImage {}

/// Linkable Spontaneous Anonymous Group (LSAG) signature
/// > Any member of a ring can sign on behalf of the ring. A verifier learns that one of the ring's
/// > keys signed, not which one, and two signatures by the same key share a key image.
///
/// Please read tests at the bottom of the source code for this module for examples on how to use
/// it
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingSignature {
    /// Key image of the signer, used for linking
    pub key_image: KeyImage,
    /// The challenge landing on ring index 0
    pub challenge: Scalar,
    /// One response per ring member, in ring order
    pub responses: Vec<Scalar>,
}

impl RingSignature {
    /// Sign `message` on behalf of `ring` with secret key `k`, whose public key must be in `ring`.
    ///
    /// Consumes one nonce and `ring.len() - 1` fake responses from `csprng`.
    pub fn sign<CSPRNG: CryptoRng + RngCore>(
        message: &[u8],
        k: &SecretKey,
        ring: &[PublicKey],
        csprng: &mut CSPRNG,
    ) -> Result<Self, Error> {
        let n = ring.len();
        if n < 2 {
            return Err(Error::RingTooSmall(n));
        }

        // Provers public key
        let k_point = k.public_key();

        let secret_index: usize =
            Option::<usize>::from(find_signer(&k_point, ring)).ok_or(Error::KeyNotInRing)?;

        debug!("ring signing over {} members", n);

        let key_image = RingSignature::generate_key_image(k);

        let mut a: Scalar = random_scalar(csprng);

        let mut rs: Vec<Scalar> = vec![Scalar::ZERO; n];

        let mut cs: Vec<Scalar> = vec![Scalar::ZERO; n];

        cs[(secret_index + 1) % n] = challenge(
            message,
            &RistrettoPoint::mul_base(&a),
            &(a * k_point.hashed_to_point()),
        );

        for offset in 1..n {
            let i = (secret_index + offset) % n;
            rs[i] = random_scalar(csprng);
            let (l, r) = ring_terms(&rs[i], &cs[i], &ring[i], key_image.as_point());
            cs[(i + 1) % n] = challenge(message, &l, &r);
        }

        rs[secret_index] = a - (cs[secret_index] * k.0);
        a.zeroize();

        Ok(RingSignature {
            key_image,
            challenge: cs[0],
            responses: rs,
        })
    }

    /// Walk the ring from index 0 and check that the challenges close back on `challenge`.
    pub fn verify(&self, message: &[u8], ring: &[PublicKey]) -> bool {
        let n = ring.len();
        if n < 2 {
            debug!("rejecting ring signature over {} members", n);
            return false;
        }
        if self.responses.len() != n {
            debug!(
                "rejecting ring signature with {} responses for {} members",
                self.responses.len(),
                n
            );
            return false;
        }

        let mut reconstructed_c: Scalar = self.challenge;
        for (member, response) in ring.iter().zip(&self.responses) {
            let (l, r) = ring_terms(response, &reconstructed_c, member, self.key_image.as_point());
            reconstructed_c = challenge(message, &l, &r);
        }

        self.challenge.ct_eq(&reconstructed_c).into()
    }

    /// Whether both signatures were made by the same secret key
    pub fn link(&self, other: &RingSignature) -> bool {
        self.key_image.ct_eq(&other.key_image).into()
    }

    pub fn key_image(&self) -> &KeyImage {
        &self.key_image
    }

    /// Encoded length of a signature over a ring of `ring_len` members
    pub fn encoded_len(ring_len: usize) -> usize {
        2 * ELEMENT_LEN + ELEMENT_LEN * ring_len
    }

    /// `key_image || challenge || responses`, scalars big-endian
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(RingSignature::encoded_len(self.responses.len()));
        bytes.extend_from_slice(self.key_image.as_bytes());
        bytes.extend_from_slice(&scalar_to_bytes(&self.challenge));
        for response in &self.responses {
            bytes.extend_from_slice(&scalar_to_bytes(response));
        }
        bytes
    }

    /// Decode a signature made over a ring of `ring_len` members
    pub fn from_bytes(bytes: &[u8], ring_len: usize) -> Result<Self, Error> {
        let expected = RingSignature::encoded_len(ring_len);
        if bytes.len() != expected {
            return Err(Error::length_mismatch(bytes.len(), expected));
        }
        RingSignature::decode(bytes)
    }

    /// Decode a signature, taking the ring size from the number of response blocks
    pub fn from_bytes_any_ring(bytes: &[u8]) -> Result<Self, Error> {
        let header = RingSignature::encoded_len(0);
        if bytes.len() < header {
            return Err(Error::length_mismatch(bytes.len(), header));
        }
        let tail = bytes.len() - header;
        if tail % ELEMENT_LEN != 0 {
            let expected = RingSignature::encoded_len(tail / ELEMENT_LEN);
            return Err(Error::length_mismatch(bytes.len(), expected));
        }
        RingSignature::decode(bytes)
    }

    fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let (image, rest) = bytes.split_at(ELEMENT_LEN);
        let (c, responses) = rest.split_at(ELEMENT_LEN);
        Ok(RingSignature {
            key_image: KeyImage::from_bytes(image)?,
            challenge: scalar_from_bytes(c)?,
            responses: responses
                .chunks_exact(ELEMENT_LEN)
                .map(scalar_from_bytes)
                .collect::<Result<Vec<Scalar>, Error>>()?,
        })
    }
}

/// `L = s*G + c*P` and `R = s*H(P) + c*I` for one ring member
fn ring_terms(
    s: &Scalar,
    c: &Scalar,
    member: &PublicKey,
    key_image: &RistrettoPoint,
) -> (RistrettoPoint, RistrettoPoint) {
    let l = RistrettoPoint::multiscalar_mul(
        &[*s, *c],
        &[constants::RISTRETTO_BASEPOINT_POINT, *member.as_point()],
    );
    let r = RistrettoPoint::multiscalar_mul(&[*s, *c], &[member.hashed_to_point(), *key_image]);
    (l, r)
}

/// Position of `k_point` in `ring`, found without branching on which entry matched.
///
/// Every member is compared and the index is accumulated with a conditional select. When a key
/// occurs more than once the last occurrence wins.
fn find_signer(k_point: &PublicKey, ring: &[PublicKey]) -> CtOption<usize> {
    let mut index = 0u64;
    let mut found = Choice::from(0);
    for (i, member) in ring.iter().enumerate() {
        let matches = member.ct_eq(k_point);
        index.conditional_assign(&(i as u64), matches);
        found |= matches;
    }
    CtOption::new(index as usize, found)
}

impl KeyImageGen for RingSignature {
    fn generate_key_image(k: &SecretKey) -> KeyImage {
        KeyImage::from(k)
    }
}

impl<'a> Sign<&'a [PublicKey]> for RingSignature {
    fn sign<CSPRNG: CryptoRng + RngCore>(
        message: &[u8],
        k: &SecretKey,
        ring: &'a [PublicKey],
        csprng: &mut CSPRNG,
    ) -> Result<Self, Error> {
        RingSignature::sign(message, k, ring, csprng)
    }
}

impl<'a> Verify<&'a [PublicKey]> for RingSignature {
    fn verify(&self, message: &[u8], ring: &'a [PublicKey]) -> bool {
        RingSignature::verify(self, message, ring)
    }
}

impl Link for RingSignature {
    fn link(&self, other: &Self) -> bool {
        RingSignature::link(self, other)
    }
}
