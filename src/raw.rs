//! Byte level interface.
//!
//! | Value            | Layout                                             |
//! |------------------|----------------------------------------------------|
//! | secret key       | 32 bytes, big-endian scalar                        |
//! | public key       | 32 bytes, canonical Ristretto encoding             |
//! | ring signature   | key image (32) ‖ c₀ (32) ‖ one 32-byte response per ring member |
//! | Schnorr signature| R (32) ‖ s (32)                                    |
//! | shared secret    | 32 bytes                                           |
//!
//! Randomness comes from [`OsRng`]. Signing and key generation with an injected CSPRNG are
//! available on the typed API.
//!
//! Decoding failures are reported as [`Error::MalformedInput`]; a verification that merely fails
//! returns `Ok(false)`.

use crate::ecdh::SHARED_SECRET_LEN;
use crate::error::Error;
use crate::keys::{KeyPair, PublicKey, SecretKey};
use crate::lsag::RingSignature;
use crate::schnorr::{SchnorrSignature, SIGNATURE_LEN};
use crate::traits::Link;
use alloc::vec::Vec;
use log::debug;
use rand_core::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// An encoded key pair. The secret half is wiped when this is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPairBytes {
    pub secret_key: [u8; 32],
    pub public_key: [u8; 32],
}

pub fn generate_keypair() -> KeyPairBytes {
    let pair = KeyPair::generate(&mut OsRng);
    KeyPairBytes {
        secret_key: pair.secret.to_bytes(),
        public_key: pair.public.to_bytes(),
    }
}

pub fn get_public_key(secret_key: &[u8]) -> Result<[u8; 32], Error> {
    Ok(SecretKey::from_bytes(secret_key)?.public_key().to_bytes())
}

/// Decode every member of a ring, failing on the first malformed entry
pub fn decode_ring<Member: AsRef<[u8]>>(ring: &[Member]) -> Result<Vec<PublicKey>, Error> {
    ring.iter()
        .map(|member| PublicKey::from_bytes(member.as_ref()))
        .collect()
}

pub fn sign<Member: AsRef<[u8]>>(
    message: &[u8],
    secret_key: &[u8],
    ring: &[Member],
) -> Result<Vec<u8>, Error> {
    if ring.len() < 2 {
        return Err(Error::RingTooSmall(ring.len()));
    }
    let k = SecretKey::from_bytes(secret_key)?;
    let ring = decode_ring(ring)?;
    Ok(RingSignature::sign(message, &k, &ring, &mut OsRng)?.to_bytes())
}

pub fn verify<Member: AsRef<[u8]>>(
    message: &[u8],
    signature: &[u8],
    ring: &[Member],
) -> Result<bool, Error> {
    let ring = decode_ring(ring)?;
    let signature = RingSignature::from_bytes(signature, ring.len()).map_err(|e| {
        debug!("undecodable ring signature: {}", e);
        e
    })?;
    Ok(signature.verify(message, &ring))
}

/// Whether two encoded ring signatures carry the same key image
pub fn link(signature_1: &[u8], signature_2: &[u8]) -> Result<bool, Error> {
    let signature_1 = RingSignature::from_bytes_any_ring(signature_1)?;
    let signature_2 = RingSignature::from_bytes_any_ring(signature_2)?;
    Ok(Link::link(&signature_1, &signature_2))
}

pub fn schnorr_sign(message: &[u8], secret_key: &[u8]) -> Result<[u8; SIGNATURE_LEN], Error> {
    let k = SecretKey::from_bytes(secret_key)?;
    Ok(SchnorrSignature::sign(message, &k, &mut OsRng).to_bytes())
}

pub fn schnorr_verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool, Error> {
    let public_key = PublicKey::from_bytes(public_key)?;
    let signature = SchnorrSignature::from_bytes(signature)?;
    Ok(signature.verify(message, &public_key))
}

pub fn ecdh(secret_key: &[u8], peer_public_key: &[u8]) -> Result<[u8; SHARED_SECRET_LEN], Error> {
    let k = SecretKey::from_bytes(secret_key)?;
    let peer = PublicKey::from_bytes(peer_public_key)?;
    Ok(crate::ecdh::ecdh(&k, &peer).to_bytes())
}
