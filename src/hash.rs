//! Hash functions shared by the signature schemes.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use digest::generic_array::typenum::U64;
use digest::Digest;
use rand_core::{CryptoRng, RngCore};
use sha2::Sha512;
use sha3::Sha3_512;
use zeroize::Zeroize;

/// Reduce the 512-bit digest of the concatenated `parts` to a scalar
pub fn hash_to_scalar<Hash: Digest<OutputSize = U64>>(parts: &[&[u8]]) -> Scalar {
    let mut h = Hash::new();
    for part in parts {
        h.update(part);
    }
    Scalar::from_hash(h)
}

/// `H(P)`: maps the canonical encoding of a public key onto the group.
///
/// Used both for key images `x * H(P)` and for the second half of every ring equation.
pub fn hash_to_point(encoded: &[u8; 32]) -> RistrettoPoint {
    RistrettoPoint::from_hash(Sha512::new().chain_update(encoded))
}

/// The ring challenge `h(m, L, R)`
pub fn challenge(message: &[u8], l: &RistrettoPoint, r: &RistrettoPoint) -> Scalar {
    hash_to_scalar::<Sha3_512>(&[
        message,
        &l.compress().as_bytes()[..],
        &r.compress().as_bytes()[..],
    ])
}

/// A uniformly distributed scalar from 64 bytes of CSPRNG output, wide-reduced mod `n`
pub fn random_scalar<CSPRNG: CryptoRng + RngCore>(csprng: &mut CSPRNG) -> Scalar {
    let mut wide = [0u8; 64];
    csprng.fill_bytes(&mut wide);
    let s = Scalar::from_bytes_mod_order_wide(&wide);
    wide.zeroize();
    s
}
