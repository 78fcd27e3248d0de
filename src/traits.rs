use crate::error::Error;
use crate::keys::SecretKey;
use crate::lsag::KeyImage;
use rand_core::{CryptoRng, RngCore};

/// Produce a signature over `message` with secret key `k`. The meaning of `Ring` depends on the
/// scheme: a ring of public keys for ring signatures, nothing for Schnorr.
pub trait Sign<Ring>: Sized {
    fn sign<CSPRNG: CryptoRng + RngCore>(
        message: &[u8],
        k: &SecretKey,
        ring: Ring,
        csprng: &mut CSPRNG,
    ) -> Result<Self, Error>;
}

/// Check a signature over `message` against the public data it claims to come from.
pub trait Verify<Ring> {
    fn verify(&self, message: &[u8], ring: Ring) -> bool;
}

pub trait Link {
    fn link(&self, other: &Self) -> bool;
}

pub trait KeyImageGen {
    fn generate_key_image(k: &SecretKey) -> KeyImage;
}
