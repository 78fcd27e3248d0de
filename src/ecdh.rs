//! Diffie-Hellman shared secrets: `Sha512(x * P)` truncated to 32 bytes.

use crate::keys::{PublicKey, SecretKey};
use core::fmt;
use sha2::{Digest, Sha512};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a shared secret
pub const SHARED_SECRET_LEN: usize = 32;

/// A 32-byte shared secret, zeroized on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SHARED_SECRET_LEN]);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_LEN] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; SHARED_SECRET_LEN] {
        self.0
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

/// Derive the secret shared between `k` and the owner of `peer`
pub fn ecdh(k: &SecretKey, peer: &PublicKey) -> SharedSecret {
    let shared = (k.0 * peer.as_point()).compress();
    let mut digest = Sha512::digest(shared.as_bytes());
    let mut secret = [0u8; SHARED_SECRET_LEN];
    secret.copy_from_slice(&digest[..SHARED_SECRET_LEN]);
    digest.as_mut_slice().zeroize();
    SharedSecret(secret)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::keys::KeyPair;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn symmetric() {
        let mut csprng = ChaCha20Rng::seed_from_u64(21);
        let alice = KeyPair::generate(&mut csprng);
        let eve = KeyPair::generate(&mut csprng);
        assert_eq!(ecdh(&alice.secret, &eve.public), ecdh(&eve.secret, &alice.public));
    }

    #[test]
    fn distinct_peers_distinct_secrets() {
        let mut csprng = ChaCha20Rng::seed_from_u64(22);
        let alice = KeyPair::generate(&mut csprng);
        let bob = KeyPair::generate(&mut csprng);
        let eve = KeyPair::generate(&mut csprng);
        assert_ne!(ecdh(&alice.secret, &bob.public), ecdh(&alice.secret, &eve.public));
    }

    #[test]
    fn truncated_sha512_of_shared_point() {
        let mut csprng = ChaCha20Rng::seed_from_u64(23);
        let alice = KeyPair::generate(&mut csprng);
        let bob = KeyPair::generate(&mut csprng);
        let point = (alice.secret.0 * bob.public.as_point()).compress();
        let digest = Sha512::digest(point.as_bytes());
        assert_eq!(&ecdh(&alice.secret, &bob.public).as_bytes()[..], &digest[..32]);
    }
}
