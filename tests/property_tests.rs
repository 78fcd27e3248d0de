use lsag_kit::keys::KeyPair;
use lsag_kit::lsag::RingSignature;
use lsag_kit::schnorr::SchnorrSignature;
use lsag_kit::{ecdh, Error, PublicKey};

use proptest::prelude::*;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

fn setup(seed: u64, n: usize) -> (ChaCha20Rng, Vec<KeyPair>, Vec<PublicKey>) {
    let mut csprng = ChaCha20Rng::seed_from_u64(seed);
    let pairs: Vec<KeyPair> = (0..n).map(|_| KeyPair::generate(&mut csprng)).collect();
    let ring = pairs.iter().map(|p| p.public).collect();
    (csprng, pairs, ring)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn any_member_signs_any_message(
        seed in any::<u64>(),
        n in 2usize..7,
        signer in any::<prop::sample::Index>(),
        message in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        let (mut csprng, pairs, ring) = setup(seed, n);
        let k = &pairs[signer.index(n)].secret;
        let signature = RingSignature::sign(&message, k, &ring, &mut csprng).unwrap();
        prop_assert!(signature.verify(&message, &ring));

        let decoded = RingSignature::from_bytes(&signature.to_bytes(), n).unwrap();
        prop_assert!(decoded.verify(&message, &ring));
    }

    #[test]
    fn same_key_links_distinct_keys_do_not(
        seed in any::<u64>(),
        m1 in prop::collection::vec(any::<u8>(), 0..64),
        m2 in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let (mut csprng, pairs, ring) = setup(seed, 3);
        let a1 = RingSignature::sign(&m1, &pairs[0].secret, &ring, &mut csprng).unwrap();
        let a2 = RingSignature::sign(&m2, &pairs[0].secret, &ring, &mut csprng).unwrap();
        let b = RingSignature::sign(&m2, &pairs[1].secret, &ring, &mut csprng).unwrap();
        prop_assert!(a1.link(&a2));
        prop_assert!(!a1.link(&b));
    }

    #[test]
    fn outsiders_cannot_sign(seed in any::<u64>(), n in 2usize..6) {
        let (mut csprng, _, ring) = setup(seed, n);
        let outsider = KeyPair::generate(&mut csprng);
        prop_assert_eq!(
            RingSignature::sign(b"m", &outsider.secret, &ring, &mut csprng),
            Err(Error::KeyNotInRing)
        );
    }

    #[test]
    fn schnorr_round_trip(seed in any::<u64>(), message in prop::collection::vec(any::<u8>(), 0..128)) {
        let (mut csprng, pairs, _) = setup(seed, 2);
        let signature = SchnorrSignature::sign(&message, &pairs[0].secret, &mut csprng);
        prop_assert!(signature.verify(&message, &pairs[0].public));
        prop_assert!(!signature.verify(&message, &pairs[1].public));
    }

    #[test]
    fn ecdh_is_symmetric(seed in any::<u64>()) {
        let (_, pairs, _) = setup(seed, 2);
        prop_assert_eq!(
            ecdh(&pairs[0].secret, &pairs[1].public),
            ecdh(&pairs[1].secret, &pairs[0].public)
        );
    }
}
