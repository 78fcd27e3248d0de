use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lsag_kit::keys::KeyPair;
use lsag_kit::lsag::RingSignature;
use lsag_kit::PublicKey;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

fn ring_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_signature");
    let mut csprng = ChaCha20Rng::seed_from_u64(0);
    let message = b"benchmark message";

    for n in [2usize, 11, 16] {
        let pairs: Vec<KeyPair> = (0..n).map(|_| KeyPair::generate(&mut csprng)).collect();
        let ring: Vec<PublicKey> = pairs.iter().map(|p| p.public).collect();
        let k = &pairs[n / 2].secret;

        group.bench_with_input(BenchmarkId::new("sign", n), &n, |b, _| {
            b.iter(|| RingSignature::sign(black_box(message), k, &ring, &mut csprng))
        });

        let signature = RingSignature::sign(message, k, &ring, &mut csprng).unwrap();
        group.bench_with_input(BenchmarkId::new("verify", n), &n, |b, _| {
            b.iter(|| signature.verify(black_box(message), &ring))
        });
    }
    group.finish();
}

criterion_group!(benches, ring_signature);
criterion_main!(benches);
