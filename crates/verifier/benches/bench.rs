//! Benchmarks for the verifier operations.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecverify::{hash, primitives::hex, recover, verify, HashAlgorithm};
use k256::ecdsa::SigningKey;

/// Benchmarks hashing, recovery and full verification.
pub fn benchmark_verifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("Verifier benchmarks");
    let group_name = |description: &str| format!("verifier bench | {description}");

    let message = hex::decode("1337133713371337").unwrap();
    let key = SigningKey::from_slice(&[0x42; 32]).unwrap();
    let public_key = key.verifying_key().to_encoded_point(false).as_bytes()[1..].to_vec();

    // === HASH ===

    for algorithm in HashAlgorithm::ALL {
        group.bench_function(group_name(&format!("hash {algorithm}")), |b| {
            b.iter(|| hash(black_box(&message), algorithm))
        });
    }

    // === RECOVER ===

    let digest = hash(&message, HashAlgorithm::Keccak256);
    let (sig, recid) = key.sign_prehash_recoverable(digest.as_slice()).unwrap();
    let mut signature = [0u8; 65];
    signature[..64].copy_from_slice(&sig.to_bytes());
    signature[64] = recid.to_byte() + 27;

    group.bench_function(group_name("recover"), |b| {
        b.iter(|| recover(black_box(&digest), black_box(&signature)).unwrap())
    });

    // === VERIFY ===

    group.bench_function(group_name("verify"), |b| {
        b.iter(|| {
            verify(
                black_box(&message),
                black_box(&signature),
                black_box(&public_key),
                HashAlgorithm::Keccak256,
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = benchmark_verifier
}
criterion_main!(benches);
