//! # WA-01 Signature Recovery Benchmarks
//!
//! - Single recovery, our curve arithmetic vs `k256`
//! - Parallel batch recovery at growing batch sizes
//! - Adversarial inputs that must fail fast (high-s, bad v)

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use rand::Rng;
use shared_crypto::hash_ethereum_message;
use std::time::Duration;
use wa_01_signature_recovery::{
    batch_recover, invert_s, recover_address, sign_message, EthSignature, RecoveryRequest,
    SecretKey,
};

fn random_key() -> SecretKey {
    let mut rng = rand::thread_rng();
    loop {
        let bytes: [u8; 32] = rng.gen();
        if let Ok(key) = SecretKey::from_bytes(&bytes) {
            return key;
        }
    }
}

fn signed_message(key: &SecretKey, size: usize) -> (Vec<u8>, EthSignature) {
    let mut rng = rand::thread_rng();
    let message: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
    let signature = sign_message(&message, key).unwrap();
    (message, signature)
}

pub fn recover_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("wa-01/recover_single");
    group.measurement_time(Duration::from_secs(10));

    let key = random_key();
    let (message, signature) = signed_message(&key, 300);

    group.bench_function("in_house", |b| {
        b.iter(|| black_box(recover_address(black_box(&message), black_box(&signature))))
    });

    let prehash = hash_ethereum_message(&message);
    let mut rs = [0u8; 64];
    rs[..32].copy_from_slice(&signature.r);
    rs[32..].copy_from_slice(&signature.s);
    let oracle_signature = Signature::from_slice(&rs).unwrap();
    let recovery_id = RecoveryId::from_byte(signature.v - 27).unwrap();

    group.bench_function("k256_reference", |b| {
        b.iter(|| {
            black_box(VerifyingKey::recover_from_prehash(
                black_box(&prehash),
                &oracle_signature,
                recovery_id,
            ))
        })
    });

    group.finish();
}

pub fn recover_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("wa-01/recover_batch");
    group.sample_size(20);

    let key = random_key();
    for size in [10usize, 100, 500] {
        let requests: Vec<RecoveryRequest> = (0..size)
            .map(|_| {
                let (message, signature) = signed_message(&key, 200);
                RecoveryRequest {
                    message,
                    signature,
                    expected_signer: Some(key.address()),
                }
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &requests, |b, requests| {
            b.iter(|| black_box(batch_recover(requests)))
        });
    }

    group.finish();
}

pub fn reject_adversarial(c: &mut Criterion) {
    let mut group = c.benchmark_group("wa-01/reject_adversarial");

    let key = random_key();
    let (message, signature) = signed_message(&key, 100);

    let mut high_s = signature.clone();
    high_s.s = invert_s(&high_s.s);
    group.bench_function("high_s", |b| {
        b.iter(|| black_box(recover_address(&message, &high_s).is_err()))
    });

    let mut bad_v = signature;
    bad_v.v = 31;
    group.bench_function("bad_recovery_id", |b| {
        b.iter(|| black_box(recover_address(&message, &bad_v).is_err()))
    });

    group.finish();
}

pub fn sign(c: &mut Criterion) {
    let key = random_key();
    let message = b"Sign in to the example app.";

    c.bench_function("wa-01/sign_message", |b| {
        b.iter(|| black_box(sign_message(black_box(message), &key)))
    });
}
