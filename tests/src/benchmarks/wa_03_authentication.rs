//! # WA-03 Authentication Benchmarks
//!
//! End-to-end cost of one sign-in, plus the pieces around it.

use crate::fixtures::{now, service, TestWallet};
use criterion::{black_box, Criterion};
use wa_02_siwe_message::parse_canonical;
use wa_03_authentication::{run_self_test, AuthenticationApi};

pub fn authenticate_siwe(c: &mut Criterion) {
    let mut group = c.benchmark_group("wa-03/authenticate_siwe");

    let service = service();
    let wallet = TestWallet::new(0x51);
    let stored = service.nonce_hash(&wallet.address, "benchnonce1");
    let text = wallet.message("benchnonce1").to_canonical_string();
    let signature = wallet.sign(&text);

    group.bench_function("success", |b| {
        b.iter(|| {
            let result = service.authenticate_siwe_at(
                black_box(&text),
                black_box(&signature),
                &wallet.address,
                &stored,
                now(),
            );
            assert!(result.success);
        })
    });

    group.bench_function("nonce_mismatch", |b| {
        b.iter(|| {
            black_box(service.authenticate_siwe_at(
                &text,
                &signature,
                &wallet.address,
                "00",
                now(),
            ))
        })
    });

    group.finish();
}

pub fn message_codec(c: &mut Criterion) {
    let mut message = TestWallet::new(0x52).message("codecnonce1");
    message.resources = (0..8)
        .map(|i| format!("https://app.example.org/resource/{i}"))
        .collect();
    let text = message.to_canonical_string();

    c.bench_function("wa-02/parse_canonical", |b| {
        b.iter(|| black_box(parse_canonical(black_box(&text))))
    });
}

pub fn nonces(c: &mut Criterion) {
    let service = service();
    let wallet = TestWallet::new(0x53);

    c.bench_function("wa-03/generate_nonce", |b| {
        b.iter(|| black_box(service.generate_nonce()))
    });
    c.bench_function("wa-03/nonce_hash", |b| {
        b.iter(|| black_box(service.nonce_hash(&wallet.address, "benchnonce1")))
    });
}

pub fn self_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("wa-03/self_test");
    group.sample_size(10);
    group.bench_function("full", |b| b.iter(|| black_box(run_self_test())));
    group.finish();
}
