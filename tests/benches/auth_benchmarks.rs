//! # Wallet-Auth Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | wa-01 Signature Recovery | single, batch, adversarial rejection, signing |
//! | wa-02 SIWE Message | canonical parse |
//! | wa-03 Authentication | full sign-in, nonce issue/hash, self-test |

use criterion::{criterion_group, criterion_main};
use wa_tests::benchmarks::{wa_01_recovery, wa_03_authentication};

criterion_group!(
    benches,
    wa_01_recovery::recover_single,
    wa_01_recovery::recover_batch,
    wa_01_recovery::reject_adversarial,
    wa_01_recovery::sign,
    wa_03_authentication::authenticate_siwe,
    wa_03_authentication::message_codec,
    wa_03_authentication::nonces,
    wa_03_authentication::self_test,
);

criterion_main!(benches);
