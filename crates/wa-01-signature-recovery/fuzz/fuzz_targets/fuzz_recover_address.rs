//! Fuzz target for personal-message signature recovery.
//!
//! ## Running
//!
//! ```bash
//! cd crates/wa-01-signature-recovery
//! cargo +nightly fuzz run fuzz_recover_address
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use wa_01_signature_recovery::{recover_address, EthSignature, SignatureError};

/// Fuzz input: a message and an arbitrary-length signature blob.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    message: Vec<u8>,
    signature: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    // Parsing must reject every length except 65
    let signature = match EthSignature::from_bytes(&input.signature) {
        Ok(signature) => signature,
        Err(error) => {
            assert!(matches!(error, SignatureError::MalformedInput(_)));
            assert_ne!(input.signature.len(), 65);
            return;
        }
    };

    // Recovery must never panic and must be deterministic
    let first = recover_address(&input.message, &signature);
    let second = recover_address(&input.message, &signature);
    assert_eq!(first, second);

    // A high-s signature must never yield an address
    if signature.s[0] >= 0x80 {
        assert!(first.is_err());
    }
});
