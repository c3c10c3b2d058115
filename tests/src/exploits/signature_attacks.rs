//! # Signature Attacks
//!
//! Malleability, out-of-range scalars, recovery-id tampering and truncation.

#[cfg(test)]
mod tests {
    use crate::fixtures::{now, service, TestWallet};
    use shared_crypto::secp256k1::{u256_to_be_bytes, N};
    use wa_01_signature_recovery::{invert_s, recover_address, EthSignature, SignatureError};
    use wa_03_authentication::{AddressCheck, AuthError, AuthenticationApi};

    struct Attempt {
        text: String,
        signature: EthSignature,
        wallet: TestWallet,
        stored: String,
    }

    fn attempt() -> Attempt {
        let service = service();
        let wallet = TestWallet::new(0x21);
        let stored = service.nonce_hash(&wallet.address, "attacknonce1");
        let text = wallet.message("attacknonce1").to_canonical_string();
        let signature = EthSignature::from_hex(&wallet.sign(&text)).unwrap();
        Attempt { text, signature, wallet, stored }
    }

    fn submit(attempt: &Attempt, signature: &EthSignature) -> Option<AuthError> {
        service()
            .authenticate_siwe_at(
                &attempt.text,
                &signature.to_hex(),
                &attempt.wallet.address,
                &attempt.stored,
                now(),
            )
            .error
    }

    #[test]
    fn test_untampered_signature_accepted() {
        let attempt = attempt();
        assert_eq!(submit(&attempt, &attempt.signature), None);
    }

    #[test]
    fn test_malleable_twin_rejected() {
        let attempt = attempt();
        let mut twin = attempt.signature.clone();
        twin.s = invert_s(&twin.s);
        twin.v = if twin.v == 27 { 28 } else { 27 };

        assert_eq!(
            submit(&attempt, &twin),
            Some(AuthError::Signature(SignatureError::Malleable))
        );
    }

    #[test]
    fn test_zero_scalars_rejected() {
        let attempt = attempt();

        let mut zero_r = attempt.signature.clone();
        zero_r.r = [0u8; 32];
        assert_eq!(
            submit(&attempt, &zero_r),
            Some(AuthError::Signature(SignatureError::OutOfRange { component: "r" }))
        );

        let mut zero_s = attempt.signature.clone();
        zero_s.s = [0u8; 32];
        assert_eq!(
            submit(&attempt, &zero_s),
            Some(AuthError::Signature(SignatureError::OutOfRange { component: "s" }))
        );
    }

    #[test]
    fn test_scalar_at_group_order_rejected() {
        let attempt = attempt();
        let mut forged = attempt.signature.clone();
        forged.r = u256_to_be_bytes(&N);

        assert_eq!(
            submit(&attempt, &forged),
            Some(AuthError::Signature(SignatureError::OutOfRange { component: "r" }))
        );
    }

    #[test]
    fn test_flipped_recovery_id_recovers_stranger() {
        let attempt = attempt();
        let mut flipped = attempt.signature.clone();
        flipped.v = if flipped.v == 27 { 28 } else { 27 };

        // Either a different key comes back or no key exists for that parity
        match submit(&attempt, &flipped) {
            Some(AuthError::AddressMismatch { leg: AddressCheck::RecoveredSigner, .. }) => {}
            Some(AuthError::Signature(SignatureError::InvalidRecovery(_))) => {}
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_unknown_recovery_ids_rejected() {
        let attempt = attempt();
        for v in [2u8, 26, 29, 35, 255] {
            let mut forged = attempt.signature.clone();
            forged.v = v;
            assert_eq!(
                submit(&attempt, &forged),
                Some(AuthError::Signature(SignatureError::InvalidRecoveryId(v)))
            );
        }
    }

    #[test]
    fn test_raw_parity_ids_equivalent() {
        let attempt = attempt();
        let mut raw = attempt.signature.clone();
        raw.v -= 27;
        assert_eq!(
            recover_address(attempt.text.as_bytes(), &raw).unwrap(),
            recover_address(attempt.text.as_bytes(), &attempt.signature).unwrap()
        );
    }

    #[test]
    fn test_truncated_and_padded_signatures_rejected() {
        let attempt = attempt();
        let full = attempt.signature.to_hex();
        let padded = format!("{full}00");

        for forged in [&full[..full.len() - 2], padded.as_str(), "0x", "0xzz"] {
            let result = service().authenticate_siwe_at(
                &attempt.text,
                forged,
                &attempt.wallet.address,
                &attempt.stored,
                now(),
            );
            assert!(
                matches!(
                    result.error,
                    Some(AuthError::Signature(SignatureError::MalformedInput(_)))
                ),
                "{forged}: {:?}",
                result.error
            );
        }
    }

    #[test]
    fn test_signature_over_other_text_rejected() {
        let attempt = attempt();
        let other = attempt.wallet.sign("I agree to nothing in particular");
        let result = service().authenticate_siwe_at(
            &attempt.text,
            &other,
            &attempt.wallet.address,
            &attempt.stored,
            now(),
        );
        assert!(matches!(
            result.error,
            Some(AuthError::AddressMismatch { leg: AddressCheck::RecoveredSigner, .. })
        ));
    }
}
