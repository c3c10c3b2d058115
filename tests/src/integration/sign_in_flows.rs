//! # Sign-In Flows
//!
//! Full nonce → sign → verify round trips through `AuthenticationApi`:
//!
//! ```text
//! issue nonce ──→ store hash ──→ wallet signs SIWE text ──→ authenticate
//!                     │                                        │
//!                     └───────── NonceStore lookup ────────────┘
//! ```

#[cfg(test)]
mod tests {
    use crate::fixtures::{now, service, MemoryNonceStore, TestWallet, DOMAIN};
    use chrono::Duration;
    use rayon::prelude::*;
    use wa_02_siwe_message::{parse, SiweError, SiweField};
    use wa_03_authentication::{AddressCheck, AuthError, AuthenticationApi};

    #[test]
    fn test_end_to_end_success() {
        let service = service();
        let wallet = TestWallet::new(0x01);
        let nonce = service.generate_nonce();
        let stored = service.nonce_hash(&wallet.address, &nonce);

        let text = wallet.message(&nonce).to_canonical_string();
        let result =
            service.authenticate_siwe_at(&text, &wallet.sign(&text), &wallet.address, &stored, now());

        assert!(result.success, "{:?}", result.error);
        assert_eq!(result.recovered_address, Some(wallet.address.clone()));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_end_to_end_chain_id_abc() {
        let service = service();
        let wallet = TestWallet::new(0x01);
        let nonce = service.generate_nonce();
        let stored = service.nonce_hash(&wallet.address, &nonce);

        let mut message = wallet.message(&nonce);
        message.chain_id = "abc".to_string();
        let text = message.to_canonical_string();
        let result =
            service.authenticate_siwe_at(&text, &wallet.sign(&text), &wallet.address, &stored, now());

        assert!(!result.success);
        assert!(matches!(
            result.error,
            Some(AuthError::Siwe(SiweError::Validation { field: SiweField::ChainId, .. }))
        ));
    }

    #[test]
    fn test_valid_signature_from_other_key() {
        let service = service();
        let victim = TestWallet::new(0x01);
        let attacker = TestWallet::new(0x02);
        let nonce = service.generate_nonce();
        let stored = service.nonce_hash(&victim.address, &nonce);

        let text = victim.message(&nonce).to_canonical_string();
        let result =
            service.authenticate_siwe_at(&text, &attacker.sign(&text), &victim.address, &stored, now());

        assert!(matches!(
            result.error,
            Some(AuthError::AddressMismatch { leg: AddressCheck::RecoveredSigner, .. })
        ));
    }

    #[test]
    fn test_store_backed_flow() {
        let service = service();
        let store = MemoryNonceStore::new();
        let wallet = TestWallet::new(0x07);

        let nonce = store.issue(&service, &wallet.address, Duration::minutes(10));
        let text = wallet.message(&nonce).to_canonical_string();
        let signature = wallet.sign(&text);

        let result =
            service.authenticate_with_store(&store, &text, &signature, &wallet.address, now());
        assert!(result.success, "{:?}", result.error);

        // The host consumes the nonce after login; a second attempt must fail
        assert!(store.consume(&wallet.address).is_some());
        let replay =
            service.authenticate_with_store(&store, &text, &signature, &wallet.address, now());
        assert_eq!(
            replay.error,
            Some(AuthError::NonceNotFound(wallet.address.clone()))
        );
    }

    #[test]
    fn test_store_record_expired() {
        let service = service();
        let store = MemoryNonceStore::new();
        let wallet = TestWallet::new(0x07);

        let nonce = store.issue(&service, &wallet.address, Duration::seconds(-5));
        let text = wallet.message(&nonce).to_canonical_string();

        let result = service.authenticate_with_store(
            &store,
            &text,
            &wallet.sign(&text),
            &wallet.address,
            now(),
        );
        assert!(matches!(result.error, Some(AuthError::NonceExpired { .. })));
    }

    #[test]
    fn test_new_nonce_invalidates_old_message() {
        let service = service();
        let store = MemoryNonceStore::new();
        let wallet = TestWallet::new(0x08);

        let first = store.issue(&service, &wallet.address, Duration::minutes(10));
        let _second = store.issue(&service, &wallet.address, Duration::minutes(10));
        let text = wallet.message(&first).to_canonical_string();

        let result = service.authenticate_with_store(
            &store,
            &text,
            &wallet.sign(&text),
            &wallet.address,
            now(),
        );
        assert_eq!(result.error, Some(AuthError::NonceMismatch));
    }

    #[test]
    fn test_message_survives_parse_round_trip() {
        let wallet = TestWallet::new(0x09);
        let mut message = wallet.message("abcdef123456");
        message.resources = vec![
            "ipfs://bafybeiemxf5abjwjbikoz4mc3a3dla6ual3jsgpdr4cjr3oz3evfyavhwq/".to_string(),
            "https://app.example.org/profile.json".to_string(),
        ];
        message.request_id = Some("req-99".to_string());

        let text = message.to_canonical_string();
        let parsed = parse(&text).unwrap();
        assert_eq!(parsed, message);
        assert_eq!(parsed.domain, DOMAIN);
        assert_eq!(parse(&parsed.to_canonical_string()).unwrap(), parsed);
    }

    #[test]
    fn test_concurrent_authentications_share_one_service() {
        let service = service();
        let results: Vec<bool> = (1u8..=16)
            .into_par_iter()
            .map(|seed| {
                let wallet = TestWallet::new(seed);
                let nonce = format!("nonce{seed:02}abcdef");
                let stored = service.nonce_hash(&wallet.address, &nonce);
                let text = wallet.message(&nonce).to_canonical_string();
                service
                    .authenticate_siwe_at(&text, &wallet.sign(&text), &wallet.address, &stored, now())
                    .success
            })
            .collect();

        assert!(results.into_iter().all(|ok| ok));
    }

    #[test]
    fn test_nonce_hash_deterministic_across_instances() {
        let wallet = TestWallet::new(0x0a);
        assert_eq!(
            service().nonce_hash(&wallet.address, "n-1"),
            service().nonce_hash(&wallet.address.to_uppercase().replace("0X", "0x"), "n-1")
        );
    }
}
