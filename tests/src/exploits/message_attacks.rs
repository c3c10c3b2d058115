//! # Message Attacks
//!
//! Replays and text smuggling: the signature is genuine, the context is not.

#[cfg(test)]
mod tests {
    use crate::fixtures::{now, service, MemoryNonceStore, TestWallet};
    use chrono::Duration;
    use wa_02_siwe_message::{SiweError, SiweField};
    use wa_03_authentication::{
        AddressCheck, AuthConfig, AuthError, AuthenticationApi, AuthenticationService,
    };

    #[test]
    fn test_cross_domain_replay_rejected() {
        // Signed for a phishing site, replayed against the real one
        let service = service();
        let wallet = TestWallet::new(0x31);
        let stored = service.nonce_hash(&wallet.address, "phishnonce1");

        let mut message = wallet.message("phishnonce1");
        message.domain = "app.example.org.evil.test".to_string();
        let text = message.to_canonical_string();

        let result =
            service.authenticate_siwe_at(&text, &wallet.sign(&text), &wallet.address, &stored, now());
        assert!(matches!(
            result.error,
            Some(AuthError::Siwe(SiweError::Validation { field: SiweField::Domain, .. }))
        ));
    }

    #[test]
    fn test_crlf_smuggled_text_rejected() {
        let service = service();
        let wallet = TestWallet::new(0x32);
        let stored = service.nonce_hash(&wallet.address, "crlfnonce12");

        let text = wallet
            .message("crlfnonce12")
            .to_canonical_string()
            .replace('\n', "\r\n");
        let result =
            service.authenticate_siwe_at(&text, &wallet.sign(&text), &wallet.address, &stored, now());
        assert_eq!(result.error, Some(AuthError::Siwe(SiweError::NonCanonical)));
    }

    #[test]
    fn test_trailing_newline_rejected() {
        let service = service();
        let wallet = TestWallet::new(0x33);
        let stored = service.nonce_hash(&wallet.address, "tailnonce12");

        let text = format!("{}\n", wallet.message("tailnonce12").to_canonical_string());
        let result =
            service.authenticate_siwe_at(&text, &wallet.sign(&text), &wallet.address, &stored, now());
        assert_eq!(result.error, Some(AuthError::Siwe(SiweError::NonCanonical)));
    }

    #[test]
    fn test_message_naming_victim_rejected() {
        // Attacker signs a message that names the victim, then claims to be the victim
        let service = service();
        let victim = TestWallet::new(0x34);
        let attacker = TestWallet::new(0x35);
        let stored = service.nonce_hash(&attacker.address, "victimnonce");

        let text = victim.message("victimnonce").to_canonical_string();
        let result = service.authenticate_siwe_at(
            &text,
            &attacker.sign(&text),
            &attacker.address,
            &stored,
            now(),
        );
        assert!(matches!(
            result.error,
            Some(AuthError::AddressMismatch { leg: AddressCheck::MessageAddress, .. })
        ));
    }

    #[test]
    fn test_nonce_issued_to_other_address_rejected() {
        let service = service();
        let store = MemoryNonceStore::new();
        let alice = TestWallet::new(0x36);
        let mallory = TestWallet::new(0x37);

        // Mallory obtains Alice's nonce and uses it for her own login
        let alice_nonce = store.issue(&service, &alice.address, Duration::minutes(5));
        store.issue(&service, &mallory.address, Duration::minutes(5));

        let text = mallory.message(&alice_nonce).to_canonical_string();
        let result = service.authenticate_with_store(
            &store,
            &text,
            &mallory.sign(&text),
            &mallory.address,
            now(),
        );
        assert_eq!(result.error, Some(AuthError::NonceMismatch));
    }

    #[test]
    fn test_nonce_hash_from_other_secret_rejected() {
        let wallet = TestWallet::new(0x38);
        let foreign = AuthenticationService::new(AuthConfig::new(vec![0x5a; 32], None).unwrap());
        let stored = foreign.nonce_hash(&wallet.address, "foreignnonce");

        let text = wallet.message("foreignnonce").to_canonical_string();
        let result = service().authenticate_siwe_at(
            &text,
            &wallet.sign(&text),
            &wallet.address,
            &stored,
            now(),
        );
        assert_eq!(result.error, Some(AuthError::NonceMismatch));
    }

    #[test]
    fn test_stale_message_replay_rejected() {
        let service = service();
        let wallet = TestWallet::new(0x39);
        let stored = service.nonce_hash(&wallet.address, "stalenonce1");
        let text = wallet.message("stalenonce1").to_canonical_string();
        let signature = wallet.sign(&text);

        let later = now() + Duration::minutes(10);
        let result =
            service.authenticate_siwe_at(&text, &signature, &wallet.address, &stored, later);
        assert!(matches!(
            result.error,
            Some(AuthError::Siwe(SiweError::Validation { field: SiweField::ExpirationTime, .. }))
        ));
    }

    #[test]
    fn test_expired_nonce_record_rejected() {
        let service = service();
        let store = MemoryNonceStore::new();
        let wallet = TestWallet::new(0x3a);
        let nonce = store.issue(&service, &wallet.address, Duration::zero());

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
    fn test_injected_field_line_rejected() {
        // A statement cannot carry a second Nonce line past the parser
        let service = service();
        let wallet = TestWallet::new(0x3b);
        let stored = service.nonce_hash(&wallet.address, "realnonce12");

        let text = wallet
            .message("realnonce12")
            .to_canonical_string()
            .replace("Issued At:", "Nonce: fakenonce1\nIssued At:");
        let result =
            service.authenticate_siwe_at(&text, &wallet.sign(&text), &wallet.address, &stored, now());
        assert_eq!(
            result.error,
            Some(AuthError::Siwe(SiweError::DuplicateField(SiweField::Nonce)))
        );
    }
}
