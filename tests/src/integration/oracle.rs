//! # Oracle Cross-Checks
//!
//! The in-house secp256k1 and Keccak-256 against `k256` and `sha3`. Random
//! keys and messages; every disagreement is a bug on our side.

#[cfg(test)]
mod tests {
    use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
    use rand::{thread_rng, Rng, RngCore};
    use sha3::{Digest, Keccak256};
    use shared_crypto::{hash_ethereum_message, keccak256};
    use wa_01_signature_recovery::{
        recover_address, recover_from_prehash, sign_message, EthSignature, SecretKey,
    };

    const ROUNDS: usize = 32;

    fn oracle_address(key: &VerifyingKey) -> [u8; 20] {
        let encoded = key.to_encoded_point(false);
        let hash = Keccak256::digest(&encoded.as_bytes()[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        address
    }

    fn oracle_sign(key: &SigningKey, message: &[u8]) -> EthSignature {
        let (signature, recovery_id) = key
            .sign_prehash_recoverable(&hash_ethereum_message(message))
            .unwrap();
        let bytes = signature.to_bytes();

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        EthSignature { r, s, v: 27 + recovery_id.to_byte() }
    }

    fn random_message() -> Vec<u8> {
        let mut rng = thread_rng();
        let mut message = vec![0u8; rng.gen_range(0..300)];
        rng.fill_bytes(&mut message);
        message
    }

    #[test]
    fn test_keccak_matches_sha3_crate() {
        for len in [0usize, 1, 55, 56, 135, 136, 137, 272, 1000] {
            let mut data = vec![0u8; len];
            thread_rng().fill_bytes(&mut data);
            assert_eq!(keccak256(&data)[..], Keccak256::digest(&data)[..], "len {len}");
        }
    }

    #[test]
    fn test_recover_oracle_signatures() {
        for _ in 0..ROUNDS {
            let key = SigningKey::random(&mut thread_rng());
            let message = random_message();
            let signature = oracle_sign(&key, &message);

            let recovered = recover_address(&message, &signature).unwrap();
            assert_eq!(recovered, oracle_address(key.verifying_key()));
        }
    }

    #[test]
    fn test_oracle_recovers_our_signatures() {
        for _ in 0..ROUNDS {
            let oracle_key = SigningKey::random(&mut thread_rng());
            let mut secret = [0u8; 32];
            secret.copy_from_slice(&oracle_key.to_bytes());
            let key = SecretKey::from_bytes(&secret).unwrap();

            let message = random_message();
            let signature = sign_message(&message, &key).unwrap();

            let mut rs = [0u8; 64];
            rs[..32].copy_from_slice(&signature.r);
            rs[32..].copy_from_slice(&signature.s);
            let oracle_signature = Signature::from_slice(&rs).unwrap();
            let recovery_id = RecoveryId::from_byte(signature.v - 27).unwrap();

            let recovered = VerifyingKey::recover_from_prehash(
                &hash_ethereum_message(&message),
                &oracle_signature,
                recovery_id,
            )
            .unwrap();

            assert_eq!(&recovered, oracle_key.verifying_key());
            assert_eq!(key.address(), oracle_address(&recovered));
        }
    }

    #[test]
    fn test_deterministic_signatures_match_oracle() {
        // Both sides use RFC 6979 nonces and low-s normalisation
        let oracle_key = SigningKey::from_slice(&[0x42; 32]).unwrap();
        let key = SecretKey::from_bytes(&[0x42; 32]).unwrap();
        let message = b"Deterministic nonces are reproducible";

        assert_eq!(
            sign_message(message, &key).unwrap(),
            oracle_sign(&oracle_key, message)
        );
    }

    #[test]
    fn test_prehash_recovery_matches_oracle() {
        let key = SigningKey::random(&mut thread_rng());
        let mut digest = [0u8; 32];
        thread_rng().fill_bytes(&mut digest);

        let (signature, recovery_id) = key.sign_prehash_recoverable(&digest).unwrap();
        let bytes = signature.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        let ours = EthSignature { r, s, v: recovery_id.to_byte() };
        assert_eq!(
            recover_from_prehash(&digest, &ours).unwrap(),
            oracle_address(key.verifying_key())
        );
    }
}
