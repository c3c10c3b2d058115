//! # Deterministic Signer
//!
//! Produces recoverable, low-s signatures with RFC 6979 nonces derived through
//! the in-house HMAC-SHA256. Used by the startup self-test and by test tooling;
//! the authentication path itself never signs.

use super::entities::{Address, EthSignature};
use super::errors::SignatureError;
use super::recovery::{address_from_point, is_low_s};
use primitive_types::U256;
use shared_crypto::secp256k1::{
    mod_add, mod_inv, mod_mul, mod_sub, u256_from_be_bytes, u256_to_be_bytes, N,
};
use shared_crypto::{hash_ethereum_message, CurvePoint, Hash, HmacSha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Upper bound on RFC 6979 candidates before giving up.
const MAX_NONCE_ATTEMPTS: usize = 64;

/// secp256k1 private key, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; 32],
}

impl SecretKey {
    /// Accept 32 big-endian bytes encoding a scalar in `[1, n − 1]`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SignatureError> {
        let scalar = u256_from_be_bytes(bytes);
        if scalar.is_zero() || scalar >= N {
            return Err(SignatureError::InvalidSecretKey);
        }
        Ok(Self { bytes: *bytes })
    }

    /// Decode a hex key, with or without `0x`.
    pub fn from_hex(input: &str) -> Result<Self, SignatureError> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| SignatureError::InvalidSecretKey)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// `d·G`.
    pub fn public_key(&self) -> CurvePoint {
        CurvePoint::generator().mul(&self.scalar())
    }

    /// Ethereum address of the public key.
    pub fn address(&self) -> Address {
        // d ∈ [1, n − 1] so d·G is never the identity.
        address_from_point(&self.public_key()).unwrap_or_default()
    }

    fn scalar(&self) -> U256 {
        u256_from_be_bytes(&self.bytes)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// HMAC-DRBG state from RFC 6979 section 3.2.
struct NonceGenerator {
    k: [u8; 32],
    v: [u8; 32],
}

impl NonceGenerator {
    fn new(secret: &[u8; 32], message_hash: &Hash) -> Self {
        // bits2octets: the digest reduced modulo n
        let h1 = u256_to_be_bytes(&(u256_from_be_bytes(message_hash) % N));

        let mut generator = Self {
            k: [0x00; 32],
            v: [0x01; 32],
        };
        generator.reseed(Some((secret, &h1)), 0x00);
        generator.reseed(Some((secret, &h1)), 0x01);
        generator
    }

    /// `K = HMAC_K(V ∥ tag ∥ extra)`, then `V = HMAC_K(V)`.
    fn reseed(&mut self, extra: Option<(&[u8; 32], &[u8; 32])>, tag: u8) {
        let mut mac = HmacSha256::new(&self.k);
        mac.update(&self.v);
        mac.update(&[tag]);
        if let Some((secret, h1)) = extra {
            mac.update(secret);
            mac.update(h1);
        }
        self.k = mac.finalize();
        self.v = hmac(&self.k, &self.v);
    }

    /// Next candidate `k` in `[1, n − 1]`.
    fn next_candidate(&mut self) -> Option<U256> {
        for _ in 0..MAX_NONCE_ATTEMPTS {
            self.v = hmac(&self.k, &self.v);
            let candidate = u256_from_be_bytes(&self.v);
            if !candidate.is_zero() && candidate < N {
                return Some(candidate);
            }
            self.reseed(None, 0x00);
        }
        None
    }

    /// Called when a candidate produced an unusable `r` or `s`.
    fn reject(&mut self) {
        self.reseed(None, 0x00);
    }
}

impl Drop for NonceGenerator {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}

fn hmac(key: &[u8; 32], data: &[u8; 32]) -> [u8; 32] {
    let mut mac = HmacSha256::new(key);
    mac.update(data);
    mac.finalize()
}

/// Sign a 32-byte digest, returning `v ∈ {27, 28}` and `s ≤ n/2`.
///
/// Candidates whose `R.x` is not below `n` are skipped so the recovery id is
/// always 0 or 1.
pub fn sign_prehash_recoverable(
    message_hash: &Hash,
    secret: &SecretKey,
) -> Result<EthSignature, SignatureError> {
    let d = secret.scalar();
    let z = u256_from_be_bytes(message_hash) % N;
    let mut nonces = NonceGenerator::new(&secret.bytes, message_hash);

    for _ in 0..MAX_NONCE_ATTEMPTS {
        let k = nonces.next_candidate().ok_or(SignatureError::SigningFailed)?;

        let Some((rx, ry)) = CurvePoint::generator().mul(&k).coordinates() else {
            nonces.reject();
            continue;
        };
        let r = rx.value();
        if r.is_zero() || r >= N {
            nonces.reject();
            continue;
        }

        let Some(k_inv) = mod_inv(&k, &N) else {
            nonces.reject();
            continue;
        };
        let mut s = mod_mul(&k_inv, &mod_add(&z, &mod_mul(&r, &d, &N), &N), &N);
        if s.is_zero() {
            nonces.reject();
            continue;
        }

        let mut recovery_id = u8::from(ry.is_odd());
        if !is_low_s(&s) {
            s = mod_sub(&U256::zero(), &s, &N);
            recovery_id ^= 1;
        }

        return Ok(EthSignature {
            r: u256_to_be_bytes(&r),
            s: u256_to_be_bytes(&s),
            v: 27 + recovery_id,
        });
    }

    Err(SignatureError::SigningFailed)
}

/// Sign a personal message the way `personal_sign` does.
pub fn sign_message(message: &[u8], secret: &SecretKey) -> Result<EthSignature, SignatureError> {
    sign_prehash_recoverable(&hash_ethereum_message(message), secret)
}
