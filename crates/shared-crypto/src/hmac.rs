//! # HMAC-SHA256
//!
//! RFC 2104 keyed hash over the in-house [`Sha256`].
//!
//! ```text
//! HMAC(K, m) = H((K' ^ opad) || H((K' ^ ipad) || m))
//! ```
//!
//! `K'` is the key zero-padded to the 64-byte block, or `H(K)` padded when the
//! key is longer than a block. Padded key material is wiped on drop.

use crate::sha256::{Sha256, BLOCK_SIZE};
use crate::Hash;
use zeroize::Zeroize;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Streaming HMAC-SHA256.
#[derive(Clone)]
pub struct HmacSha256 {
    inner: Sha256,
    outer_key: [u8; BLOCK_SIZE],
}

impl HmacSha256 {
    /// Start a MAC under `key`. Any key length is accepted.
    pub fn new(key: &[u8]) -> Self {
        let mut block_key = [0u8; BLOCK_SIZE];
        if key.len() > BLOCK_SIZE {
            let mut digest = crate::sha256::sha256(key);
            block_key[..digest.len()].copy_from_slice(&digest);
            digest.zeroize();
        } else {
            block_key[..key.len()].copy_from_slice(key);
        }

        let mut inner_key = [0u8; BLOCK_SIZE];
        let mut outer_key = [0u8; BLOCK_SIZE];
        for i in 0..BLOCK_SIZE {
            inner_key[i] = block_key[i] ^ IPAD;
            outer_key[i] = block_key[i] ^ OPAD;
        }

        let mut inner = Sha256::new();
        inner.update(&inner_key);

        block_key.zeroize();
        inner_key.zeroize();

        Self { inner, outer_key }
    }

    /// Absorb message bytes.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Produce the 32-byte tag.
    pub fn finalize(self) -> Hash {
        let inner_digest = self.inner.clone().finalize();

        let mut outer = Sha256::new();
        outer.update(&self.outer_key);
        outer.update(&inner_digest);
        outer.finalize()
    }
}

impl Drop for HmacSha256 {
    fn drop(&mut self) {
        self.outer_key.zeroize();
    }
}

/// One-shot HMAC-SHA256.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Hash {
    let mut mac = HmacSha256::new(key);
    mac.update(data);
    mac.finalize()
}
