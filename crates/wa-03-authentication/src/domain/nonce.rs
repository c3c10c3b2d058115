//! # Nonces
//!
//! Nonces are opaque random tokens handed to the wallet. The server never
//! stores the nonce itself, only `HMAC-SHA256(secret, lowercase(address) ∥ nonce)`,
//! so a leaked store cannot be replayed without the secret.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use shared_crypto::HmacSha256;
use zeroize::Zeroize;

/// Random bytes per nonce.
pub const NONCE_BYTES: usize = 32;

/// Generate an unguessable URL-safe nonce (43 characters, no padding).
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; NONCE_BYTES];
    OsRng.fill_bytes(&mut bytes);
    let nonce = URL_SAFE_NO_PAD.encode(bytes);
    bytes.zeroize();
    nonce
}

/// Lowercase hex HMAC binding `nonce` to `address`.
///
/// The address is lowercased first, so checksummed and plain spellings of
/// the same account hash identically.
pub fn nonce_hash(secret: &[u8], address: &str, nonce: &str) -> String {
    let mut mac = HmacSha256::new(secret);
    mac.update(address.to_ascii_lowercase().as_bytes())
        .update(nonce.as_bytes());
    hex::encode(mac.finalize())
}
