//! # Shared Crypto - In-House Cryptographic Primitives
//!
//! Every primitive the authentication pipeline relies on, written without an
//! external cryptographic library.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `sha256` | SHA-256 (FIPS 180-4) | HMAC, self-test vectors |
//! | `keccak` | Keccak-256 (pre-NIST padding) | Ethereum message and address hashing |
//! | `hmac` | HMAC-SHA256 (RFC 2104) | Nonce hashing, RFC 6979 nonces |
//! | `secp256k1` | Field/group arithmetic | Public-key recovery and signing |
//! | `constant_time` | XOR-accumulate equality | Secret comparison |
//!
//! ## Security Properties
//!
//! - All functions are pure; no shared mutable state
//! - Keccak uses the original `0x01` domain byte, not the SHA-3 `0x06`
//! - Modular square roots reject non-residues instead of returning garbage

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constant_time;
pub mod errors;
pub mod hmac;
pub mod keccak;
pub mod secp256k1;
pub mod sha256;

// Re-exports
pub use constant_time::ct_eq;
pub use errors::CryptoError;
pub use hmac::{hmac_sha256, HmacSha256};
pub use keccak::{hash_ethereum_message, keccak256, Keccak256, ETHEREUM_MESSAGE_PREFIX};
pub use secp256k1::{CurvePoint, FieldElement};
pub use sha256::{sha256, Sha256};

/// 256-bit digest.
pub type Hash = [u8; 32];

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
